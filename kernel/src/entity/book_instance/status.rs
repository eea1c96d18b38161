use std::fmt::{Display, Formatter};

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    #[default]
    Maintenance,
    OnLoan,
    Available,
    Reserved,
}

impl LoanStatus {
    /// Single character stored in the `status` column.
    pub fn code(&self) -> &'static str {
        match self {
            LoanStatus::Maintenance => "m",
            LoanStatus::OnLoan => "o",
            LoanStatus::Available => "a",
            LoanStatus::Reserved => "r",
        }
    }

    pub fn from_code(code: &str) -> error_stack::Result<Self, KernelError> {
        match code.trim() {
            "m" => Ok(LoanStatus::Maintenance),
            "o" => Ok(LoanStatus::OnLoan),
            "a" => Ok(LoanStatus::Available),
            "r" => Ok(LoanStatus::Reserved),
            other => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Unknown loan status code: {other}"))),
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanStatus::Maintenance => write!(f, "Maintenance"),
            LoanStatus::OnLoan => write!(f, "On loan"),
            LoanStatus::Available => write!(f, "Available"),
            LoanStatus::Reserved => write!(f, "Reserved"),
        }
    }
}
