use time::{Date, Duration};

use crate::entity::DueBack;
use crate::{validation_error, KernelError};

pub const LOAN_PERIOD: Duration = Duration::weeks(4);
pub const HOLD_PERIOD: Duration = Duration::weeks(1);

const DUE_BACK_FIELD: &str = "due_back";

/// Range of dates a due date may be set to: from today up to today plus a fixed period.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DueDateWindow {
    today: Date,
    period: Duration,
    action: &'static str,
    period_label: &'static str,
}

impl DueDateWindow {
    pub fn renewal(today: Date) -> Self {
        Self {
            today,
            period: LOAN_PERIOD,
            action: "renewal",
            period_label: "4 weeks",
        }
    }

    pub fn loan(today: Date) -> Self {
        Self {
            today,
            period: LOAN_PERIOD,
            action: "loan",
            period_label: "4 weeks",
        }
    }

    pub fn hold(today: Date) -> Self {
        Self {
            today,
            period: HOLD_PERIOD,
            action: "hold",
            period_label: "1 week",
        }
    }

    /// Latest date inside the window, offered when no date was entered.
    pub fn proposed(&self) -> DueBack {
        DueBack::new(self.latest())
    }

    pub fn check(&self, candidate: Date) -> error_stack::Result<DueBack, KernelError> {
        if candidate < self.today {
            return Err(validation_error(
                DUE_BACK_FIELD,
                format!("Invalid date - {} in past", self.action),
            ));
        }
        if candidate > self.latest() {
            return Err(validation_error(
                DUE_BACK_FIELD,
                format!(
                    "Invalid date - {} more than {} ahead",
                    self.action, self.period_label
                ),
            ));
        }
        Ok(DueBack::new(candidate))
    }

    /// Uses the proposed date when nothing was entered.
    pub fn check_or_propose(
        &self,
        candidate: Option<Date>,
    ) -> error_stack::Result<DueBack, KernelError> {
        match candidate {
            Some(candidate) => self.check(candidate),
            None => Ok(self.proposed()),
        }
    }

    fn latest(&self) -> Date {
        self.today.checked_add(self.period).unwrap_or(Date::MAX)
    }
}
