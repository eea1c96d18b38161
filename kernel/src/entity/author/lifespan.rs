use serde::{Deserialize, Serialize};
use time::Date;

use crate::{validation_error, KernelError};

/// Birth and death dates of an author. Death never precedes birth when both are known.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Lifespan {
    date_of_birth: Option<Date>,
    date_of_death: Option<Date>,
}

impl Lifespan {
    pub fn new(
        date_of_birth: Option<Date>,
        date_of_death: Option<Date>,
    ) -> error_stack::Result<Self, KernelError> {
        if let (Some(birth), Some(death)) = (date_of_birth, date_of_death) {
            if death < birth {
                return Err(validation_error(
                    "date_of_death",
                    "Date of death must not be earlier than date of birth",
                ));
            }
        }
        Ok(Self {
            date_of_birth,
            date_of_death,
        })
    }

    pub fn unknown() -> Self {
        Self {
            date_of_birth: None,
            date_of_death: None,
        }
    }

    pub fn date_of_birth(&self) -> Option<Date> {
        self.date_of_birth
    }

    pub fn date_of_death(&self) -> Option<Date> {
        self.date_of_death
    }
}
