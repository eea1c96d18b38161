use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::{validation_error, KernelError};

const MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Imprint(String);

impl Imprint {
    pub fn new(imprint: impl Into<String>) -> Self {
        Self(imprint.into())
    }

    pub fn parse(imprint: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let imprint = imprint.into().trim().to_string();
        if imprint.is_empty() {
            return Err(validation_error("imprint", "This field is required"));
        }
        if imprint.chars().count() > MAX_LENGTH {
            return Err(validation_error(
                "imprint",
                format!("Ensure this value has at most {MAX_LENGTH} characters"),
            ));
        }
        Ok(Self(imprint))
    }
}
