use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::{validation_error, KernelError};

const MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn parse(title: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(validation_error("title", "This field is required"));
        }
        if title.chars().count() > MAX_LENGTH {
            return Err(validation_error(
                "title",
                format!("Ensure this value has at most {MAX_LENGTH} characters"),
            ));
        }
        Ok(Self(title))
    }
}
