use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::{validation_error, KernelError};

const MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct LanguageName(String);

impl LanguageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn parse(name: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(validation_error("name", "Language name must not be empty"));
        }
        if name.chars().count() > MAX_LENGTH {
            return Err(validation_error(
                "name",
                format!("Language name must be at most {MAX_LENGTH} characters"),
            ));
        }
        Ok(Self(name))
    }
}
