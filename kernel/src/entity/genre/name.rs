use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::{validation_error, KernelError};

const MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct GenreName(String);

impl GenreName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Checked constructor for user input, e.g. "Science Fiction".
    pub fn parse(name: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(validation_error("name", "Genre name must not be empty"));
        }
        if name.chars().count() > MAX_LENGTH {
            return Err(validation_error(
                "name",
                format!("Genre name must be at most {MAX_LENGTH} characters"),
            ));
        }
        Ok(Self(name))
    }
}
