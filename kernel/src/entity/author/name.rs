use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::{validation_error, KernelError};

const MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct FirstName(String);

impl FirstName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn parse(name: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        checked("first_name", name.into()).map(Self)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct LastName(String);

impl LastName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn parse(name: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        checked("last_name", name.into()).map(Self)
    }
}

fn checked(field: &'static str, name: String) -> error_stack::Result<String, KernelError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(validation_error(field, "This field is required"));
    }
    if name.chars().count() > MAX_LENGTH {
        return Err(validation_error(
            field,
            format!("Ensure this value has at most {MAX_LENGTH} characters"),
        ));
    }
    Ok(name)
}
