use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::{validation_error, KernelError};

const MIN_LENGTH: usize = 10;
const MAX_LENGTH: usize = 13;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }

    pub fn parse(isbn: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let isbn = isbn.into().trim().to_string();
        let length = isbn.chars().count();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(validation_error(
                "isbn",
                format!("ISBN must be between {MIN_LENGTH} and {MAX_LENGTH} characters"),
            ));
        }
        Ok(Self(isbn))
    }
}
