mod id;
mod name;

pub use self::{id::*, name::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Language {
    id: LanguageId,
    name: LanguageName,
}

impl Language {
    pub fn new(id: LanguageId, name: LanguageName) -> Self {
        Self { id, name }
    }
}
