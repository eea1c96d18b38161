use uuid::Uuid;

use kernel::prelude::entity::{DestructLanguage, Language, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Language> for LanguageDto {
    fn from(value: Language) -> Self {
        let DestructLanguage { id, name } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug)]
pub struct CreateLanguageDto {
    pub actor: User,
    pub name: String,
}
