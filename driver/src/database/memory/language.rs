use error_stack::Report;

use kernel::interface::query::LanguageQuery;
use kernel::interface::update::LanguageModifier;
use kernel::prelude::entity::{Language, LanguageId};
use kernel::KernelError;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryLanguageRepository;

#[async_trait::async_trait]
impl LanguageQuery for InMemoryLanguageRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &LanguageId,
    ) -> error_stack::Result<Option<Language>, KernelError> {
        Ok(con.languages.get(id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Language>, KernelError> {
        let mut languages = con.languages.values().cloned().collect::<Vec<_>>();
        languages.sort_by(|a, b| (a.name().as_ref(), a.id()).cmp(&(b.name().as_ref(), b.id())));
        Ok(languages)
    }
}

#[async_trait::async_trait]
impl LanguageModifier for InMemoryLanguageRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        language: &Language,
    ) -> error_stack::Result<(), KernelError> {
        if con.languages.contains_key(language.id())
            || con
                .languages
                .values()
                .any(|other| other.name() == language.name())
        {
            return Err(Report::new(KernelError::ConstraintViolation).attach_printable(
                format!("Language {} already exists", language.name().as_ref()),
            ));
        }
        con.languages.insert(language.id().clone(), language.clone());
        Ok(())
    }
}
