use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Language;
use crate::KernelError;

#[async_trait::async_trait]
pub trait LanguageModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        language: &Language,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnLanguageModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type LanguageModifier: LanguageModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn language_modifier(&self) -> &Self::LanguageModifier;
}
