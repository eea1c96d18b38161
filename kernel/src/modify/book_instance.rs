use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::BookInstance;
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookInstanceModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError>;
    /// Overwrites status, due date and borrower of one row. Last write wins.
    async fn update(
        &self,
        con: &mut Self::Transaction,
        instance: &BookInstance,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookInstanceModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookInstanceModifier: BookInstanceModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn book_instance_modifier(&self) -> &Self::BookInstanceModifier;
}
