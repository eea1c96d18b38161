use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{
    BookId, BookInstance, BookInstanceId, LoanStatus, SelectLimit, SelectOffset, UserId,
};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookInstanceQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &BookInstanceId,
    ) -> error_stack::Result<Option<BookInstance>, KernelError>;
    async fn find_by_book(
        &self,
        con: &mut Self::Transaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError>;
    async fn count(&self, con: &mut Self::Transaction) -> error_stack::Result<i64, KernelError>;
    async fn count_by_status(
        &self,
        con: &mut Self::Transaction,
        status: &LoanStatus,
    ) -> error_stack::Result<i64, KernelError>;
    async fn count_on_loan_to(
        &self,
        con: &mut Self::Transaction,
        borrower: &UserId,
    ) -> error_stack::Result<i64, KernelError>;
    /// Copies on loan to `borrower`, soonest due first.
    async fn find_on_loan_to(
        &self,
        con: &mut Self::Transaction,
        borrower: &UserId,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError>;
    async fn count_outstanding_loans(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<i64, KernelError>;
    /// Copies on loan to anybody, soonest due first.
    async fn find_outstanding_loans(
        &self,
        con: &mut Self::Transaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookInstance>, KernelError>;
}

pub trait DependOnBookInstanceQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookInstanceQuery: BookInstanceQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn book_instance_query(&self) -> &Self::BookInstanceQuery;
}
