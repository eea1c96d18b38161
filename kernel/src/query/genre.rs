use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{BookId, Genre, GenreId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait GenreQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &GenreId,
    ) -> error_stack::Result<Option<Genre>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Genre>, KernelError>;
    async fn find_by_book(
        &self,
        con: &mut Self::Transaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Genre>, KernelError>;
    async fn count(&self, con: &mut Self::Transaction) -> error_stack::Result<i64, KernelError>;
}

pub trait DependOnGenreQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type GenreQuery: GenreQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn genre_query(&self) -> &Self::GenreQuery;
}
