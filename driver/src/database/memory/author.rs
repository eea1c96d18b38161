use error_stack::Report;

use kernel::interface::query::AuthorQuery;
use kernel::interface::update::AuthorModifier;
use kernel::prelude::entity::{Author, AuthorId, SelectLimit, SelectOffset};
use kernel::KernelError;

use crate::database::memory::{window, InMemoryTransaction};

pub struct InMemoryAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery for InMemoryAuthorRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        Ok(con.authors.get(id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        Ok(window(con.authors.values().cloned(), limit, offset))
    }

    async fn count(&self, con: &mut InMemoryTransaction) -> error_stack::Result<i64, KernelError> {
        Ok(con.authors.len() as i64)
    }
}

#[async_trait::async_trait]
impl AuthorModifier for InMemoryAuthorRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        if con.authors.contains_key(author.id()) {
            return Err(Report::new(KernelError::ConstraintViolation)
                .attach_printable(format!("Author {} already exists", author.id().as_ref())));
        }
        con.authors.insert(author.id().clone(), author.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        match con.authors.get_mut(author.id()) {
            Some(stored) => {
                *stored = author.clone();
                Ok(())
            }
            None => Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No author with id {}", author.id().as_ref()))),
        }
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        if !con.authors.contains_key(author_id) {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("No author with id {}", author_id.as_ref())));
        }
        if con.books.values().any(|book| book.author_id() == author_id) {
            return Err(Report::new(KernelError::ConstraintViolation).attach_printable(format!(
                "Author {} is still referenced by books",
                author_id.as_ref()
            )));
        }
        con.authors.remove(author_id);
        Ok(())
    }
}
