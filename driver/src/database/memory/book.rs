use error_stack::Report;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{AuthorId, Book, BookId, GenreId, SelectLimit, SelectOffset};
use kernel::KernelError;

use crate::database::memory::{window, InMemoryTransaction};

pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.books.get(id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(window(con.books.values().cloned(), limit, offset))
    }

    async fn find_by_author(
        &self,
        con: &mut InMemoryTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con
            .books
            .values()
            .filter(|book| book.author_id() == author_id)
            .cloned()
            .collect())
    }

    async fn count(&self, con: &mut InMemoryTransaction) -> error_stack::Result<i64, KernelError> {
        Ok(con.books.len() as i64)
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        if con.books.contains_key(book.id())
            || con.books.values().any(|other| other.isbn() == book.isbn())
        {
            return Err(Report::new(KernelError::ConstraintViolation)
                .attach_printable(format!("ISBN {} is already catalogued", book.isbn().as_ref())));
        }
        if !con.authors.contains_key(book.author_id()) {
            return Err(Report::new(KernelError::ConstraintViolation).attach_printable(format!(
                "No author with id {}",
                book.author_id().as_ref()
            )));
        }
        if let Some(language_id) = book.language_id() {
            if !con.languages.contains_key(language_id) {
                return Err(Report::new(KernelError::ConstraintViolation).attach_printable(
                    format!("No language with id {}", language_id.as_ref()),
                ));
            }
        }
        con.books.insert(book.id().clone(), book.clone());
        Ok(())
    }

    async fn add_genre(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
        genre_id: &GenreId,
    ) -> error_stack::Result<(), KernelError> {
        if !con.books.contains_key(book_id) || !con.genres.contains_key(genre_id) {
            return Err(Report::new(KernelError::ConstraintViolation).attach_printable(format!(
                "Cannot link book {} to genre {}",
                book_id.as_ref(),
                genre_id.as_ref()
            )));
        }
        con.book_genres.insert((book_id.clone(), genre_id.clone()));
        Ok(())
    }
}
