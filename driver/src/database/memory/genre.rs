use error_stack::Report;

use kernel::interface::query::GenreQuery;
use kernel::interface::update::GenreModifier;
use kernel::prelude::entity::{BookId, Genre, GenreId};
use kernel::KernelError;

use crate::database::memory::InMemoryTransaction;

pub struct InMemoryGenreRepository;

#[async_trait::async_trait]
impl GenreQuery for InMemoryGenreRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &GenreId,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        Ok(con.genres.get(id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        let mut genres = con.genres.values().cloned().collect::<Vec<_>>();
        genres.sort_by(|a, b| (a.name().as_ref(), a.id()).cmp(&(b.name().as_ref(), b.id())));
        Ok(genres)
    }

    async fn find_by_book(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        // links are keyed (book, genre), so this walks genres in id order
        Ok(con
            .book_genres
            .iter()
            .filter(|(book, _)| book == book_id)
            .filter_map(|(_, genre)| con.genres.get(genre).cloned())
            .collect())
    }

    async fn count(&self, con: &mut InMemoryTransaction) -> error_stack::Result<i64, KernelError> {
        Ok(con.genres.len() as i64)
    }
}

#[async_trait::async_trait]
impl GenreModifier for InMemoryGenreRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        genre: &Genre,
    ) -> error_stack::Result<(), KernelError> {
        if con.genres.contains_key(genre.id())
            || con.genres.values().any(|other| other.name() == genre.name())
        {
            return Err(Report::new(KernelError::ConstraintViolation)
                .attach_printable(format!("Genre {} already exists", genre.name().as_ref())));
        }
        con.genres.insert(genre.id().clone(), genre.clone());
        Ok(())
    }
}
