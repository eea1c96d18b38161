use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::GenreQuery;
use kernel::interface::update::GenreModifier;
use kernel::prelude::entity::{BookId, Genre, GenreId, GenreName};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresGenreRepository;

#[async_trait::async_trait]
impl GenreQuery for PostgresGenreRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &GenreId,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        PgGenreInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        PgGenreInternal::find_all(con).await
    }

    async fn find_by_book(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        PgGenreInternal::find_by_book(con, book_id).await
    }

    async fn count(&self, con: &mut PostgresTransaction) -> error_stack::Result<i64, KernelError> {
        PgGenreInternal::count(con).await
    }
}

#[async_trait::async_trait]
impl GenreModifier for PostgresGenreRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        genre: &Genre,
    ) -> error_stack::Result<(), KernelError> {
        PgGenreInternal::create(con, genre).await
    }
}

#[derive(sqlx::FromRow)]
struct GenreRow {
    id: Uuid,
    name: String,
}

impl From<GenreRow> for Genre {
    fn from(value: GenreRow) -> Self {
        Genre::new(GenreId::new(value.id), GenreName::new(value.name))
    }
}

pub(in crate::database) struct PgGenreInternal;

impl PgGenreInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &GenreId,
    ) -> error_stack::Result<Option<Genre>, KernelError> {
        let row = sqlx::query_as::<_, GenreRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM genres
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Genre::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Genre>, KernelError> {
        let rows = sqlx::query_as::<_, GenreRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM genres
            ORDER BY name, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn find_by_book(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        let rows = sqlx::query_as::<_, GenreRow>(
            // language=postgresql
            r#"
            SELECT genres.id, genres.name
            FROM genres
            INNER JOIN book_genres ON book_genres.genre_id = genres.id
            WHERE book_genres.book_id = $1
            ORDER BY genres.id
            "#,
        )
        .bind(book_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn count(con: &mut PgConnection) -> error_stack::Result<i64, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM genres")
            .fetch_one(con)
            .await
            .convert_error()
    }

    async fn create(con: &mut PgConnection, genre: &Genre) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO genres (id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(genre.id().as_ref())
        .bind(genre.name().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
