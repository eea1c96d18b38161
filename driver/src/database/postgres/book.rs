use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    AuthorId, Book, BookId, BookSummary, BookTitle, GenreId, Isbn, LanguageId, SelectLimit,
    SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con, limit, offset).await
    }

    async fn find_by_author(
        &self,
        con: &mut PostgresTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_by_author(con, author_id).await
    }

    async fn count(&self, con: &mut PostgresTransaction) -> error_stack::Result<i64, KernelError> {
        PgBookInternal::count(con).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn add_genre(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
        genre_id: &GenreId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::add_genre(con, book_id, genre_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    summary: String,
    isbn: String,
    author_id: Uuid,
    language_id: Option<Uuid>,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            BookSummary::new(value.summary),
            Isbn::new(value.isbn),
            AuthorId::new(value.author_id),
            value.language_id.map(LanguageId::new),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, summary, isbn, author_id, language_id
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, summary, isbn, author_id, language_id
            FROM books
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_author(
        con: &mut PgConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, summary, isbn, author_id, language_id
            FROM books
            WHERE author_id = $1
            ORDER BY id
            "#,
        )
        .bind(author_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn count(con: &mut PgConnection) -> error_stack::Result<i64, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(con)
            .await
            .convert_error()
    }

    async fn create(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        let language_id: Option<Uuid> = book.language_id().as_ref().map(|id| *id.as_ref());
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO books (id, title, summary, isbn, author_id, language_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.summary().as_ref())
        .bind(book.isbn().as_ref())
        .bind(book.author_id().as_ref())
        .bind(language_id)
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn add_genre(
        con: &mut PgConnection,
        book_id: &BookId,
        genre_id: &GenreId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO book_genres (book_id, genre_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(book_id.as_ref())
        .bind(genre_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
