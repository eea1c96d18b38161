use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::AuthorQuery;
use kernel::interface::update::AuthorModifier;
use kernel::prelude::entity::{
    Author, AuthorId, FirstName, LastName, Lifespan, SelectLimit, SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery for PostgresAuthorRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        PgAuthorInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        PgAuthorInternal::find_all(con, limit, offset).await
    }

    async fn count(&self, con: &mut PostgresTransaction) -> error_stack::Result<i64, KernelError> {
        PgAuthorInternal::count(con).await
    }
}

#[async_trait::async_trait]
impl AuthorModifier for PostgresAuthorRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::create(con, author).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::update(con, author).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::delete(con, author_id).await
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    date_of_birth: Option<Date>,
    date_of_death: Option<Date>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = error_stack::Report<KernelError>;
    fn try_from(value: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author::new(
            AuthorId::new(value.id),
            FirstName::new(value.first_name),
            LastName::new(value.last_name),
            Lifespan::new(value.date_of_birth, value.date_of_death)?,
        ))
    }
}

pub(in crate::database) struct PgAuthorInternal;

impl PgAuthorInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name, date_of_birth, date_of_death
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Author::try_from).transpose()
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, first_name, last_name, date_of_birth, date_of_death
            FROM authors
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Author::try_from).collect()
    }

    async fn count(con: &mut PgConnection) -> error_stack::Result<i64, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM authors")
            .fetch_one(con)
            .await
            .convert_error()
    }

    async fn create(con: &mut PgConnection, author: &Author) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO authors (id, first_name, last_name, date_of_birth, date_of_death)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(author.id().as_ref())
        .bind(author.first_name().as_ref())
        .bind(author.last_name().as_ref())
        .bind(author.lifespan().date_of_birth())
        .bind(author.lifespan().date_of_death())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, author: &Author) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE authors
            SET first_name = $2, last_name = $3, date_of_birth = $4, date_of_death = $5
            WHERE id = $1
            "#,
        )
        .bind(author.id().as_ref())
        .bind(author.first_name().as_ref())
        .bind(author.last_name().as_ref())
        .bind(author.lifespan().date_of_birth())
        .bind(author.lifespan().date_of_death())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(error_stack::Report::new(KernelError::NotFound)
                .attach_printable(format!("No author with id {}", author.id().as_ref())));
        }
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            DELETE FROM authors
            WHERE id = $1
            "#,
        )
        .bind(author_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(error_stack::Report::new(KernelError::NotFound)
                .attach_printable(format!("No author with id {}", author_id.as_ref())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::AuthorQuery;
    use kernel::interface::update::AuthorModifier;
    use kernel::prelude::entity::{Author, AuthorId, FirstName, LastName, Lifespan};
    use kernel::KernelError;

    use crate::database::postgres::{PostgresAuthorRepository, PostgresDatabase};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;
        let id = AuthorId::new(Uuid::new_v4());
        let author = Author::new(
            id.clone(),
            FirstName::new("Ursula"),
            LastName::new("Le Guin"),
            Lifespan::new(Some(date!(1929 - 10 - 21)), Some(date!(2018 - 01 - 22)))?,
        );
        PostgresAuthorRepository.create(&mut con, &author).await?;
        let found = PostgresAuthorRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(author.clone()));

        let author = author.reconstruct(|a| a.first_name = FirstName::new("Ursula K."));
        PostgresAuthorRepository.update(&mut con, &author).await?;
        let found = PostgresAuthorRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(author));

        PostgresAuthorRepository.delete(&mut con, &id).await?;
        let found = PostgresAuthorRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());
        con.roll_back().await?;
        Ok(())
    }
}
