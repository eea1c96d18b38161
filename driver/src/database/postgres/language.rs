use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::LanguageQuery;
use kernel::interface::update::LanguageModifier;
use kernel::prelude::entity::{Language, LanguageId, LanguageName};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresLanguageRepository;

#[async_trait::async_trait]
impl LanguageQuery for PostgresLanguageRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &LanguageId,
    ) -> error_stack::Result<Option<Language>, KernelError> {
        PgLanguageInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Language>, KernelError> {
        PgLanguageInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl LanguageModifier for PostgresLanguageRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        language: &Language,
    ) -> error_stack::Result<(), KernelError> {
        PgLanguageInternal::create(con, language).await
    }
}

#[derive(sqlx::FromRow)]
struct LanguageRow {
    id: Uuid,
    name: String,
}

impl From<LanguageRow> for Language {
    fn from(value: LanguageRow) -> Self {
        Language::new(LanguageId::new(value.id), LanguageName::new(value.name))
    }
}

pub(in crate::database) struct PgLanguageInternal;

impl PgLanguageInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &LanguageId,
    ) -> error_stack::Result<Option<Language>, KernelError> {
        let row = sqlx::query_as::<_, LanguageRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM languages
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Language::from))
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Language>, KernelError> {
        let rows = sqlx::query_as::<_, LanguageRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM languages
            ORDER BY name, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Language::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        language: &Language,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO languages (id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(language.id().as_ref())
        .bind(language.name().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
