use sqlx::PgConnection;
use time::Date;

use kernel::interface::update::SessionModifier;
use kernel::prelude::entity::{SessionId, VisitCount};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresSessionRepository;

#[async_trait::async_trait]
impl SessionModifier for PostgresSessionRepository {
    type Transaction = PostgresTransaction;

    async fn record_visit(
        &self,
        con: &mut PostgresTransaction,
        session: &SessionId,
        today: &Date,
    ) -> error_stack::Result<VisitCount, KernelError> {
        PgSessionInternal::record_visit(con, session, today).await
    }

    async fn delete_expired(
        &self,
        con: &mut PostgresTransaction,
        seen_before: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        PgSessionInternal::delete_expired(con, seen_before).await
    }
}

pub(in crate::database) struct PgSessionInternal;

impl PgSessionInternal {
    async fn record_visit(
        con: &mut PgConnection,
        session: &SessionId,
        today: &Date,
    ) -> error_stack::Result<VisitCount, KernelError> {
        // language=postgresql
        let visits = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO sessions (id, num_visits, last_seen)
            VALUES ($1, 1, $2)
            ON CONFLICT (id) DO UPDATE SET num_visits = sessions.num_visits + 1,
                                           last_seen  = EXCLUDED.last_seen
            RETURNING num_visits
            "#,
        )
        .bind(session.as_ref())
        .bind(today)
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(VisitCount::new(visits))
    }

    async fn delete_expired(
        con: &mut PgConnection,
        seen_before: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE last_seen < $1
            "#,
        )
        .bind(seen_before)
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected())
    }
}
