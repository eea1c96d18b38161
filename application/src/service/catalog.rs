use uuid::Uuid;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    AuthorQuery, BookInstanceQuery, BookQuery, DependOnAuthorQuery, DependOnBookInstanceQuery,
    DependOnBookQuery, DependOnGenreQuery, GenreQuery,
};
use kernel::interface::update::{DependOnSessionModifier, SessionModifier};
use kernel::prelude::entity::{session_expiry, LoanStatus, SessionId};
use kernel::KernelError;

use crate::transfer::{CatalogSummaryDto, GetCatalogSummaryDto};

#[async_trait::async_trait]
pub trait GetCatalogSummaryService:
    'static
    + Sync
    + Send
    + DependOnBookQuery
    + DependOnBookInstanceQuery
    + DependOnAuthorQuery
    + DependOnGenreQuery
    + DependOnSessionModifier
    + DependOnClock
{
    /// Counts for the landing page. Bumps the caller's visit counter as a side effect.
    async fn get_catalog_summary(
        &self,
        dto: GetCatalogSummaryDto,
    ) -> error_stack::Result<CatalogSummaryDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let num_books = self.book_query().count(&mut connection).await?;
        let num_instances = self.book_instance_query().count(&mut connection).await?;
        let num_instances_available = self
            .book_instance_query()
            .count_by_status(&mut connection, &LoanStatus::Available)
            .await?;
        let num_authors = self.author_query().count(&mut connection).await?;
        let num_genres = self.genre_query().count(&mut connection).await?;

        let today = self.clock().today();
        let expired = self
            .session_modifier()
            .delete_expired(&mut connection, &session_expiry(today))
            .await?;
        if expired > 0 {
            tracing::debug!(expired, "dropped idle sessions");
        }
        let session = dto
            .session
            .unwrap_or_else(|| SessionId::new(Uuid::new_v4()));
        let visits = self
            .session_modifier()
            .record_visit(&mut connection, &session, &today)
            .await?;
        connection.commit().await?;

        Ok(CatalogSummaryDto {
            session,
            num_books,
            num_instances,
            num_instances_available,
            num_authors,
            num_genres,
            num_visits: visits.into(),
        })
    }
}

impl<T> GetCatalogSummaryService for T where
    T: DependOnBookQuery
        + DependOnBookInstanceQuery
        + DependOnAuthorQuery
        + DependOnGenreQuery
        + DependOnSessionModifier
        + DependOnClock
{
}
