use kernel::prelude::entity::SessionId;

#[derive(Debug)]
pub struct GetCatalogSummaryDto {
    /// `None` opens a new session.
    pub session: Option<SessionId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummaryDto {
    pub session: SessionId,
    pub num_books: i64,
    pub num_instances: i64,
    pub num_instances_available: i64,
    pub num_authors: i64,
    pub num_genres: i64,
    pub num_visits: i64,
}
