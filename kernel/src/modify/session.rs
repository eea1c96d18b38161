use time::Date;

use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{SessionId, VisitCount};
use crate::KernelError;

#[async_trait::async_trait]
pub trait SessionModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Increments the visit counter of `session`, creating it at zero first, marks it seen on
    /// `today` and returns the new value.
    async fn record_visit(
        &self,
        con: &mut Self::Transaction,
        session: &SessionId,
        today: &Date,
    ) -> error_stack::Result<VisitCount, KernelError>;
    /// Deletes every session last seen before `seen_before`. Returns how many went.
    async fn delete_expired(
        &self,
        con: &mut Self::Transaction,
        seen_before: &Date,
    ) -> error_stack::Result<u64, KernelError>;
}

pub trait DependOnSessionModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type SessionModifier: SessionModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn session_modifier(&self) -> &Self::SessionModifier;
}
