use time::Date;

use kernel::interface::update::SessionModifier;
use kernel::prelude::entity::{SessionId, VisitCount};
use kernel::KernelError;

use crate::database::memory::InMemoryTransaction;

pub struct InMemorySessionRepository;

#[async_trait::async_trait]
impl SessionModifier for InMemorySessionRepository {
    type Transaction = InMemoryTransaction;

    async fn record_visit(
        &self,
        con: &mut InMemoryTransaction,
        session: &SessionId,
        today: &Date,
    ) -> error_stack::Result<VisitCount, KernelError> {
        let (visits, last_seen) = con
            .sessions
            .entry(session.clone())
            .or_insert((VisitCount::default(), *today));
        *visits = visits.next();
        *last_seen = *today;
        Ok(*visits)
    }

    async fn delete_expired(
        &self,
        con: &mut InMemoryTransaction,
        seen_before: &Date,
    ) -> error_stack::Result<u64, KernelError> {
        let before = con.sessions.len();
        con.sessions
            .retain(|_, (_, last_seen)| *last_seen >= *seen_before);
        Ok((before - con.sessions.len()) as u64)
    }
}
