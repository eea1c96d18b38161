mod due_back;
mod id;
mod imprint;
mod status;
mod window;

pub use self::{due_back::*, id::*, imprint::*, status::*, window::*};
use crate::entity::{BookId, UserId};
use destructure::{Destructure, Mutation};
use time::Date;
use vodca::References;

/// A circulable copy of a [`Book`](crate::entity::Book).
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct BookInstance {
    id: BookInstanceId,
    book_id: BookId,
    imprint: Imprint,
    due_back: Option<DueBack>,
    borrower: Option<UserId>,
    status: LoanStatus,
}

impl BookInstance {
    pub fn new(
        id: BookInstanceId,
        book_id: BookId,
        imprint: Imprint,
        due_back: Option<DueBack>,
        borrower: Option<UserId>,
        status: LoanStatus,
    ) -> Self {
        Self {
            id,
            book_id,
            imprint,
            due_back,
            borrower,
            status,
        }
    }

    /// Fresh copy from intake: nobody holds it and no date is attached.
    pub fn intake(
        id: BookInstanceId,
        book_id: BookId,
        imprint: Imprint,
        status: LoanStatus,
    ) -> Self {
        Self::new(id, book_id, imprint, None, None, status)
    }

    /// Computed on every read, never stored.
    pub fn is_overdue(&self, today: Date) -> bool {
        match (&self.status, &self.due_back) {
            (LoanStatus::OnLoan, Some(due_back)) => *due_back.as_ref() < today,
            _ => false,
        }
    }
}
