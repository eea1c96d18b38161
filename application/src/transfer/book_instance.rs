use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{BookInstance, DestructBookInstance, LoanStatus, PageNumber, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInstanceDto {
    pub id: Uuid,
    pub book_id: Uuid,
    pub imprint: String,
    pub due_back: Option<Date>,
    pub borrower: Option<Uuid>,
    pub status: LoanStatus,
    pub is_overdue: bool,
}

impl BookInstanceDto {
    /// Overdue-ness is judged against `today` at read time.
    pub fn new(instance: BookInstance, today: Date) -> Self {
        let is_overdue = instance.is_overdue(today);
        let DestructBookInstance {
            id,
            book_id,
            imprint,
            due_back,
            borrower,
            status,
        } = instance.into_destruct();
        Self {
            id: id.into(),
            book_id: book_id.into(),
            imprint: imprint.into(),
            due_back: due_back.map(Into::into),
            borrower: borrower.map(Into::into),
            status,
            is_overdue,
        }
    }
}

/// A copy on loan with the title it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanDto {
    pub instance: BookInstanceDto,
    pub title: String,
}

#[derive(Debug)]
pub struct GetBookInstanceDto {
    pub id: Uuid,
}

#[derive(Debug)]
pub struct CreateBookInstanceDto {
    pub actor: User,
    pub book_id: Uuid,
    pub imprint: String,
    pub status: Option<LoanStatus>,
}

#[derive(Debug)]
pub struct GetLoansForUserDto {
    pub actor: User,
    pub page: PageNumber,
}

#[derive(Debug)]
pub struct GetOutstandingLoansDto {
    pub actor: User,
    pub page: PageNumber,
}

#[derive(Debug)]
pub struct ProposeRenewalDto {
    pub actor: User,
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalProposalDto {
    pub instance: BookInstanceDto,
    pub proposed_due_back: Date,
}

#[derive(Debug)]
pub struct RenewBookInstanceDto {
    pub actor: User,
    pub id: Uuid,
    pub due_back: Date,
}

#[derive(Debug)]
pub struct CheckoutDto {
    pub actor: User,
    pub id: Uuid,
    pub borrower: Uuid,
    pub due_back: Option<Date>,
}

#[derive(Debug)]
pub struct ReserveDto {
    pub actor: User,
    pub id: Uuid,
    pub borrower: Uuid,
    pub hold_until: Option<Date>,
}

/// Transitions that need nothing beyond the copy itself.
#[derive(Debug)]
pub struct TransitionDto {
    pub actor: User,
    pub id: Uuid,
}
