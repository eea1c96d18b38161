mod author;
mod book;
mod book_instance;
mod catalog;
mod genre;
mod language;
mod loan;
mod user;

pub use self::{
    author::*, book::*, book_instance::*, catalog::*, genre::*, language::*, loan::*, user::*,
};

use error_stack::Report;
use kernel::prelude::entity::PageSize;
use kernel::KernelError;

pub const BOOK_PAGE_SIZE: PageSize = PageSize::new(2);
pub const AUTHOR_PAGE_SIZE: PageSize = PageSize::new(3);
pub const USER_LOAN_PAGE_SIZE: PageSize = PageSize::new(10);
pub const OUTSTANDING_LOAN_PAGE_SIZE: PageSize = PageSize::new(2);

fn not_found(kind: &str, id: impl std::fmt::Display) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("No {kind} with id {id}"))
}
