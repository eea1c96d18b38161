use serde::Deserialize;

use application::transfer::{GetLoansForUserDto, GetOutstandingLoansDto};
use kernel::prelude::entity::User;
use kernel::KernelError;

use crate::controller::TryIntake;
use crate::route::page::page_number;

#[derive(Debug, Deserialize)]
pub struct OwnLoansRequest {
    page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BorrowedRequest {
    page: Option<String>,
}

pub struct Transformer;

impl TryIntake<(User, OwnLoansRequest)> for Transformer {
    type To = GetLoansForUserDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, (actor, input): (User, OwnLoansRequest)) -> Result<Self::To, Self::Error> {
        Ok(GetLoansForUserDto {
            actor,
            page: page_number(input.page.as_deref())?,
        })
    }
}

impl TryIntake<(User, BorrowedRequest)> for Transformer {
    type To = GetOutstandingLoansDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, (actor, input): (User, BorrowedRequest)) -> Result<Self::To, Self::Error> {
        Ok(GetOutstandingLoansDto {
            actor,
            page: page_number(input.page.as_deref())?,
        })
    }
}
