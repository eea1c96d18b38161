use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{CreateBookDto, CreateBookInstanceDto, GetAllBookDto, GetBookDto};
use kernel::prelude::entity::{LoanStatus, User};
use kernel::KernelError;

use crate::controller::{Intake, TryIntake};
use crate::route::page::PageRequest;

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    #[serde(default)]
    summary: String,
    isbn: String,
    author_id: Uuid,
    language_id: Option<Uuid>,
    #[serde(default)]
    genre_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBookInstanceRequest {
    imprint: String,
    status: Option<LoanStatus>,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: Uuid,
}

impl GetBookRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct Transformer;

impl TryIntake<PageRequest> for Transformer {
    type To = GetAllBookDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: PageRequest) -> Result<Self::To, Self::Error> {
        Ok(GetAllBookDto {
            page: input.number()?,
        })
    }
}

impl Intake<GetBookRequest> for Transformer {
    type To = GetBookDto;
    fn emit(&self, GetBookRequest { id }: GetBookRequest) -> Self::To {
        GetBookDto { id }
    }
}

impl Intake<(User, CreateBookRequest)> for Transformer {
    type To = CreateBookDto;
    fn emit(&self, (actor, input): (User, CreateBookRequest)) -> Self::To {
        CreateBookDto {
            actor,
            title: input.title,
            summary: input.summary,
            isbn: input.isbn,
            author_id: input.author_id,
            language_id: input.language_id,
            genre_ids: input.genre_ids,
        }
    }
}

impl Intake<(User, Uuid, CreateBookInstanceRequest)> for Transformer {
    type To = CreateBookInstanceDto;
    fn emit(
        &self,
        (actor, book_id, input): (User, Uuid, CreateBookInstanceRequest),
    ) -> Self::To {
        CreateBookInstanceDto {
            actor,
            book_id,
            imprint: input.imprint,
            status: input.status,
        }
    }
}
