use serde::{Deserialize, Deserializer};
use time::Date;
use uuid::Uuid;

use application::transfer::{
    CreateAuthorDto, DeleteAuthorDto, GetAllAuthorDto, GetAuthorDto, UpdateAuthorDto,
};
use kernel::prelude::entity::User;
use kernel::KernelError;

use crate::controller::{Intake, TryIntake};
use crate::route::page::PageRequest;

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    first_name: String,
    last_name: String,
    date_of_birth: Option<Date>,
    date_of_death: Option<Date>,
}

/// A missing key keeps the stored value; an explicit `null` clears a date.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAuthorRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    date_of_birth: Option<Option<Date>>,
    #[serde(default, deserialize_with = "double_option")]
    date_of_death: Option<Option<Date>>,
}

fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug)]
pub struct GetAuthorRequest {
    id: Uuid,
}

impl GetAuthorRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteAuthorRequest {
    actor: User,
    id: Uuid,
}

impl DeleteAuthorRequest {
    pub fn new(actor: User, id: Uuid) -> Self {
        Self { actor, id }
    }
}

pub struct Transformer;

impl TryIntake<PageRequest> for Transformer {
    type To = GetAllAuthorDto;
    type Error = error_stack::Report<KernelError>;
    fn emit(&self, input: PageRequest) -> Result<Self::To, Self::Error> {
        Ok(GetAllAuthorDto {
            page: input.number()?,
        })
    }
}

impl Intake<GetAuthorRequest> for Transformer {
    type To = GetAuthorDto;
    fn emit(&self, GetAuthorRequest { id }: GetAuthorRequest) -> Self::To {
        GetAuthorDto { id }
    }
}

impl Intake<(User, CreateAuthorRequest)> for Transformer {
    type To = CreateAuthorDto;
    fn emit(&self, (actor, input): (User, CreateAuthorRequest)) -> Self::To {
        CreateAuthorDto {
            actor,
            first_name: input.first_name,
            last_name: input.last_name,
            date_of_birth: input.date_of_birth,
            date_of_death: input.date_of_death,
        }
    }
}

impl Intake<(User, Uuid, UpdateAuthorRequest)> for Transformer {
    type To = UpdateAuthorDto;
    fn emit(&self, (actor, id, input): (User, Uuid, UpdateAuthorRequest)) -> Self::To {
        UpdateAuthorDto {
            actor,
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            date_of_birth: input.date_of_birth,
            date_of_death: input.date_of_death,
        }
    }
}

impl Intake<DeleteAuthorRequest> for Transformer {
    type To = DeleteAuthorDto;
    fn emit(&self, DeleteAuthorRequest { actor, id }: DeleteAuthorRequest) -> Self::To {
        DeleteAuthorDto { actor, id }
    }
}
