use serde::Deserialize;

use application::transfer::{CreateGenreDto, CreateLanguageDto};
use kernel::prelude::entity::User;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateGenreRequest {
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateLanguageRequest {
    name: String,
}

pub struct Transformer;

impl Intake<(User, CreateGenreRequest)> for Transformer {
    type To = CreateGenreDto;
    fn emit(&self, (actor, CreateGenreRequest { name }): (User, CreateGenreRequest)) -> Self::To {
        CreateGenreDto { actor, name }
    }
}

impl Intake<(User, CreateLanguageRequest)> for Transformer {
    type To = CreateLanguageDto;
    fn emit(
        &self,
        (actor, CreateLanguageRequest { name }): (User, CreateLanguageRequest),
    ) -> Self::To {
        CreateLanguageDto { actor, name }
    }
}
