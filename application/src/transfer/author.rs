use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{Author, DestructAuthor, PageNumber, User};

use crate::transfer::BookDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub date_of_birth: Option<Date>,
    pub date_of_death: Option<Date>,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        let display_name = value.display_name();
        let DestructAuthor {
            id,
            first_name,
            last_name,
            lifespan,
        } = value.into_destruct();
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            display_name,
            date_of_birth: lifespan.date_of_birth(),
            date_of_death: lifespan.date_of_death(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDetailDto {
    pub author: AuthorDto,
    pub books: Vec<BookDto>,
}

#[derive(Debug)]
pub struct GetAuthorDto {
    pub id: Uuid,
}

#[derive(Debug, Default)]
pub struct GetAllAuthorDto {
    pub page: PageNumber,
}

#[derive(Debug)]
pub struct CreateAuthorDto {
    pub actor: User,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    pub date_of_death: Option<Date>,
}

/// Absent fields keep their stored value. `Some(None)` clears a date.
#[derive(Debug)]
pub struct UpdateAuthorDto {
    pub actor: User,
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<Option<Date>>,
    pub date_of_death: Option<Option<Date>>,
}

#[derive(Debug)]
pub struct DeleteAuthorDto {
    pub actor: User,
    pub id: Uuid,
}
