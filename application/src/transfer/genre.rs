use uuid::Uuid;

use kernel::prelude::entity::{DestructGenre, Genre, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Genre> for GenreDto {
    fn from(value: Genre) -> Self {
        let DestructGenre { id, name } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug)]
pub struct CreateGenreDto {
    pub actor: User,
    pub name: String,
}
