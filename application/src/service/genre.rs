use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnGenreQuery, GenreQuery};
use kernel::interface::update::{DependOnGenreModifier, GenreModifier};
use kernel::prelude::entity::{Capability, Genre, GenreId, GenreName};
use kernel::KernelError;

use crate::transfer::{CreateGenreDto, GenreDto};

#[async_trait::async_trait]
pub trait GetAllGenreService: 'static + Sync + Send + DependOnGenreQuery {
    async fn get_all_genres(&self) -> error_stack::Result<Vec<GenreDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let genres = self.genre_query().find_all(&mut connection).await?;
        Ok(genres.into_iter().map(GenreDto::from).collect())
    }
}

impl<T> GetAllGenreService for T where T: DependOnGenreQuery {}

#[async_trait::async_trait]
pub trait CreateGenreService: 'static + Sync + Send + DependOnGenreModifier {
    async fn create_genre(&self, dto: CreateGenreDto) -> error_stack::Result<GenreDto, KernelError> {
        dto.actor.require(Capability::AddGenre)?;
        let genre = Genre::new(GenreId::new(Uuid::new_v4()), GenreName::parse(dto.name)?);

        let mut connection = self.database_connection().transact().await?;
        self.genre_modifier().create(&mut connection, &genre).await?;
        connection.commit().await?;

        Ok(GenreDto::from(genre))
    }
}

impl<T> CreateGenreService for T where T: DependOnGenreModifier {}
