use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnLanguageQuery, LanguageQuery};
use kernel::interface::update::{DependOnLanguageModifier, LanguageModifier};
use kernel::prelude::entity::{Capability, Language, LanguageId, LanguageName};
use kernel::KernelError;

use crate::transfer::{CreateLanguageDto, LanguageDto};

#[async_trait::async_trait]
pub trait GetAllLanguageService: 'static + Sync + Send + DependOnLanguageQuery {
    async fn get_all_languages(&self) -> error_stack::Result<Vec<LanguageDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let languages = self.language_query().find_all(&mut connection).await?;
        Ok(languages.into_iter().map(LanguageDto::from).collect())
    }
}

impl<T> GetAllLanguageService for T where T: DependOnLanguageQuery {}

#[async_trait::async_trait]
pub trait CreateLanguageService: 'static + Sync + Send + DependOnLanguageModifier {
    async fn create_language(
        &self,
        dto: CreateLanguageDto,
    ) -> error_stack::Result<LanguageDto, KernelError> {
        dto.actor.require(Capability::AddLanguage)?;
        let language = Language::new(
            LanguageId::new(Uuid::new_v4()),
            LanguageName::parse(dto.name)?,
        );

        let mut connection = self.database_connection().transact().await?;
        self.language_modifier()
            .create(&mut connection, &language)
            .await?;
        connection.commit().await?;

        Ok(LanguageDto::from(language))
    }
}

impl<T> CreateLanguageService for T where T: DependOnLanguageModifier {}
