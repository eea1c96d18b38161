use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, BookQuery, DependOnAuthorQuery, DependOnBookQuery};
use kernel::interface::update::{AuthorModifier, DependOnAuthorModifier};
use kernel::prelude::entity::{
    Author, AuthorId, Capability, FirstName, LastName, Lifespan,
};
use kernel::KernelError;

use crate::service::{not_found, AUTHOR_PAGE_SIZE};
use crate::transfer::{
    AuthorDetailDto, AuthorDto, BookDto, CreateAuthorDto, DeleteAuthorDto, GetAllAuthorDto,
    GetAuthorDto, PageDto, UpdateAuthorDto,
};

#[async_trait::async_trait]
pub trait GetAuthorService: 'static + Sync + Send + DependOnAuthorQuery + DependOnBookQuery {
    async fn get_author(&self, dto: GetAuthorDto) -> error_stack::Result<AuthorDetailDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let id = AuthorId::new(dto.id);
        let author = self
            .author_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| not_found("author", dto.id))?;
        let books = self.book_query().find_by_author(&mut connection, &id).await?;
        Ok(AuthorDetailDto {
            author: AuthorDto::from(author),
            books: books.into_iter().map(BookDto::from).collect(),
        })
    }
}

impl<T> GetAuthorService for T where T: DependOnAuthorQuery + DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetAllAuthorService: 'static + Sync + Send + DependOnAuthorQuery {
    async fn get_all_authors(
        &self,
        dto: GetAllAuthorDto,
    ) -> error_stack::Result<PageDto<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let count = self.author_query().count(&mut connection).await?;
        let window = dto.page.resolve(count, AUTHOR_PAGE_SIZE)?;
        let authors = self
            .author_query()
            .find_all(&mut connection, &window.limit(), &window.offset())
            .await?;
        Ok(PageDto::from(window.fill(authors).map(AuthorDto::from)))
    }
}

impl<T> GetAllAuthorService for T where T: DependOnAuthorQuery {}

#[async_trait::async_trait]
pub trait CreateAuthorService: 'static + Sync + Send + DependOnAuthorModifier {
    async fn create_author(&self, dto: CreateAuthorDto) -> error_stack::Result<AuthorDto, KernelError> {
        dto.actor.require(Capability::AddAuthor)?;
        let author = Author::new(
            AuthorId::new(Uuid::new_v4()),
            FirstName::parse(dto.first_name)?,
            LastName::parse(dto.last_name)?,
            Lifespan::new(dto.date_of_birth, dto.date_of_death)?,
        );

        let mut connection = self.database_connection().transact().await?;
        self.author_modifier().create(&mut connection, &author).await?;
        connection.commit().await?;

        Ok(AuthorDto::from(author))
    }
}

impl<T> CreateAuthorService for T where T: DependOnAuthorModifier {}

#[async_trait::async_trait]
pub trait UpdateAuthorService:
    'static + Sync + Send + DependOnAuthorQuery + DependOnAuthorModifier
{
    async fn update_author(&self, dto: UpdateAuthorDto) -> error_stack::Result<AuthorDto, KernelError> {
        dto.actor.require(Capability::ChangeAuthor)?;
        let mut connection = self.database_connection().transact().await?;
        let id = AuthorId::new(dto.id);
        let author = self
            .author_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| not_found("author", dto.id))?;

        let lifespan = Lifespan::new(
            dto.date_of_birth
                .unwrap_or_else(|| author.lifespan().date_of_birth()),
            dto.date_of_death
                .unwrap_or_else(|| author.lifespan().date_of_death()),
        )?;
        let first_name = dto.first_name.map(FirstName::parse).transpose()?;
        let last_name = dto.last_name.map(LastName::parse).transpose()?;
        let author = author.reconstruct(|a| {
            if let Some(first_name) = first_name {
                a.first_name = first_name;
            }
            if let Some(last_name) = last_name {
                a.last_name = last_name;
            }
            a.lifespan = lifespan;
        });

        self.author_modifier().update(&mut connection, &author).await?;
        connection.commit().await?;

        Ok(AuthorDto::from(author))
    }
}

impl<T> UpdateAuthorService for T where T: DependOnAuthorQuery + DependOnAuthorModifier {}

#[async_trait::async_trait]
pub trait DeleteAuthorService: 'static + Sync + Send + DependOnAuthorModifier {
    /// Refuses with `ConstraintViolation` while any book still names the author.
    #[tracing::instrument(skip_all, fields(author = %dto.id))]
    async fn delete_author(&self, dto: DeleteAuthorDto) -> error_stack::Result<(), KernelError> {
        dto.actor.require(Capability::DeleteAuthor)?;
        let mut connection = self.database_connection().transact().await?;
        let id = AuthorId::new(dto.id);
        if let Err(report) = self.author_modifier().delete(&mut connection, &id).await {
            if *report.current_context() == KernelError::ConstraintViolation {
                tracing::warn!("Author {} is still referenced and was not deleted", dto.id);
            }
            connection.roll_back().await?;
            return Err(report);
        }
        connection.commit().await?;
        Ok(())
    }
}

impl<T> DeleteAuthorService for T where T: DependOnAuthorModifier {}

#[cfg(test)]
mod test {
    use time::macros::date;

    use kernel::prelude::entity::{Capability, PageNumber};
    use kernel::{KernelError, KernelReportExt};

    use crate::service::{
        CreateAuthorService, DeleteAuthorService, GetAllAuthorService, GetAuthorService,
        UpdateAuthorService,
    };
    use crate::test::TestModule;
    use crate::transfer::{
        CreateAuthorDto, DeleteAuthorDto, GetAllAuthorDto, GetAuthorDto, UpdateAuthorDto,
    };

    #[tokio::test]
    async fn referenced_author_is_not_deleted() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(date!(2024 - 01 - 01));
        let librarian = module.librarian().await?;
        let author = module.author("Tolkien").await?;
        module.book(&author, "0261103571").await?;

        let error = module
            .delete_author(DeleteAuthorDto {
                actor: librarian,
                id: *author.id().as_ref(),
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::ConstraintViolation);

        let detail = module
            .get_author(GetAuthorDto {
                id: *author.id().as_ref(),
            })
            .await?;
        assert_eq!(detail.books.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn unreferenced_author_is_deleted() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(date!(2024 - 01 - 01));
        let librarian = module.librarian().await?;
        let reader = module.user("reader", []).await?;
        let author = module.author("Tolkien").await?;
        let id = *author.id().as_ref();

        let error = module
            .delete_author(DeleteAuthorDto { actor: reader, id })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::PermissionDenied);

        module
            .delete_author(DeleteAuthorDto {
                actor: librarian.clone(),
                id,
            })
            .await?;
        let error = module.get_author(GetAuthorDto { id }).await.unwrap_err();
        assert_eq!(*error.current_context(), KernelError::NotFound);

        let error = module
            .delete_author(DeleteAuthorDto {
                actor: librarian,
                id,
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn create_and_partially_update() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(date!(2024 - 01 - 01));
        let editor = module
            .user("editor", [Capability::AddAuthor, Capability::ChangeAuthor])
            .await?;
        let created = module
            .create_author(CreateAuthorDto {
                actor: editor.clone(),
                first_name: "J.R.R.".into(),
                last_name: "Tolkien".into(),
                date_of_birth: Some(date!(1892 - 01 - 03)),
                date_of_death: None,
            })
            .await?;
        assert_eq!(created.display_name, "Tolkien, J.R.R.");

        let updated = module
            .update_author(UpdateAuthorDto {
                actor: editor.clone(),
                id: created.id,
                first_name: None,
                last_name: None,
                date_of_birth: None,
                date_of_death: Some(Some(date!(1973 - 09 - 02))),
            })
            .await?;
        assert_eq!(updated.first_name, "J.R.R.");
        assert_eq!(updated.date_of_birth, Some(date!(1892 - 01 - 03)));
        assert_eq!(updated.date_of_death, Some(date!(1973 - 09 - 02)));

        let error = module
            .update_author(UpdateAuthorDto {
                actor: editor,
                id: created.id,
                first_name: None,
                last_name: None,
                date_of_birth: Some(Some(date!(1990 - 01 - 01))),
                date_of_death: None,
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::Validation);
        assert_eq!(error.field_errors()[0].field(), "date_of_death");
        Ok(())
    }

    #[tokio::test]
    async fn authors_page_by_three() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(date!(2024 - 01 - 01));
        for name in ["A", "B", "C", "D"] {
            module.author(name).await?;
        }
        let first = module.get_all_authors(GetAllAuthorDto::default()).await?;
        assert_eq!(first.items.len(), 3);
        assert_eq!(first.num_pages, 2);
        assert!(first.has_next);

        let second = module
            .get_all_authors(GetAllAuthorDto {
                page: PageNumber::Exact(2),
            })
            .await?;
        assert_eq!(second.items.len(), 1);
        Ok(())
    }
}
