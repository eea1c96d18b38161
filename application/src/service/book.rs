use uuid::Uuid;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    AuthorQuery, BookInstanceQuery, BookQuery, DependOnAuthorQuery, DependOnBookInstanceQuery,
    DependOnBookQuery, DependOnGenreQuery, DependOnLanguageQuery, GenreQuery, LanguageQuery,
};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    display_genre, AuthorId, Book, BookId, BookSummary, BookTitle, Capability, GenreId, Isbn,
    LanguageId,
};
use kernel::KernelError;

use crate::service::{not_found, BOOK_PAGE_SIZE};
use crate::transfer::{
    AuthorDto, BookDetailDto, BookDto, BookInstanceDto, CreateBookDto, GenreDto, GetAllBookDto,
    GetBookDto, LanguageDto, PageDto,
};

#[async_trait::async_trait]
pub trait GetBookService:
    'static
    + Sync
    + Send
    + DependOnBookQuery
    + DependOnAuthorQuery
    + DependOnLanguageQuery
    + DependOnGenreQuery
    + DependOnBookInstanceQuery
    + DependOnClock
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDetailDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let id = BookId::new(dto.id);
        let book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| not_found("book", dto.id))?;
        let author = self
            .author_query()
            .find_by_id(&mut connection, book.author_id())
            .await?
            .ok_or_else(|| not_found("author", book.author_id().as_ref()))?;
        let language = match book.language_id() {
            Some(language_id) => {
                self.language_query()
                    .find_by_id(&mut connection, language_id)
                    .await?
            }
            None => None,
        };
        let genres = self.genre_query().find_by_book(&mut connection, &id).await?;
        let instances = self
            .book_instance_query()
            .find_by_book(&mut connection, &id)
            .await?;

        let today = self.clock().today();
        Ok(BookDetailDto {
            display_genre: display_genre(&genres),
            book: BookDto::from(book),
            author: AuthorDto::from(author),
            language: language.map(LanguageDto::from),
            genres: genres.into_iter().map(GenreDto::from).collect(),
            instances: instances
                .into_iter()
                .map(|instance| BookInstanceDto::new(instance, today))
                .collect(),
        })
    }
}

impl<T> GetBookService for T where
    T: DependOnBookQuery
        + DependOnAuthorQuery
        + DependOnLanguageQuery
        + DependOnGenreQuery
        + DependOnBookInstanceQuery
        + DependOnClock
{
}

#[async_trait::async_trait]
pub trait GetAllBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<PageDto<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let count = self.book_query().count(&mut connection).await?;
        let window = dto.page.resolve(count, BOOK_PAGE_SIZE)?;
        let books = self
            .book_query()
            .find_all(&mut connection, &window.limit(), &window.offset())
            .await?;
        Ok(PageDto::from(window.fill(books).map(BookDto::from)))
    }
}

impl<T> GetAllBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static
    + Sync
    + Send
    + DependOnAuthorQuery
    + DependOnLanguageQuery
    + DependOnGenreQuery
    + DependOnBookModifier
{
    /// Adds the book and its genre links in one transaction.
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        dto.actor.require(Capability::AddBook)?;
        let book = Book::new(
            BookId::new(Uuid::new_v4()),
            BookTitle::parse(dto.title)?,
            BookSummary::new(dto.summary),
            Isbn::parse(dto.isbn)?,
            AuthorId::new(dto.author_id),
            dto.language_id.map(LanguageId::new),
        );

        let mut connection = self.database_connection().transact().await?;
        if self
            .author_query()
            .find_by_id(&mut connection, book.author_id())
            .await?
            .is_none()
        {
            return Err(not_found("author", dto.author_id));
        }
        if let Some(language_id) = book.language_id() {
            if self
                .language_query()
                .find_by_id(&mut connection, language_id)
                .await?
                .is_none()
            {
                return Err(not_found("language", language_id.as_ref()));
            }
        }
        let mut genre_ids = Vec::with_capacity(dto.genre_ids.len());
        for genre_id in dto.genre_ids {
            let genre_id = GenreId::new(genre_id);
            if self
                .genre_query()
                .find_by_id(&mut connection, &genre_id)
                .await?
                .is_none()
            {
                return Err(not_found("genre", genre_id.as_ref()));
            }
            genre_ids.push(genre_id);
        }

        self.book_modifier().create(&mut connection, &book).await?;
        for genre_id in &genre_ids {
            self.book_modifier()
                .add_genre(&mut connection, book.id(), genre_id)
                .await?;
        }
        connection.commit().await?;

        tracing::debug!("Catalogued book {}", book.id().as_ref());
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where
    T: DependOnAuthorQuery + DependOnLanguageQuery + DependOnGenreQuery + DependOnBookModifier
{
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use kernel::prelude::entity::{BookId, Capability, LoanStatus, PageNumber};
    use kernel::KernelError;

    use crate::service::{
        CreateBookService, CreateGenreService, CreateLanguageService, GetAllBookService,
        GetBookService,
    };
    use crate::test::TestModule;
    use crate::transfer::{
        CreateBookDto, CreateGenreDto, CreateLanguageDto, GetAllBookDto, GetBookDto,
    };

    #[tokio::test]
    async fn create_book_links_genres() -> error_stack::Result<(), KernelError> {
        let today = date!(2024 - 01 - 10);
        let module = TestModule::new(today);
        let librarian = module.librarian().await?;
        let author = module.author("Le Guin").await?;
        let mut genre_ids = Vec::new();
        for name in ["Fantasy", "Young Adult", "Drama", "Science Fiction"] {
            let genre = module
                .create_genre(CreateGenreDto {
                    actor: librarian.clone(),
                    name: name.into(),
                })
                .await?;
            genre_ids.push(genre.id);
        }
        let english = module
            .create_language(CreateLanguageDto {
                actor: librarian.clone(),
                name: "English".into(),
            })
            .await?;

        let book = module
            .create_book(CreateBookDto {
                actor: librarian.clone(),
                title: "A Wizard of Earthsea".into(),
                summary: "Ged".into(),
                isbn: "9780547773742".into(),
                author_id: *author.id().as_ref(),
                language_id: Some(english.id),
                genre_ids,
            })
            .await?;
        let borrower = module.user("reader", []).await?;
        let stored = module
            .get_all_books(GetAllBookDto::default())
            .await?
            .items
            .into_iter()
            .next()
            .unwrap();
        assert_eq!(stored, book);

        module
            .instance_of(
                &BookId::new(book.id),
                LoanStatus::OnLoan,
                Some(date!(2024 - 01 - 01)),
                Some(&borrower),
            )
            .await?;

        let detail = module.get_book(GetBookDto { id: book.id }).await?;
        assert_eq!(detail.genres.len(), 4);
        assert_eq!(detail.display_genre.split(", ").count(), 3);
        assert_eq!(detail.language.map(|l| l.name), Some("English".to_string()));
        assert_eq!(detail.author.display_name, "Le Guin, Test");
        assert_eq!(detail.instances.len(), 1);
        assert!(detail.instances[0].is_overdue);
        Ok(())
    }

    #[tokio::test]
    async fn create_book_rejects_unknown_references() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(date!(2024 - 01 - 10));
        let librarian = module.librarian().await?;
        let author = module.author("Le Guin").await?;
        let error = module
            .create_book(CreateBookDto {
                actor: librarian.clone(),
                title: "The Dispossessed".into(),
                summary: String::new(),
                isbn: "9780061054884".into(),
                author_id: *author.id().as_ref(),
                language_id: None,
                genre_ids: vec![Uuid::new_v4()],
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::NotFound);

        let reader = module.user("reader", [Capability::AddGenre]).await?;
        let error = module
            .create_book(CreateBookDto {
                actor: reader,
                title: "The Dispossessed".into(),
                summary: String::new(),
                isbn: "9780061054884".into(),
                author_id: *author.id().as_ref(),
                language_id: None,
                genre_ids: vec![],
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::PermissionDenied);

        let books = module
            .get_all_books(GetAllBookDto {
                page: PageNumber::Exact(1),
            })
            .await?;
        assert!(books.items.is_empty());
        assert_eq!(books.num_pages, 1);
        Ok(())
    }

    #[tokio::test]
    async fn books_page_by_two() -> error_stack::Result<(), KernelError> {
        let module = TestModule::new(date!(2024 - 01 - 10));
        let author = module.author("Christie").await?;
        for isbn in ["0000000001", "0000000002", "0000000003"] {
            module.book(&author, isbn).await?;
        }
        let last = module
            .get_all_books(GetAllBookDto {
                page: PageNumber::Last,
            })
            .await?;
        assert_eq!(last.number, 2);
        assert_eq!(last.items.len(), 1);

        let error = module
            .get_all_books(GetAllBookDto {
                page: PageNumber::Exact(3),
            })
            .await
            .unwrap_err();
        assert_eq!(*error.current_context(), KernelError::NotFound);
        Ok(())
    }
}
