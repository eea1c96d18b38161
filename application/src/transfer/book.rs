use uuid::Uuid;

use kernel::prelude::entity::{Book, DestructBook, PageNumber, User};

use crate::transfer::{AuthorDto, BookInstanceDto, GenreDto, LanguageDto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author_id: Uuid,
    pub language_id: Option<Uuid>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            summary,
            isbn,
            author_id,
            language_id,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
            isbn: isbn.into(),
            author_id: author_id.into(),
            language_id: language_id.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetailDto {
    pub book: BookDto,
    pub author: AuthorDto,
    pub language: Option<LanguageDto>,
    pub genres: Vec<GenreDto>,
    pub display_genre: String,
    pub instances: Vec<BookInstanceDto>,
}

#[derive(Debug)]
pub struct GetBookDto {
    pub id: Uuid,
}

#[derive(Debug, Default)]
pub struct GetAllBookDto {
    pub page: PageNumber,
}

#[derive(Debug)]
pub struct CreateBookDto {
    pub actor: User,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author_id: Uuid,
    pub language_id: Option<Uuid>,
    pub genre_ids: Vec<Uuid>,
}
