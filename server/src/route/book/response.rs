use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use application::transfer::{BookDetailDto, BookDto, BookInstanceDto, PageDto};

use crate::controller::Exhaust;
use crate::route::model::{
    AuthorResponse, BookInstanceResponse, BookResponse, GenreResponse, LanguageResponse,
};
use crate::route::page::PageResponse;

#[derive(Debug, Serialize)]
pub struct CreatedBookResponse(BookResponse);

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedBookInstanceResponse(BookInstanceResponse);

impl IntoResponse for CreatedBookInstanceResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookDetailResponse {
    #[serde(flatten)]
    book: BookResponse,
    author: AuthorResponse,
    language: Option<LanguageResponse>,
    genres: Vec<GenreResponse>,
    display_genre: String,
    instances: Vec<BookInstanceResponse>,
}

impl IntoResponse for BookDetailResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<PageDto<BookDto>> for Presenter {
    type To = PageResponse<BookResponse>;
    fn emit(&self, input: PageDto<BookDto>) -> Self::To {
        PageResponse::new(input, BookResponse::from)
    }
}

impl Exhaust<BookDto> for Presenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        CreatedBookResponse(input.into())
    }
}

impl Exhaust<BookDetailDto> for Presenter {
    type To = BookDetailResponse;
    fn emit(&self, input: BookDetailDto) -> Self::To {
        BookDetailResponse {
            book: input.book.into(),
            author: input.author.into(),
            language: input.language.map(Into::into),
            genres: input.genres.into_iter().map(Into::into).collect(),
            display_genre: input.display_genre,
            instances: input.instances.into_iter().map(Into::into).collect(),
        }
    }
}

impl Exhaust<BookInstanceDto> for Presenter {
    type To = CreatedBookInstanceResponse;
    fn emit(&self, input: BookInstanceDto) -> Self::To {
        CreatedBookInstanceResponse(input.into())
    }
}
