use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use application::transfer::{AuthorDetailDto, AuthorDto, PageDto};

use crate::controller::Exhaust;
use crate::route::model::{AuthorResponse, BookResponse};
use crate::route::page::PageResponse;

#[derive(Debug, Serialize)]
pub struct CreatedAuthorResponse(AuthorResponse);

impl IntoResponse for CreatedAuthorResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct AuthorDetailResponse {
    #[serde(flatten)]
    author: AuthorResponse,
    books: Vec<BookResponse>,
}

impl IntoResponse for AuthorDetailResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<PageDto<AuthorDto>> for Presenter {
    type To = PageResponse<AuthorResponse>;
    fn emit(&self, input: PageDto<AuthorDto>) -> Self::To {
        PageResponse::new(input, AuthorResponse::from)
    }
}

impl Exhaust<AuthorDetailDto> for Presenter {
    type To = AuthorDetailResponse;
    fn emit(&self, input: AuthorDetailDto) -> Self::To {
        AuthorDetailResponse {
            author: input.author.into(),
            books: input.books.into_iter().map(Into::into).collect(),
        }
    }
}

impl Exhaust<AuthorDto> for Presenter {
    type To = AuthorResponse;
    fn emit(&self, input: AuthorDto) -> Self::To {
        input.into()
    }
}

impl Exhaust<()> for Presenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

pub struct CreatedPresenter;

impl Exhaust<AuthorDto> for CreatedPresenter {
    type To = CreatedAuthorResponse;
    fn emit(&self, input: AuthorDto) -> Self::To {
        CreatedAuthorResponse(input.into())
    }
}
