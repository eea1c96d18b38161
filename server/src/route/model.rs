use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::Date;
use uuid::Uuid;

use application::transfer::{AuthorDto, BookDto, BookInstanceDto, GenreDto, LanguageDto};
use kernel::prelude::entity::LoanStatus;

#[derive(Debug, Serialize)]
pub struct GenreResponse {
    id: Uuid,
    name: String,
}

impl From<GenreDto> for GenreResponse {
    fn from(GenreDto { id, name }: GenreDto) -> Self {
        Self { id, name }
    }
}

#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    id: Uuid,
    name: String,
}

impl From<LanguageDto> for LanguageResponse {
    fn from(LanguageDto { id, name }: LanguageDto) -> Self {
        Self { id, name }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    id: Uuid,
    first_name: String,
    last_name: String,
    display_name: String,
    date_of_birth: Option<Date>,
    date_of_death: Option<Date>,
}

impl From<AuthorDto> for AuthorResponse {
    fn from(value: AuthorDto) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            display_name: value.display_name,
            date_of_birth: value.date_of_birth,
            date_of_death: value.date_of_death,
        }
    }
}

impl IntoResponse for AuthorResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: Uuid,
    title: String,
    summary: String,
    isbn: String,
    author_id: Uuid,
    language_id: Option<Uuid>,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            summary: value.summary,
            isbn: value.isbn,
            author_id: value.author_id,
            language_id: value.language_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookInstanceResponse {
    id: Uuid,
    book_id: Uuid,
    imprint: String,
    due_back: Option<Date>,
    borrower: Option<Uuid>,
    status: LoanStatus,
    status_display: String,
    is_overdue: bool,
}

impl From<BookInstanceDto> for BookInstanceResponse {
    fn from(value: BookInstanceDto) -> Self {
        Self {
            id: value.id,
            book_id: value.book_id,
            imprint: value.imprint,
            due_back: value.due_back,
            borrower: value.borrower,
            status: value.status,
            status_display: value.status.to_string(),
            is_overdue: value.is_overdue,
        }
    }
}

impl IntoResponse for BookInstanceResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use application::transfer::BookInstanceDto;
    use kernel::prelude::entity::LoanStatus;

    use crate::route::model::BookInstanceResponse;

    #[test]
    fn instance_serializes_dates_and_status_readably() {
        let id = Uuid::new_v4();
        let book_id = Uuid::new_v4();
        let response = BookInstanceResponse::from(BookInstanceDto {
            id,
            book_id,
            imprint: "Penguin".to_string(),
            due_back: Some(date!(2024 - 01 - 29)),
            borrower: None,
            status: LoanStatus::OnLoan,
            is_overdue: false,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["due_back"], "2024-01-29");
        assert_eq!(json["status"], "on_loan");
        assert_eq!(json["status_display"], "On loan");
        assert_eq!(json["id"], id.to_string());
    }
}
