use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use application::transfer::{GenreDto, LanguageDto};

use crate::controller::Exhaust;
use crate::route::model::{GenreResponse, LanguageResponse};

impl IntoResponse for GenreResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

impl IntoResponse for LanguageResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<Vec<GenreDto>> for Presenter {
    type To = Json<Vec<GenreResponse>>;
    fn emit(&self, input: Vec<GenreDto>) -> Self::To {
        Json(input.into_iter().map(GenreResponse::from).collect())
    }
}

impl Exhaust<GenreDto> for Presenter {
    type To = GenreResponse;
    fn emit(&self, input: GenreDto) -> Self::To {
        input.into()
    }
}

impl Exhaust<Vec<LanguageDto>> for Presenter {
    type To = Json<Vec<LanguageResponse>>;
    fn emit(&self, input: Vec<LanguageDto>) -> Self::To {
        Json(input.into_iter().map(LanguageResponse::from).collect())
    }
}

impl Exhaust<LanguageDto> for Presenter {
    type To = LanguageResponse;
    fn emit(&self, input: LanguageDto) -> Self::To {
        input.into()
    }
}
