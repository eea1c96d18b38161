use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;
use time::Date;

use application::transfer::{BookInstanceDto, RenewalProposalDto};

use crate::controller::Exhaust;
use crate::route::model::BookInstanceResponse;

const RENEWED_REDIRECT: &str = "/catalog/borrowed";

#[derive(Debug, Serialize)]
pub struct RenewalProposalResponse {
    instance: BookInstanceResponse,
    proposed_due_back: Date,
}

impl IntoResponse for RenewalProposalResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<BookInstanceDto> for Presenter {
    type To = BookInstanceResponse;
    fn emit(&self, input: BookInstanceDto) -> Self::To {
        input.into()
    }
}

impl Exhaust<RenewalProposalDto> for Presenter {
    type To = RenewalProposalResponse;
    fn emit(&self, input: RenewalProposalDto) -> Self::To {
        RenewalProposalResponse {
            instance: input.instance.into(),
            proposed_due_back: input.proposed_due_back,
        }
    }
}

/// A successful renewal sends the librarian back to the outstanding loans.
pub struct RenewedPresenter;

impl Exhaust<BookInstanceDto> for RenewedPresenter {
    type To = Redirect;
    fn emit(&self, _: BookInstanceDto) -> Self::To {
        Redirect::to(RENEWED_REDIRECT)
    }
}
