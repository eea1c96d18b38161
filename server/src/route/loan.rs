mod request;
mod response;

use application::service::GetLoansService;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::Actor;
use crate::handler::AppModule;
use crate::route::loan::request::{BorrowedRequest, OwnLoansRequest, Transformer};
use crate::route::loan::response::Presenter;

pub trait LoanRouter {
    fn route_loan(self) -> Self;
}

impl LoanRouter for Router<AppModule> {
    fn route_loan(self) -> Self {
        self.route(
            "/catalog/mybooks",
            get(
                |State(module): State<AppModule>,
                 Actor(actor): Actor,
                 Query(req): Query<OwnLoansRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake((actor, req))?
                        .handle(|dto| async move { module.list_loans_for_user(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/catalog/borrowed",
            get(
                |State(module): State<AppModule>,
                 Actor(actor): Actor,
                 Query(req): Query<BorrowedRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake((actor, req))?
                        .handle(|dto| async move { module.list_outstanding_loans(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
