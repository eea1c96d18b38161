mod request;
mod response;

use application::service::{
    CreateBookInstanceService, CreateBookService, GetAllBookService, GetBookService,
};
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::Actor;
use crate::handler::AppModule;
use crate::route::book::request::{
    CreateBookInstanceRequest, CreateBookRequest, GetBookRequest, Transformer,
};
use crate::route::book::response::Presenter;
use crate::route::page::PageRequest;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/catalog/books",
            get(
                |State(module): State<AppModule>, Query(req): Query<PageRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.get_all_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Actor(actor): Actor,
                 Json(req): Json<CreateBookRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((actor, req))
                        .handle(|dto| async move { module.create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/catalog/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| async move { module.get_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/catalog/books/:id/instances",
            post(
                |State(module): State<AppModule>,
                 Actor(actor): Actor,
                 Path(id): Path<Uuid>,
                 Json(req): Json<CreateBookInstanceRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((actor, id, req))
                        .handle(|dto| async move { module.create_book_instance(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
