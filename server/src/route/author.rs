mod request;
mod response;

use application::service::{
    CreateAuthorService, DeleteAuthorService, GetAllAuthorService, GetAuthorService,
    UpdateAuthorService,
};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::Actor;
use crate::handler::AppModule;
use crate::route::author::request::{
    CreateAuthorRequest, DeleteAuthorRequest, GetAuthorRequest, Transformer, UpdateAuthorRequest,
};
use crate::route::author::response::{CreatedPresenter, Presenter};
use crate::route::page::PageRequest;

pub trait AuthorRouter {
    fn route_author(self) -> Self;
}

impl AuthorRouter for Router<AppModule> {
    fn route_author(self) -> Self {
        self.route(
            "/catalog/authors",
            get(
                |State(module): State<AppModule>, Query(req): Query<PageRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.get_all_authors(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Actor(actor): Actor,
                 Json(req): Json<CreateAuthorRequest>| async move {
                    Controller::new(Transformer, CreatedPresenter)
                        .intake((actor, req))
                        .handle(|dto| async move { module.create_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/catalog/authors/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetAuthorRequest::new(id))
                        .handle(|dto| async move { module.get_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Actor(actor): Actor,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateAuthorRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((actor, id, req))
                        .handle(|dto| async move { module.update_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Actor(actor): Actor, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(DeleteAuthorRequest::new(actor, id))
                        .handle(|dto| async move { module.delete_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
