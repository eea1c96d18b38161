mod request;
mod response;

use application::service::{
    CreateGenreService, CreateLanguageService, GetAllGenreService, GetAllLanguageService,
};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::Actor;
use crate::handler::AppModule;
use crate::route::reference::request::{CreateGenreRequest, CreateLanguageRequest, Transformer};
use crate::route::reference::response::Presenter;

/// Genres and languages: small lookup tables that books point at.
pub trait ReferenceRouter {
    fn route_reference(self) -> Self;
}

impl ReferenceRouter for Router<AppModule> {
    fn route_reference(self) -> Self {
        self.route(
            "/catalog/genres",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| async move { module.get_all_genres().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 Actor(actor): Actor,
                 Json(req): Json<CreateGenreRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((actor, req))
                        .handle(|dto| async move { module.create_genre(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/catalog/languages",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), Presenter)
                    .bypass(|| async move { module.get_all_languages().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 Actor(actor): Actor,
                 Json(req): Json<CreateLanguageRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((actor, req))
                        .handle(|dto| async move { module.create_language(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
