mod request;
mod response;

use application::service::{GetBookInstanceService, InventoryService, RenewBookInstanceService};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::Actor;
use crate::handler::AppModule;
use crate::route::instance::request::{
    CheckoutRequest, GetBookInstanceRequest, RenewRequest, RenewalFormRequest, ReserveRequest,
    Transformer, TransitionRequest,
};
use crate::route::instance::response::{Presenter, RenewedPresenter};

pub trait InstanceRouter {
    fn route_instance(self) -> Self;
}

impl InstanceRouter for Router<AppModule> {
    fn route_instance(self) -> Self {
        self.route(
            "/catalog/instances/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetBookInstanceRequest::new(id))
                        .handle(|dto| async move { module.get_book_instance(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/catalog/instances/:id/renew",
            get(
                |State(module): State<AppModule>, Actor(actor): Actor, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(RenewalFormRequest::new(actor, id))
                        .handle(|dto| async move { module.propose_renewal(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 Actor(actor): Actor,
                 Path(id): Path<Uuid>,
                 Json(req): Json<RenewRequest>| async move {
                    Controller::new(Transformer, RenewedPresenter)
                        .try_intake((actor, id, req))?
                        .handle(|dto| async move { module.renew(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/catalog/instances/:id/checkout",
            post(
                |State(module): State<AppModule>,
                 Actor(actor): Actor,
                 Path(id): Path<Uuid>,
                 Json(req): Json<CheckoutRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((actor, id, req))
                        .handle(|dto| async move { module.checkout(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/catalog/instances/:id/return",
            post(
                |State(module): State<AppModule>, Actor(actor): Actor, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(TransitionRequest::new(actor, id))
                        .handle(|dto| async move { module.mark_returned(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/catalog/instances/:id/reserve",
            post(
                |State(module): State<AppModule>,
                 Actor(actor): Actor,
                 Path(id): Path<Uuid>,
                 Json(req): Json<ReserveRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((actor, id, req))
                        .handle(|dto| async move { module.reserve(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/catalog/instances/:id/release",
            post(
                |State(module): State<AppModule>, Actor(actor): Actor, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(TransitionRequest::new(actor, id))
                        .handle(|dto| async move { module.release(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/catalog/instances/:id/maintenance",
            post(
                |State(module): State<AppModule>, Actor(actor): Actor, Path(id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(TransitionRequest::new(actor, id))
                        .handle(|dto| async move { module.send_to_maintenance(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
