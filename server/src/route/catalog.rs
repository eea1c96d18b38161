mod request;
mod response;

use application::service::GetCatalogSummaryService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use axum_extra::extract::CookieJar;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::extract::Session;
use crate::handler::AppModule;
use crate::route::catalog::request::Transformer;
use crate::route::catalog::response::Presenter;

pub trait CatalogRouter {
    fn route_catalog(self) -> Self;
}

impl CatalogRouter for Router<AppModule> {
    fn route_catalog(self) -> Self {
        self.route(
            "/catalog",
            get(|State(module): State<AppModule>, jar: CookieJar| async move {
                Controller::new(Transformer, Presenter)
                    .intake(Session::from_jar(&jar))
                    .handle(|dto| async move { module.get_catalog_summary(dto).await })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
