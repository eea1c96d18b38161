use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::CookieJar;
use serde::Serialize;
use uuid::Uuid;

use application::transfer::CatalogSummaryDto;
use kernel::prelude::entity::SESSION_LIFETIME;

use crate::controller::Exhaust;
use crate::extract::SESSION_COOKIE;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    #[serde(skip)]
    session: Uuid,
    num_books: i64,
    num_instances: i64,
    num_instances_available: i64,
    num_authors: i64,
    num_genres: i64,
    num_visits: i64,
}

impl IntoResponse for CatalogResponse {
    fn into_response(self) -> Response {
        let cookie = Cookie::build((SESSION_COOKIE, self.session.to_string()))
            .path("/")
            .http_only(true)
            .max_age(SESSION_LIFETIME);
        let jar = CookieJar::new().add(cookie);
        (StatusCode::OK, jar, Json(self)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<CatalogSummaryDto> for Presenter {
    type To = CatalogResponse;
    fn emit(&self, input: CatalogSummaryDto) -> Self::To {
        CatalogResponse {
            session: input.session.into(),
            num_books: input.num_books,
            num_instances: input.num_instances,
            num_instances_available: input.num_instances_available,
            num_authors: input.num_authors,
            num_genres: input.num_genres,
            num_visits: input.num_visits,
        }
    }
}

#[cfg(test)]
mod test {
    use axum::http::header;
    use axum::response::IntoResponse;
    use uuid::Uuid;

    use application::transfer::CatalogSummaryDto;
    use kernel::prelude::entity::SessionId;

    use crate::controller::Exhaust;
    use crate::route::catalog::response::Presenter;

    #[test]
    fn session_cookie_expires_with_the_session() {
        let session = Uuid::new_v4();
        let response = Presenter
            .emit(CatalogSummaryDto {
                session: SessionId::new(session),
                num_books: 0,
                num_instances: 0,
                num_instances_available: 0,
                num_authors: 0,
                num_genres: 0,
                num_visits: 1,
            })
            .into_response();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with(&format!("sessionid={session}")));
        assert!(cookie.contains("Max-Age=1209600"));
        assert!(cookie.contains("HttpOnly"));
    }
}
