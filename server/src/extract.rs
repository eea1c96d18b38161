use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use error_stack::Report;
use uuid::Uuid;

use application::service::AuthenticateService;
use application::transfer::AuthenticateDto;
use kernel::prelude::entity::{SessionId, User};
use kernel::KernelError;

use crate::error::ErrorStatus;
use crate::handler::AppModule;

pub const SESSION_COOKIE: &str = "sessionid";

/// The logged-in caller, identified by `Authorization: Bearer <user uuid>`.
#[derive(Debug)]
pub struct Actor(pub User);

#[axum::async_trait]
impl FromRequestParts<AppModule> for Actor {
    type Rejection = ErrorStatus;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppModule,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    Report::new(KernelError::Unauthenticated)
                        .attach_printable(rejection.to_string())
                })?;
        let id = Uuid::parse_str(bearer.token()).map_err(|error| {
            Report::new(error)
                .change_context(KernelError::Unauthenticated)
                .attach_printable("Bearer token is not a user id")
        })?;
        let user = state.authenticate(AuthenticateDto { id }).await?;
        Ok(Self(user))
    }
}

/// Session carried by the `sessionid` cookie. An absent or unreadable cookie means no session yet.
#[derive(Debug)]
pub struct Session(pub Option<SessionId>);

impl Session {
    pub fn from_jar(jar: &CookieJar) -> Self {
        Self(
            jar.get(SESSION_COOKIE)
                .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
                .map(SessionId::new),
        )
    }
}
