use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use serde::Serialize;

use kernel::{KernelError, KernelReportExt};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

#[derive(Debug, Serialize)]
struct FieldErrorResponse<'a> {
    field: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    errors: Vec<FieldErrorResponse<'a>>,
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let status = match self.0.current_context() {
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::PermissionDenied => StatusCode::FORBIDDEN,
            KernelError::Unauthenticated => StatusCode::UNAUTHORIZED,
            KernelError::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            KernelError::ConstraintViolation | KernelError::InvalidState => StatusCode::CONFLICT,
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match status {
            StatusCode::UNPROCESSABLE_ENTITY => {
                let errors = self
                    .0
                    .field_errors()
                    .into_iter()
                    .map(|error| FieldErrorResponse {
                        field: error.field(),
                        message: error.message(),
                    })
                    .collect();
                (status, Json(ErrorBody { errors })).into_response()
            }
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("{:?}", self.0);
                status.into_response()
            }
            _ => {
                tracing::debug!("{:?}", self.0);
                status.into_response()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;

    use kernel::{validation_error, KernelError};

    use crate::error::ErrorStatus;

    #[test]
    fn kinds_map_to_statuses() {
        for (kind, status) in [
            (KernelError::NotFound, StatusCode::NOT_FOUND),
            (KernelError::PermissionDenied, StatusCode::FORBIDDEN),
            (KernelError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (KernelError::ConstraintViolation, StatusCode::CONFLICT),
            (KernelError::InvalidState, StatusCode::CONFLICT),
            (KernelError::Timeout, StatusCode::REQUEST_TIMEOUT),
            (KernelError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            let response = ErrorStatus::from(Report::new(kind)).into_response();
            assert_eq!(response.status(), status, "{kind:?}");
        }
    }

    #[tokio::test]
    async fn validation_lists_field_messages() {
        let report = validation_error("due_back", "Invalid date - renewal in past");
        let response = ErrorStatus::from(report).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "errors": [
                    { "field": "due_back", "message": "Invalid date - renewal in past" }
                ]
            })
        );
    }
}
