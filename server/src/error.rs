use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};

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
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let context = *self.0.current_context();
        let status = match context {
            KernelError::InvalidInput
            | KernelError::InvalidIdentifier
            | KernelError::InvalidFilter => StatusCode::BAD_REQUEST,
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Conflict => StatusCode::CONFLICT,
            KernelError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::warn!("{:?}", self.0);
        }
        let body = ErrorResponse {
            error: context.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
