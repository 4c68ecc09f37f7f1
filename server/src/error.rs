use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The only application error the service produces. A mutation body that is not
/// valid JSON cannot be inspected for an action at all, so it is turned away
/// here; a parseable body with a missing or unrecognized action is a silent
/// no-op instead, handled in the route.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}
