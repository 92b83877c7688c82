//! Central error handling for the HTTP layer
//!
//! Every failure raised while serving a request ends up here. The detail is
//! logged for operators and the client only ever sees a generic 500 body.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use super::responses::MessageResponse;
use crate::error::ServiceError;

/// Failure raised by a controller or one of the steps before it
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Service call failed: {0}")]
    Service(#[from] ServiceError),

    #[error("Failed to parse request body: {0}")]
    Body(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        internal_error_response()
    }
}

/// The generic response sent for any unhandled failure
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse::internal_error()),
    )
        .into_response()
}

/// Turn a handler panic into the generic error response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!("Handler panicked: {}", detail);
    internal_error_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn service_error_hides_detail() {
        let err = ApiError::from(ServiceError::unavailable("db at 10.0.0.7 refused"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "message": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn panic_payloads_map_to_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(42_u8));
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Internal Server Error" })
        );
    }
}
