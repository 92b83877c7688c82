//! Request body parsing

use std::collections::HashMap;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Form, Json,
};
use serde_json::{Map, Value};
use tracing::debug;

use super::error::ApiError;

/// Parsed request body, whatever encoding the client used
///
/// JSON and URL-encoded form bodies are decoded into a JSON value. Empty
/// bodies and other content types decode to an empty object, so handlers
/// never have to care whether a body was sent at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(pub Value);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(headers: &HeaderMap) -> Self {
        let mime = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(|value| value.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if mime == "application/json" || mime.ends_with("+json") {
            BodyKind::Json
        } else if mime == "application/x-www-form-urlencoded" {
            BodyKind::Form
        } else {
            BodyKind::Other
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

#[async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyKind::of(req.headers()) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::Body(e.body_text()))?;
                if bytes.is_empty() {
                    return Ok(Payload(empty_object()));
                }
                let Json(value) =
                    Json::<Value>::from_bytes(&bytes).map_err(|e| ApiError::Body(e.body_text()))?;
                Ok(Payload(value))
            }
            BodyKind::Form => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::Body(e.body_text()))?;
                let object = fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect();
                Ok(Payload(Value::Object(object)))
            }
            BodyKind::Other => {
                debug!("Ignoring request body with unsupported content type");
                Ok(Payload(empty_object()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn parse(content_type: Option<&str>, body: &'static str) -> Result<Payload, ApiError> {
        Payload::from_request(request(content_type, body), &()).await
    }

    #[tokio::test]
    async fn parses_json_body() {
        let Payload(value) = parse(Some("application/json"), r#"{"data":[1,2,3]}"#)
            .await
            .unwrap();
        assert_eq!(value, json!({ "data": [1, 2, 3] }));
    }

    #[tokio::test]
    async fn accepts_json_with_charset() {
        let Payload(value) = parse(Some("application/json; charset=utf-8"), r#"{"data":"x"}"#)
            .await
            .unwrap();
        assert_eq!(value["data"], "x");
    }

    #[tokio::test]
    async fn parses_form_body() {
        let Payload(value) = parse(
            Some("application/x-www-form-urlencoded"),
            "data=q3+numbers&source=news",
        )
        .await
        .unwrap();
        assert_eq!(value, json!({ "data": "q3 numbers", "source": "news" }));
    }

    #[tokio::test]
    async fn empty_json_body_is_empty_object() {
        let Payload(value) = parse(Some("application/json"), "").await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn other_content_types_are_ignored() {
        let Payload(value) = parse(Some("text/plain"), "data=1").await.unwrap();
        assert_eq!(value, json!({}));

        let Payload(value) = parse(None, r#"{"data":1}"#).await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let err = parse(Some("application/json"), "{not json").await.unwrap_err();
        assert!(matches!(err, ApiError::Body(_)));
    }
}
