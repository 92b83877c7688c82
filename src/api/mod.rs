//! HTTP API module
//!
//! This module contains the middleware chain, the route table, the endpoint
//! handlers and the error-handling stage.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod responses;

use std::sync::Arc;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::state::AppState;
use handlers::*;

/// Prefix shared by every API route
pub const API_PREFIX: &str = "/api";

/// Create the HTTP router with all endpoints
///
/// Middleware runs in the order listed: CORS, security headers, access
/// logging, then panic capture. Bodies are parsed by the handlers' extractors.
pub fn create_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/tech-layoffs", get(get_tech_layoffs).fallback(not_found))
        .route("/analyze", post(analyze_trends).fallback(not_found))
        .fallback(not_found);

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(from_fn(middleware::security_headers))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(LatencyUnit::Millis),
                        ),
                )
                .layer(CatchPanicLayer::custom(error::handle_panic)),
        )
        .with_state(state)
}
