use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_profile::get_profile;
use super::handlers::login::login;
use super::handlers::refresh_token::refresh_token;
use super::handlers::register::register;
use super::handlers::update_profile::update_profile;
use super::middleware::authenticate as auth_middleware;
use super::middleware::AuthGate;
use crate::domain::credential::ports::CredentialServicePort;
use crate::user::ports::ProfileServicePort;

#[derive(Clone)]
pub struct AppState {
    pub credential_service: Arc<dyn CredentialServicePort>,
    pub profile_service: Arc<dyn ProfileServicePort>,
    pub auth_gate: Arc<AuthGate>,
}

pub fn create_router(
    credential_service: Arc<dyn CredentialServicePort>,
    profile_service: Arc<dyn ProfileServicePort>,
    auth_gate: Arc<AuthGate>,
) -> Router {
    let state = AppState {
        credential_service,
        profile_service,
        auth_gate,
    };

    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh", post(refresh_token));

    let protected_routes = Router::new()
        .route("/api/profile", get(get_profile).put(update_profile))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers stay out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
