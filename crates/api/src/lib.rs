//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes under `/api`
//! - JWT authentication middleware
//! - Request extractors
//! - Error responses

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use sea_orm::DatabaseConnection;
use splitter_core::auth::AuthService;
use splitter_core::balance::BalanceService;
use splitter_core::expense::ExpenseService;
use splitter_core::person::PersonService;
use splitter_db::{ExpenseRepository, PersonRepository, SnapshotRepository, UserRepository};
use splitter_shared::JwtService;
use splitter_shared::config::CorsConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
}

impl AppState {
    /// Creates the state from a connection pool and a JWT service.
    #[must_use]
    pub fn new(db: DatabaseConnection, jwt_service: JwtService) -> Self {
        Self {
            db: Arc::new(db),
            jwt_service: Arc::new(jwt_service),
        }
    }

    pub(crate) fn person_service(&self) -> PersonService<PersonRepository, ExpenseRepository> {
        PersonService::new(
            Arc::new(PersonRepository::new((*self.db).clone())),
            Arc::new(ExpenseRepository::new((*self.db).clone())),
        )
    }

    pub(crate) fn expense_service(&self) -> ExpenseService<PersonRepository, ExpenseRepository> {
        ExpenseService::new(
            Arc::new(PersonRepository::new((*self.db).clone())),
            Arc::new(ExpenseRepository::new((*self.db).clone())),
        )
    }

    pub(crate) fn balance_service(&self) -> BalanceService<SnapshotRepository> {
        BalanceService::new(Arc::new(SnapshotRepository::new((*self.db).clone())))
    }

    pub(crate) fn auth_service(&self) -> AuthService<UserRepository> {
        AuthService::new(
            Arc::new(UserRepository::new((*self.db).clone())),
            Arc::clone(&self.jwt_service),
        )
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .nest("/api", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    // Browsers reject credentialed responses for a wildcard origin.
    if cors.allowed_origins.iter().any(|origin| origin.trim() == "*") {
        warn!("CORS open to any origin, credentials disabled");
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|_| warn!(origin = %origin, "ignoring unusable CORS origin"))
                .ok()
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
