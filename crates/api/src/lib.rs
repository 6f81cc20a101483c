//! HTTP API server with observability for the employee records system.
//!
//! Provides REST endpoints for employee record management,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use domain::{EmployeeRepository, EmployeeService};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::employees::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: EmployeeRepository + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/employees", post(routes::employees::create::<R>))
        .route("/employees", get(routes::employees::list::<R>))
        .route("/employees/{id}", get(routes::employees::get::<R>))
        .route("/employees/{id}", delete(routes::employees::delete::<R>))
        .route(
            "/employees/national-id/{national_id}",
            get(routes::employees::get_by_national_id::<R>),
        )
        .route(
            "/employees/status/{status}",
            get(routes::employees::list_by_status::<R>),
        )
        .route(
            "/employees/department/{department}",
            get(routes::employees::list_by_department::<R>),
        )
        .route(
            "/employees/{id}/personal-info",
            put(routes::employees::update_personal_info::<R>),
        )
        .route(
            "/employees/{id}/contact-info",
            put(routes::employees::update_contact_info::<R>),
        )
        .route(
            "/employees/{id}/job",
            put(routes::employees::change_job::<R>),
        )
        .route(
            "/employees/{id}/status/{status}",
            put(routes::employees::change_status::<R>),
        )
        .route(
            "/employees/{id}/deactivate",
            put(routes::employees::deactivate::<R>),
        )
        .route(
            "/employees/{id}/reactivate",
            put(routes::employees::reactivate::<R>),
        )
        .route(
            "/employees/{id}/leave",
            put(routes::employees::place_on_leave::<R>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state over the given repository.
pub fn create_state<R: EmployeeRepository + 'static>(repository: R) -> Arc<AppState<R>> {
    Arc::new(AppState {
        service: EmployeeService::new(repository),
    })
}
