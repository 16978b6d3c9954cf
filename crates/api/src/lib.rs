//! HTTP API server with observability for the cargo booking system.
//!
//! Provides REST endpoints for shipment booking and routing, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use booking::{BookingService, InMemoryRoutingService, RoutingService};
use metrics_exporter_prometheus::PrometheusHandle;
use shipment_store::{LocationRepository, ShipmentRepository};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::shipments::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, L, R>(state: Arc<AppState<S, L, R>>, metrics_handle: PrometheusHandle) -> Router
where
    S: ShipmentRepository + 'static,
    L: LocationRepository + 'static,
    R: RoutingService + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/locations", get(routes::locations::list::<S, L, R>))
        .route("/shipments", post(routes::shipments::book::<S, L, R>))
        .route("/shipments", get(routes::shipments::list::<S, L, R>))
        .route("/shipments/{id}", get(routes::shipments::get::<S, L, R>))
        .route(
            "/shipments/{id}/routes",
            get(routes::shipments::routes::<S, L, R>),
        )
        .route(
            "/shipments/{id}/routing",
            post(routes::shipments::reserve::<S, L, R>),
        )
        .route(
            "/shipments/{id}/itinerary",
            post(routes::shipments::assign_route::<S, L, R>),
        )
        .route(
            "/shipments/{id}/destination",
            post(routes::shipments::change_destination::<S, L, R>),
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

/// Creates the default application state over the given stores, using the
/// in-memory routing service.
pub fn create_default_state<S, L>(
    shipment_store: S,
    location_store: L,
) -> Arc<AppState<S, L, InMemoryRoutingService>>
where
    S: ShipmentRepository + Clone + 'static,
    L: LocationRepository + Clone + 'static,
{
    let booking_service = BookingService::new(
        shipment_store.clone(),
        location_store.clone(),
        InMemoryRoutingService::new(),
    );

    Arc::new(AppState {
        booking_service,
        shipment_store,
        location_store,
    })
}
