//! Shipment booking and routing endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use booking::{BookingError, BookingService, RoutingService};
use chrono::{DateTime, Utc};
use common::{TrackingId, UnLocode};
use domain::{Itinerary, Leg, Shipment};
use serde::{Deserialize, Serialize};
use shipment_store::{LocationRepository, ShipmentRepository};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S, L, R> {
    pub booking_service: BookingService<S, L, R>,
    pub shipment_store: S,
    pub location_store: L,
}

// -- Request types --

#[derive(Deserialize)]
pub struct BookShipmentRequest {
    pub origin: String,
    pub destination: String,
    pub arrival_deadline: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct LegRequest {
    pub voyage_number: String,
    pub load_location: String,
    pub unload_location: String,
    pub load_time: DateTime<Utc>,
    pub unload_time: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct AssignRouteRequest {
    pub legs: Vec<LegRequest>,
}

#[derive(Deserialize)]
pub struct ChangeDestinationRequest {
    pub destination: String,
}

// -- Response types --

#[derive(Serialize)]
pub struct ShipmentBookedResponse {
    pub tracking_id: String,
    pub routing_status: String,
}

#[derive(Serialize)]
pub struct ShipmentResponse {
    pub tracking_id: String,
    pub origin: String,
    pub destination: String,
    pub arrival_deadline: DateTime<Utc>,
    pub routing_status: String,
    pub itinerary: Option<ItineraryResponse>,
}

#[derive(Serialize)]
pub struct ItineraryResponse {
    pub legs: Vec<LegResponse>,
}

#[derive(Serialize)]
pub struct LegResponse {
    pub voyage_number: String,
    pub load_location: String,
    pub unload_location: String,
    pub load_time: DateTime<Utc>,
    pub unload_time: DateTime<Utc>,
}

fn itinerary_response(itinerary: &Itinerary) -> ItineraryResponse {
    ItineraryResponse {
        legs: itinerary
            .legs()
            .iter()
            .map(|leg| LegResponse {
                voyage_number: leg.voyage_number.to_string(),
                load_location: leg.load_location.to_string(),
                unload_location: leg.unload_location.to_string(),
                load_time: leg.load_time,
                unload_time: leg.unload_time,
            })
            .collect(),
    }
}

fn shipment_response(shipment: &Shipment) -> ShipmentResponse {
    let spec = shipment.route_specification();
    ShipmentResponse {
        tracking_id: shipment.tracking_id().to_string(),
        origin: spec.origin().unlocode().to_string(),
        destination: spec.destination().unlocode().to_string(),
        arrival_deadline: spec.arrival_deadline(),
        routing_status: shipment.routing_status().to_string(),
        itinerary: shipment.itinerary().map(itinerary_response),
    }
}

fn parse_tracking_id(id: &str) -> Result<TrackingId, ApiError> {
    let uuid = uuid::Uuid::parse_str(id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid tracking id: {e}")))?;
    Ok(TrackingId::from_uuid(uuid))
}

fn parse_unlocode(code: &str) -> Result<UnLocode, ApiError> {
    UnLocode::new(code).map_err(|e| ApiError::BadRequest(e.to_string()))
}

// -- Handlers --

/// POST /shipments — book a new shipment.
#[tracing::instrument(skip(state, req))]
pub async fn book<S, L, R>(
    State(state): State<Arc<AppState<S, L, R>>>,
    Json(req): Json<BookShipmentRequest>,
) -> Result<(StatusCode, Json<ShipmentBookedResponse>), ApiError>
where
    S: ShipmentRepository + 'static,
    L: LocationRepository + 'static,
    R: RoutingService + 'static,
{
    let origin = parse_unlocode(&req.origin)?;
    let destination = parse_unlocode(&req.destination)?;

    let tracking_id = state
        .booking_service
        .book_new_shipment(origin, destination, req.arrival_deadline)
        .await?;

    let response = ShipmentBookedResponse {
        tracking_id: tracking_id.to_string(),
        routing_status: "NotRouted".to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /shipments — list all shipments.
#[tracing::instrument(skip(state))]
pub async fn list<S, L, R>(
    State(state): State<Arc<AppState<S, L, R>>>,
) -> Result<Json<Vec<ShipmentResponse>>, ApiError>
where
    S: ShipmentRepository + 'static,
    L: LocationRepository + 'static,
    R: RoutingService + 'static,
{
    let shipments = state
        .shipment_store
        .find_all()
        .await
        .map_err(BookingError::from)?;

    Ok(Json(shipments.iter().map(shipment_response).collect()))
}

/// GET /shipments/:id — load a shipment by tracking id.
#[tracing::instrument(skip(state))]
pub async fn get<S, L, R>(
    State(state): State<Arc<AppState<S, L, R>>>,
    Path(id): Path<String>,
) -> Result<Json<ShipmentResponse>, ApiError>
where
    S: ShipmentRepository + 'static,
    L: LocationRepository + 'static,
    R: RoutingService + 'static,
{
    let tracking_id = parse_tracking_id(&id)?;
    let shipment = state
        .shipment_store
        .find(tracking_id)
        .await
        .map_err(BookingError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Shipment {id} not found")))?;

    Ok(Json(shipment_response(&shipment)))
}

/// GET /shipments/:id/routes — candidate itineraries for a shipment.
///
/// Returns an empty list for unknown tracking ids.
#[tracing::instrument(skip(state))]
pub async fn routes<S, L, R>(
    State(state): State<Arc<AppState<S, L, R>>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ItineraryResponse>>, ApiError>
where
    S: ShipmentRepository + 'static,
    L: LocationRepository + 'static,
    R: RoutingService + 'static,
{
    let tracking_id = parse_tracking_id(&id)?;
    let candidates = state
        .booking_service
        .request_possible_routes(tracking_id)
        .await?;

    Ok(Json(candidates.iter().map(itinerary_response).collect()))
}

/// POST /shipments/:id/routing — reserve a shipment for a routing session.
#[tracing::instrument(skip(state))]
pub async fn reserve<S, L, R>(
    State(state): State<Arc<AppState<S, L, R>>>,
    Path(id): Path<String>,
) -> Result<Json<ShipmentResponse>, ApiError>
where
    S: ShipmentRepository + 'static,
    L: LocationRepository + 'static,
    R: RoutingService + 'static,
{
    let tracking_id = parse_tracking_id(&id)?;
    let shipment = state
        .booking_service
        .load_shipment_for_routing(tracking_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Shipment {id} not found")))?;

    Ok(Json(shipment_response(&shipment)))
}

/// POST /shipments/:id/itinerary — assign the shipment to a route.
#[tracing::instrument(skip(state, req))]
pub async fn assign_route<S, L, R>(
    State(state): State<Arc<AppState<S, L, R>>>,
    Path(id): Path<String>,
    Json(req): Json<AssignRouteRequest>,
) -> Result<Json<ShipmentResponse>, ApiError>
where
    S: ShipmentRepository + 'static,
    L: LocationRepository + 'static,
    R: RoutingService + 'static,
{
    let tracking_id = parse_tracking_id(&id)?;

    let mut legs = Vec::with_capacity(req.legs.len());
    for leg in &req.legs {
        legs.push(Leg::new(
            leg.voyage_number.as_str(),
            parse_unlocode(&leg.load_location)?,
            parse_unlocode(&leg.unload_location)?,
            leg.load_time,
            leg.unload_time,
        ));
    }
    let itinerary = Itinerary::new(legs).map_err(BookingError::from)?;

    state
        .booking_service
        .assign_to_route(itinerary, tracking_id)
        .await?;

    load_shipment(&state, tracking_id, &id).await
}

/// POST /shipments/:id/destination — change the shipment's destination.
#[tracing::instrument(skip(state, req))]
pub async fn change_destination<S, L, R>(
    State(state): State<Arc<AppState<S, L, R>>>,
    Path(id): Path<String>,
    Json(req): Json<ChangeDestinationRequest>,
) -> Result<Json<ShipmentResponse>, ApiError>
where
    S: ShipmentRepository + 'static,
    L: LocationRepository + 'static,
    R: RoutingService + 'static,
{
    let tracking_id = parse_tracking_id(&id)?;
    let destination = parse_unlocode(&req.destination)?;

    state
        .booking_service
        .change_destination(tracking_id, destination)
        .await?;

    load_shipment(&state, tracking_id, &id).await
}

async fn load_shipment<S, L, R>(
    state: &AppState<S, L, R>,
    tracking_id: TrackingId,
    id: &str,
) -> Result<Json<ShipmentResponse>, ApiError>
where
    S: ShipmentRepository + 'static,
    L: LocationRepository + 'static,
    R: RoutingService + 'static,
{
    let shipment = state
        .shipment_store
        .find(tracking_id)
        .await
        .map_err(BookingError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("Shipment {id} not found")))?;

    Ok(Json(shipment_response(&shipment)))
}
