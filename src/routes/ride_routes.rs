use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::ride_controller::RideController;
use crate::dto::driver_dto::DriverResponse;
use crate::dto::ride_dto::{
    AssignRideRequest, CreateRideRequest, NearbyQuery, RideResponse, UpdateRideRequest,
};
use crate::dto::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ride_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_ride))
        .route("/nearby", get(nearby_rides))
        .route("/nearby-drivers", get(nearby_drivers))
        .route("/:id", put(update_ride).delete(delete_ride))
        .route("/:id/assign", put(assign_ride))
        .route("/customer/:customer_id", get(customer_rides))
        .route("/driver/:driver_id", get(driver_rides))
}

async fn create_ride(
    State(state): State<AppState>,
    Json(request): Json<CreateRideRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let controller = RideController::new(state.pool.clone());
    controller.create(request, &state).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse::new(
            "Ride request received and being processed",
        )),
    ))
}

async fn nearby_rides(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<RideResponse>>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.nearby_rides(query.latitude, query.longitude).await?;
    Ok(Json(response))
}

async fn nearby_drivers(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller
        .nearby_drivers(query.latitude, query.longitude, &state)
        .await?;
    Ok(Json(response))
}

async fn assign_ride(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignRideRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    controller.assign(id, request, &state).await?;
    Ok(Json(MessageResponse::new("Ride Accepted Confirmed")))
}

async fn update_ride(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRideRequest>,
) -> Result<Json<RideResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.update(id, request, &state).await?;
    Ok(Json(response))
}

async fn delete_ride(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = RideController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(MessageResponse::new("Ride deleted successfully")))
}

async fn customer_rides(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Vec<RideResponse>>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.customer_rides(&customer_id).await?;
    Ok(Json(response))
}

async fn driver_rides(
    State(state): State<AppState>,
    Path(driver_id): Path<String>,
) -> Result<Json<Vec<RideResponse>>, AppError> {
    let controller = RideController::new(state.pool.clone());
    let response = controller.driver_rides(&driver_id).await?;
    Ok(Json(response))
}
