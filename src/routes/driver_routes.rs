use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::driver_dto::{
    CreateDriverRequest, DriverFilters, DriverResponse, UpdateDriverRequest,
    UpdateDriverStatusRequest,
};
use crate::dto::MessageResponse;
use crate::middleware::auth::end_bearer_session;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup_driver))
        .route("/login", post(login_driver))
        .route("/logout", post(logout_driver))
        .route("/", get(list_drivers))
        .route("/email/:email", get(get_driver_by_email))
        .route(
            "/:id",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
        .route("/:id/status", put(update_driver_status))
}

async fn signup_driver(
    State(state): State<AppState>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<(StatusCode, Json<DriverResponse>), AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.signup(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login_driver(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.login(request, &state).await?;
    Ok(Json(response))
}

async fn logout_driver(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    end_bearer_session(&state, &headers).await?;
    Ok(Json(MessageResponse::new("Logout successful")))
}

async fn list_drivers(
    State(state): State<AppState>,
    Query(filters): Query<DriverFilters>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list(&filters).await?;
    Ok(Json(response))
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DriverResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn get_driver_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<DriverResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.get_by_email(&email).await?;
    Ok(Json(response))
}

async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateDriverRequest>,
) -> Result<Json<DriverResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(MessageResponse::new("Driver deleted successfully")))
}

async fn update_driver_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateDriverStatusRequest>,
) -> Result<Json<DriverResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.update_status(&id, request, &state).await?;
    Ok(Json(response))
}
