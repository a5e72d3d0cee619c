use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::customer_controller::CustomerController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::customer_dto::{
    CreateCustomerRequest, CustomerResponse, GenerateBillRequest, GenerateBillResponse,
    UpdateCustomerRequest,
};
use crate::dto::driver_dto::DriverResponse;
use crate::dto::MessageResponse;
use crate::dto::ride_dto::NearbyQuery;
use crate::middleware::auth::end_bearer_session;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_customer).get(list_customers))
        .route("/login", post(login_customer))
        .route("/logout", post(logout_customer))
        .route("/email/:email", get(get_customer_by_email))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/:id/generate-bill", post(generate_bill))
        .route("/:id/nearby-drivers", get(nearby_drivers))
}

async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn get_customer_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<CustomerResponse>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.get_by_email(&email).await?;
    Ok(Json(response))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    controller.delete(&id).await?;
    Ok(Json(MessageResponse::new("Customer deleted successfully")))
}

async fn login_customer(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.login(request, &state).await?;
    Ok(Json(response))
}

async fn logout_customer(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    end_bearer_session(&state, &headers).await?;
    Ok(Json(MessageResponse::new("Logout successful")))
}

async fn generate_bill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<GenerateBillRequest>,
) -> Result<(StatusCode, Json<GenerateBillResponse>), AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.generate_bill(&id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn nearby_drivers(
    State(state): State<AppState>,
    Path(_id): Path<String>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller
        .nearby_drivers(query.latitude, query.longitude, &state)
        .await?;
    Ok(Json(response))
}
