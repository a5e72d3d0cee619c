use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    middleware,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::admin_controller::AdminController;
use crate::controllers::billing_controller::BillingController;
use crate::controllers::customer_controller::CustomerController;
use crate::controllers::driver_controller::DriverController;
use crate::dto::admin_dto::{AdminResponse, CreateAdminRequest, UpdateAdminRequest};
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::billing_dto::{BillFilters, BillResponse};
use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::dto::driver_dto::{
    CreateDriverRequest, DriverFilters, DriverResponse, UpdateDriverRequest,
};
use crate::dto::MessageResponse;
use crate::middleware::auth::{end_bearer_session, require_session};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router de administración. Todo menos signup/login exige una sesión
/// activa; la gestión de cuentas y facturas delega en los controllers
/// de cada dominio en lugar de saltar por HTTP.
pub fn create_admin_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/signup", post(signup_admin))
        .route("/login", post(login_admin));

    let protected = Router::new()
        .route("/logout", post(logout_admin))
        .route("/:id", put(update_admin))
        .route("/customers", get(list_customers).post(add_customer))
        .route("/customers/email/:email", get(get_customer_by_email))
        .route(
            "/customers/:id",
            put(update_customer).delete(delete_customer),
        )
        .route("/drivers", get(list_drivers).post(add_driver))
        .route("/drivers/email/:email", get(get_driver_by_email))
        .route("/drivers/:id", put(update_driver).delete(delete_driver))
        .route("/bills", get(list_bills))
        .route("/bills/:id", get(get_bill))
        .route_layer(middleware::from_fn_with_state(state, require_session));

    public.merge(protected)
}

async fn signup_admin(
    State(state): State<AppState>,
    Json(request): Json<CreateAdminRequest>,
) -> Result<(StatusCode, Json<AdminResponse>), AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.signup(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login_admin(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.login(request, &state).await?;
    Ok(Json(response))
}

async fn logout_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    end_bearer_session(&state, &headers).await?;
    Ok(Json(MessageResponse::new("Logout successful")))
}

async fn update_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAdminRequest>,
) -> Result<Json<AdminResponse>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.update(&id, request).await?;
    Ok(Json(response))
}

// --- Gestión de clientes ---

async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.list().await?;
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

async fn add_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
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

// --- Gestión de conductores ---

async fn list_drivers(
    State(state): State<AppState>,
    Query(filters): Query<DriverFilters>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list(&filters).await?;
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

async fn add_driver(
    State(state): State<AppState>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<(StatusCode, Json<DriverResponse>), AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.signup(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
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

// --- Revisión de facturas ---

async fn list_bills(
    State(state): State<AppState>,
    Query(filters): Query<BillFilters>,
) -> Result<Json<Vec<BillResponse>>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    let response = controller.list_bills(&filters).await?;
    Ok(Json(response))
}

async fn get_bill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BillResponse>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    let response = controller.get_bill(&id).await?;
    Ok(Json(response))
}
