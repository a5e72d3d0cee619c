use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::billing_controller::BillingController;
use crate::dto::billing_dto::{
    BalanceResponse, BillFilters, BillResponse, CreateBillRequest, CreateWalletRequest,
    CreateWalletResponse, GetWalletResponse, WalletAmountRequest, WalletCheckResponse,
};
use crate::dto::MessageResponse;
use crate::models::wallet::WalletKind;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_billing_router() -> Router<AppState> {
    Router::new()
        .route("/createCustomerWallet", post(create_customer_wallet))
        .route("/createDriverWallet", post(create_driver_wallet))
        .route("/addToCustomerWallet", post(add_to_customer_wallet))
        .route("/addToDriverWallet", post(add_to_driver_wallet))
        .route("/customerWalletCheck", post(customer_wallet_check))
        .route("/getCustomerWallet/:ssn", get(get_customer_wallet))
        .route("/getDriverWallet/:ssn", get(get_driver_wallet))
        .route("/deleteCustomerWallet/:ssn", delete(delete_customer_wallet))
        .route("/deleteDriverWallet/:ssn", delete(delete_driver_wallet))
        .route("/bills", post(create_bill).get(list_bills))
        .route("/bills/:id", get(get_bill))
}

async fn create_customer_wallet(
    State(state): State<AppState>,
    Json(request): Json<CreateWalletRequest>,
) -> Result<(StatusCode, Json<CreateWalletResponse>), AppError> {
    let controller = BillingController::new(state.pool.clone());
    let response = controller.create_wallet(WalletKind::Customer, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn create_driver_wallet(
    State(state): State<AppState>,
    Json(request): Json<CreateWalletRequest>,
) -> Result<(StatusCode, Json<CreateWalletResponse>), AppError> {
    let controller = BillingController::new(state.pool.clone());
    let response = controller.create_wallet(WalletKind::Driver, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn add_to_customer_wallet(
    State(state): State<AppState>,
    Json(request): Json<WalletAmountRequest>,
) -> Result<Json<BalanceResponse>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    let response = controller.add_to_customer_wallet(request).await?;
    Ok(Json(response))
}

// La ruta conserva su nombre histórico; la operación es el retiro del
// pago acumulado del conductor.
async fn add_to_driver_wallet(
    State(state): State<AppState>,
    Json(request): Json<WalletAmountRequest>,
) -> Result<Json<BalanceResponse>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    let response = controller.withdraw_from_driver_wallet(request).await?;
    Ok(Json(response))
}

async fn customer_wallet_check(
    State(state): State<AppState>,
    Json(request): Json<WalletAmountRequest>,
) -> Result<Json<WalletCheckResponse>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    let response = controller.check_customer_wallet(request).await?;
    Ok(Json(response))
}

async fn get_customer_wallet(
    State(state): State<AppState>,
    Path(ssn): Path<String>,
) -> Result<Json<GetWalletResponse>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    let response = controller.get_wallet(WalletKind::Customer, &ssn).await?;
    Ok(Json(response))
}

async fn get_driver_wallet(
    State(state): State<AppState>,
    Path(ssn): Path<String>,
) -> Result<Json<GetWalletResponse>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    let response = controller.get_wallet(WalletKind::Driver, &ssn).await?;
    Ok(Json(response))
}

async fn delete_customer_wallet(
    State(state): State<AppState>,
    Path(ssn): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    let message = controller.delete_wallet(WalletKind::Customer, &ssn).await?;
    Ok(Json(MessageResponse::new(message)))
}

async fn delete_driver_wallet(
    State(state): State<AppState>,
    Path(ssn): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    let message = controller.delete_wallet(WalletKind::Driver, &ssn).await?;
    Ok(Json(MessageResponse::new(message)))
}

async fn create_bill(
    State(state): State<AppState>,
    Json(request): Json<CreateBillRequest>,
) -> Result<(StatusCode, Json<BillResponse>), AppError> {
    let controller = BillingController::new(state.pool.clone());
    let response = controller.create_bill(request, &state).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

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
