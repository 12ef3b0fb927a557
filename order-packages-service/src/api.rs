use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, put};
use axum::Router;
use serde::Deserialize;
use shared::{CreatedResponse, MutationResponse, NewPackage, PackageStatus, ServiceError};
use uuid::Uuid;

use crate::models::OrderPackage;
use crate::store::OrderPackageStore;

#[derive(Debug, Deserialize)]
struct CreatePackageRequest {
    order_id: Option<Uuid>,
    menu_package_id: Option<Uuid>,
    chef_id: Option<Uuid>,
    quantity: Option<i32>,
    note: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateStatusRequest {
    new_status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateQuantityRequest {
    new_quantity: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct UpdateNoteRequest {
    new_note: Option<String>,
}

pub fn router(store: OrderPackageStore) -> Router {
    Router::new()
        .route("/", get(list_packages).post(create_package))
        .route("/by-order/:order_id", get(get_by_order))
        .route("/by-chef/:chef_id", get(get_by_chef))
        .route("/:id/status", put(change_status))
        .route("/:id/quantity", put(change_quantity))
        .route("/:id/note", put(change_note))
        .with_state(store)
}

async fn list_packages(
    State(store): State<OrderPackageStore>,
) -> Result<Json<Vec<OrderPackage>>, ServiceError> {
    Ok(Json(store.list_all().await?))
}

async fn get_by_order(
    State(store): State<OrderPackageStore>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<OrderPackage>, ServiceError> {
    let package = store.find_by_order(order_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!("order packages not found for order {}", order_id))
    })?;
    Ok(Json(package))
}

async fn get_by_chef(
    State(store): State<OrderPackageStore>,
    Path(chef_id): Path<Uuid>,
) -> Result<Json<OrderPackage>, ServiceError> {
    let package = store.find_by_chef(chef_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!("order packages not found for chef {}", chef_id))
    })?;
    Ok(Json(package))
}

async fn create_package(
    State(store): State<OrderPackageStore>,
    Json(req): Json<CreatePackageRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ServiceError> {
    // The preparer is optional for packages, unlike details.
    let (Some(order_id), Some(menu_package_id), Some(quantity)) =
        (req.order_id, req.menu_package_id, req.quantity)
    else {
        return Err(ServiceError::InvalidArgument(
            "missing required fields; required: order_id, menu_package_id, quantity".into(),
        ));
    };
    let status = match req.status.as_deref() {
        Some(s) => s.parse::<PackageStatus>()?,
        None => PackageStatus::default(),
    };
    let id = store
        .insert(NewPackage {
            order_id,
            menu_package_id,
            chef_id: req.chef_id,
            quantity,
            note: req.note,
            status,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { success: true, id })))
}

async fn change_status(
    State(store): State<OrderPackageStore>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<MutationResponse>, ServiceError> {
    let new_status = req
        .new_status
        .ok_or_else(|| ServiceError::InvalidArgument("missing 'new_status' in payload".into()))?;
    store.update_status(id, &new_status).await?;
    Ok(Json(MutationResponse {
        success: true,
        message: format!("order package {} status updated", id),
    }))
}

async fn change_quantity(
    State(store): State<OrderPackageStore>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<Json<MutationResponse>, ServiceError> {
    let new_quantity = req
        .new_quantity
        .ok_or_else(|| ServiceError::InvalidArgument("missing 'new_quantity' in payload".into()))?;
    store.update_quantity(id, new_quantity).await?;
    Ok(Json(MutationResponse {
        success: true,
        message: format!("order package {} quantity updated", id),
    }))
}

async fn change_note(
    State(store): State<OrderPackageStore>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<MutationResponse>, ServiceError> {
    let new_note = req
        .new_note
        .ok_or_else(|| ServiceError::InvalidArgument("missing 'new_note' in payload".into()))?;
    store.update_note(id, new_note).await?;
    Ok(Json(MutationResponse {
        success: true,
        message: format!("order package {} note updated", id),
    }))
}
