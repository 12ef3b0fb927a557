use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, put};
use axum::Router;
use serde::Deserialize;
use shared::{CreatedResponse, DetailStatus, MutationResponse, NewDetail, ServiceError};
use uuid::Uuid;

use crate::models::OrderDetail;
use crate::store::OrderDetailStore;

#[derive(Debug, Deserialize)]
struct CreateDetailRequest {
    order_id: Option<Uuid>,
    menu_id: Option<Uuid>,
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

pub fn router(store: OrderDetailStore) -> Router {
    Router::new()
        .route("/", get(list_details).post(create_detail))
        .route("/by-order/:order_id", get(get_by_order))
        .route("/by-chef/:chef_id", get(get_by_chef))
        .route("/:id/status", put(change_status))
        .route("/:id/quantity", put(change_quantity))
        .route("/:id/note", put(change_note))
        .with_state(store)
}

async fn list_details(
    State(store): State<OrderDetailStore>,
) -> Result<Json<Vec<OrderDetail>>, ServiceError> {
    Ok(Json(store.list_all().await?))
}

async fn get_by_order(
    State(store): State<OrderDetailStore>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<OrderDetail>, ServiceError> {
    let detail = store.find_by_order(order_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!("order details not found for order {}", order_id))
    })?;
    Ok(Json(detail))
}

async fn get_by_chef(
    State(store): State<OrderDetailStore>,
    Path(chef_id): Path<Uuid>,
) -> Result<Json<OrderDetail>, ServiceError> {
    let detail = store.find_by_chef(chef_id).await?.ok_or_else(|| {
        ServiceError::NotFound(format!("order details not found for chef {}", chef_id))
    })?;
    Ok(Json(detail))
}

async fn create_detail(
    State(store): State<OrderDetailStore>,
    Json(req): Json<CreateDetailRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ServiceError> {
    let (Some(order_id), Some(menu_id), Some(chef_id), Some(quantity)) =
        (req.order_id, req.menu_id, req.chef_id, req.quantity)
    else {
        return Err(ServiceError::InvalidArgument(
            "missing required fields; required: order_id, menu_id, chef_id, quantity".into(),
        ));
    };
    let status = match req.status.as_deref() {
        Some(s) => s.parse::<DetailStatus>()?,
        None => DetailStatus::default(),
    };
    let id = store
        .insert(NewDetail {
            order_id,
            menu_id,
            chef_id: Some(chef_id),
            quantity,
            note: req.note,
            status,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { success: true, id })))
}

async fn change_status(
    State(store): State<OrderDetailStore>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<MutationResponse>, ServiceError> {
    let new_status = req
        .new_status
        .ok_or_else(|| ServiceError::InvalidArgument("missing 'new_status' in payload".into()))?;
    store.update_status(id, &new_status).await?;
    Ok(Json(MutationResponse {
        success: true,
        message: format!("order detail {} status updated", id),
    }))
}

async fn change_quantity(
    State(store): State<OrderDetailStore>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<Json<MutationResponse>, ServiceError> {
    let new_quantity = req
        .new_quantity
        .ok_or_else(|| ServiceError::InvalidArgument("missing 'new_quantity' in payload".into()))?;
    store.update_quantity(id, new_quantity).await?;
    Ok(Json(MutationResponse {
        success: true,
        message: format!("order detail {} quantity updated", id),
    }))
}

async fn change_note(
    State(store): State<OrderDetailStore>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<MutationResponse>, ServiceError> {
    let new_note = req
        .new_note
        .ok_or_else(|| ServiceError::InvalidArgument("missing 'new_note' in payload".into()))?;
    store.update_note(id, new_note).await?;
    Ok(Json(MutationResponse {
        success: true,
        message: format!("order detail {} note updated", id),
    }))
}
