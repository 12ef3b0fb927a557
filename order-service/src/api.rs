use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, put};
use axum::Router;
use shared::{MutationResponse, ServiceError};
use uuid::Uuid;

use crate::models::{Order, OrderChangeset};
use crate::orchestrator::{
    CreateOrderRequest, CreateOrderResponse, DeleteOrderResponse, OrderOrchestrator,
};

pub fn router(orchestrator: Arc<OrderOrchestrator>) -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", put(update_order).delete(delete_order))
        .with_state(orchestrator)
}

async fn list_orders(
    State(orch): State<Arc<OrderOrchestrator>>,
) -> Result<Json<Vec<Order>>, ServiceError> {
    Ok(Json(orch.list_orders().await?))
}

async fn create_order(
    State(orch): State<Arc<OrderOrchestrator>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), ServiceError> {
    let resp = orch.create_order(req).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

async fn update_order(
    State(orch): State<Arc<OrderOrchestrator>>,
    Path(id): Path<Uuid>,
    Json(changes): Json<OrderChangeset>,
) -> Result<Json<MutationResponse>, ServiceError> {
    orch.update_order(id, changes).await?;
    Ok(Json(MutationResponse {
        success: true,
        message: format!("order {} updated", id),
    }))
}

async fn delete_order(
    State(orch): State<Arc<OrderOrchestrator>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteOrderResponse>, ServiceError> {
    Ok(Json(orch.delete_order(id).await?))
}
