use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DetailStatus, PackageStatus, ServiceError};

/// One entry in the list passed to multi-item order creation.
///
/// The required fields are optional at the wire level so that a malformed
/// entry becomes a recorded per-item failure instead of rejecting the
/// whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub id: Option<Uuid>,
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chef_id: Option<Uuid>,
}

/// Outcome recorded for one batch item. Results are kept in input order
/// regardless of success.
#[derive(Debug, Clone, Serialize)]
pub struct ItemOutcome {
    pub success: bool,
    pub item: BatchItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ItemOutcome {
    pub fn succeeded(item: BatchItem, new_id: Uuid) -> Self {
        Self {
            success: true,
            item,
            new_id: Some(new_id),
            error: None,
        }
    }

    pub fn failed(item: BatchItem, error: impl Into<String>) -> Self {
        Self {
            success: false,
            item,
            new_id: None,
            error: Some(error.into()),
        }
    }
}

/// Insert request for one menu-item line.
#[derive(Debug, Clone)]
pub struct NewDetail {
    pub order_id: Uuid,
    pub menu_id: Uuid,
    pub chef_id: Option<Uuid>,
    pub quantity: i32,
    pub note: Option<String>,
    pub status: DetailStatus,
}

/// Insert request for one menu-package line.
#[derive(Debug, Clone)]
pub struct NewPackage {
    pub order_id: Uuid,
    pub menu_package_id: Uuid,
    pub chef_id: Option<Uuid>,
    pub quantity: i32,
    pub note: Option<String>,
    pub status: PackageStatus,
}

/// Contract between the orchestrator and the order-detail store, bound at
/// compile time.
#[async_trait]
pub trait DetailWriter: Send + Sync {
    async fn insert_detail(&self, detail: NewDetail) -> Result<Uuid, ServiceError>;
    async fn delete_details_by_order(&self, order_id: Uuid) -> Result<u64, ServiceError>;
}

/// Contract between the orchestrator and the order-package store, bound at
/// compile time.
#[async_trait]
pub trait PackageWriter: Send + Sync {
    async fn insert_package(&self, package: NewPackage) -> Result<Uuid, ServiceError>;
    async fn delete_packages_by_order(&self, order_id: Uuid) -> Result<u64, ServiceError>;
}

/// Body returned by create endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: Uuid,
}

/// Body returned by single-field update endpoints.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
}
