use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single bundled menu-package line within an order.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::order_packages)]
pub struct OrderPackage {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_package_id: Uuid,
    pub chef_id: Option<Uuid>,
    pub quantity: i32,
    pub note: Option<String>,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::order_packages)]
pub struct NewOrderPackageRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_package_id: Uuid,
    pub chef_id: Option<Uuid>,
    pub quantity: i32,
    pub note: Option<String>,
    pub status: String,
}
