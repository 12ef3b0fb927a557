use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single menu-item line within an order.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::order_details)]
pub struct OrderDetail {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_id: Uuid,
    pub chef_id: Option<Uuid>,
    pub quantity: i32,
    pub note: Option<String>,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::order_details)]
pub struct NewOrderDetailRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_id: Uuid,
    pub chef_id: Option<Uuid>,
    pub quantity: i32,
    pub note: Option<String>,
    pub status: String,
}
