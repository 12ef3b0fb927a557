use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use shared::OrderType;
use uuid::Uuid;

/// A top-level customer purchase record.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reservation_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
    pub voucher_id: Option<Uuid>,
    pub order_type: String,
    pub total_payment: BigDecimal,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields for a new order, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Uuid,
    pub reservation_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
    pub voucher_id: Option<Uuid>,
    pub order_type: OrderType,
    pub total_payment: BigDecimal,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrderRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reservation_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
    pub voucher_id: Option<Uuid>,
    pub order_type: String,
    pub total_payment: BigDecimal,
}

/// Partial update for an order. Absent fields are left untouched.
#[derive(Debug, Clone, Default, AsChangeset, Deserialize)]
#[diesel(table_name = crate::schema::orders)]
pub struct OrderChangeset {
    pub user_id: Option<Uuid>,
    pub reservation_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
    pub voucher_id: Option<Uuid>,
    pub order_type: Option<String>,
    pub total_payment: Option<BigDecimal>,
}

impl OrderChangeset {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.reservation_id.is_none()
            && self.event_id.is_none()
            && self.voucher_id.is_none()
            && self.order_type.is_none()
            && self.total_payment.is_none()
    }
}
