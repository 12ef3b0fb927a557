use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{pooled_connection::bb8::Pool, AsyncPgConnection, RunQueryDsl};
use shared::{
    ensure_positive_quantity, ensure_row_matched, DetailStatus, DetailWriter, NewDetail,
    ServiceError,
};
use tracing::info;
use uuid::Uuid;

use crate::models::{NewOrderDetailRow, OrderDetail};
use crate::schema::order_details;

type DbPool = Pool<AsyncPgConnection>;

/// Store over individual menu-item order lines. Every operation acquires a
/// pooled connection for its duration and releases it on all exit paths.
#[derive(Clone)]
pub struct OrderDetailStore {
    pool: DbPool,
}

impl OrderDetailStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<OrderDetail>, ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        order_details::table
            .load::<OrderDetail>(&mut conn)
            .await
            .map_err(ServiceError::store)
    }

    /// Only the first detail recorded for the order is returned.
    pub async fn find_by_order(&self, order_id: Uuid) -> Result<Option<OrderDetail>, ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        order_details::table
            .filter(order_details::order_id.eq(order_id))
            .first::<OrderDetail>(&mut conn)
            .await
            .optional()
            .map_err(ServiceError::store)
    }

    /// Only the first detail assigned to the chef is returned.
    pub async fn find_by_chef(&self, chef_id: Uuid) -> Result<Option<OrderDetail>, ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        order_details::table
            .filter(order_details::chef_id.eq(chef_id))
            .first::<OrderDetail>(&mut conn)
            .await
            .optional()
            .map_err(ServiceError::store)
    }

    pub async fn insert(&self, detail: NewDetail) -> Result<Uuid, ServiceError> {
        ensure_positive_quantity(detail.quantity)?;
        let row = NewOrderDetailRow {
            id: Uuid::new_v4(),
            order_id: detail.order_id,
            menu_id: detail.menu_id,
            chef_id: detail.chef_id,
            quantity: detail.quantity,
            note: detail.note,
            status: detail.status.to_string(),
        };
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        diesel::insert_into(order_details::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(ServiceError::store)?;
        info!("order detail {} added for order {}", row.id, row.order_id);
        Ok(row.id)
    }

    pub async fn update_status(&self, id: Uuid, new_status: &str) -> Result<(), ServiceError> {
        let status: DetailStatus = new_status.parse()?;
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        let matched = diesel::update(order_details::table.filter(order_details::id.eq(id)))
            .set(order_details::status.eq(status.to_string()))
            .execute(&mut conn)
            .await
            .map_err(ServiceError::store)?;
        ensure_row_matched(matched, format!("order detail {}", id))?;
        info!("order detail {} status updated to {}", id, status);
        Ok(())
    }

    pub async fn update_quantity(&self, id: Uuid, new_quantity: i32) -> Result<(), ServiceError> {
        ensure_positive_quantity(new_quantity)?;
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        let matched = diesel::update(order_details::table.filter(order_details::id.eq(id)))
            .set(order_details::quantity.eq(new_quantity))
            .execute(&mut conn)
            .await
            .map_err(ServiceError::store)?;
        ensure_row_matched(matched, format!("order detail {}", id))?;
        info!("order detail {} quantity updated to {}", id, new_quantity);
        Ok(())
    }

    pub async fn update_note(&self, id: Uuid, new_note: String) -> Result<(), ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        let matched = diesel::update(order_details::table.filter(order_details::id.eq(id)))
            .set(order_details::note.eq(new_note))
            .execute(&mut conn)
            .await
            .map_err(ServiceError::store)?;
        ensure_row_matched(matched, format!("order detail {}", id))?;
        info!("order detail {} note updated", id);
        Ok(())
    }

    pub async fn delete_by_order(&self, order_id: Uuid) -> Result<u64, ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        let deleted =
            diesel::delete(order_details::table.filter(order_details::order_id.eq(order_id)))
                .execute(&mut conn)
                .await
                .map_err(ServiceError::store)?;
        info!("{} order details deleted for order {}", deleted, order_id);
        Ok(deleted as u64)
    }
}

#[async_trait]
impl DetailWriter for OrderDetailStore {
    async fn insert_detail(&self, detail: NewDetail) -> Result<Uuid, ServiceError> {
        self.insert(detail).await
    }

    async fn delete_details_by_order(&self, order_id: Uuid) -> Result<u64, ServiceError> {
        self.delete_by_order(order_id).await
    }
}
