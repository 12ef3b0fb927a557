use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{pooled_connection::bb8::Pool, AsyncPgConnection, RunQueryDsl};
use shared::ServiceError;
use tracing::info;
use uuid::Uuid;

use crate::models::{NewOrder, NewOrderRow, Order, OrderChangeset};
use crate::orchestrator::OrderRepo;
use crate::schema::orders;

type DbPool = Pool<AsyncPgConnection>;

/// Store over top-level order records.
#[derive(Clone)]
pub struct OrderStore {
    pool: DbPool,
}

impl OrderStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Order>, ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        orders::table
            .load::<Order>(&mut conn)
            .await
            .map_err(ServiceError::store)
    }

    pub async fn find(&self, id: Uuid) -> Result<Option<Order>, ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        orders::table
            .filter(orders::id.eq(id))
            .first::<Order>(&mut conn)
            .await
            .optional()
            .map_err(ServiceError::store)
    }

    pub async fn insert(&self, order: NewOrder) -> Result<Uuid, ServiceError> {
        let row = NewOrderRow {
            id: Uuid::new_v4(),
            user_id: order.user_id,
            reservation_id: order.reservation_id,
            event_id: order.event_id,
            voucher_id: order.voucher_id,
            order_type: order.order_type.to_string(),
            total_payment: order.total_payment,
        };
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        diesel::insert_into(orders::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(ServiceError::store)?;
        info!("order {} added for user {}", row.id, row.user_id);
        Ok(row.id)
    }

    pub async fn update(&self, id: Uuid, changes: OrderChangeset) -> Result<(), ServiceError> {
        if changes.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "no fields to update".into(),
            ));
        }
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        let matched = diesel::update(orders::table.filter(orders::id.eq(id)))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(ServiceError::store)?;
        if matched == 0 {
            return Err(ServiceError::NotFound(format!("order {} not found", id)));
        }
        info!("order {} updated", id);
        Ok(())
    }

    /// Returns whether a row was actually removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        let deleted = diesel::delete(orders::table.filter(orders::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(ServiceError::store)?;
        info!("order {} delete removed {} row(s)", id, deleted);
        Ok(deleted > 0)
    }
}

#[async_trait]
impl OrderRepo for OrderStore {
    async fn list(&self) -> Result<Vec<Order>, ServiceError> {
        self.list_all().await
    }

    async fn find(&self, id: Uuid) -> Result<Option<Order>, ServiceError> {
        OrderStore::find(self, id).await
    }

    async fn insert(&self, order: NewOrder) -> Result<Uuid, ServiceError> {
        OrderStore::insert(self, order).await
    }

    async fn update(&self, id: Uuid, changes: OrderChangeset) -> Result<(), ServiceError> {
        OrderStore::update(self, id, changes).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        OrderStore::delete(self, id).await
    }
}
