use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{pooled_connection::bb8::Pool, AsyncPgConnection, RunQueryDsl};
use shared::{
    ensure_positive_quantity, ensure_row_matched, NewPackage, PackageStatus, PackageWriter,
    ServiceError,
};
use tracing::info;
use uuid::Uuid;

use crate::models::{NewOrderPackageRow, OrderPackage};
use crate::schema::order_packages;

type DbPool = Pool<AsyncPgConnection>;

/// Store over bundled menu-package order lines. Every operation acquires a
/// pooled connection for its duration and releases it on all exit paths.
#[derive(Clone)]
pub struct OrderPackageStore {
    pool: DbPool,
}

impl OrderPackageStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<OrderPackage>, ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        order_packages::table
            .load::<OrderPackage>(&mut conn)
            .await
            .map_err(ServiceError::store)
    }

    /// Only the first package recorded for the order is returned.
    pub async fn find_by_order(&self, order_id: Uuid) -> Result<Option<OrderPackage>, ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        order_packages::table
            .filter(order_packages::order_id.eq(order_id))
            .first::<OrderPackage>(&mut conn)
            .await
            .optional()
            .map_err(ServiceError::store)
    }

    /// Only the first package assigned to the chef is returned.
    pub async fn find_by_chef(&self, chef_id: Uuid) -> Result<Option<OrderPackage>, ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        order_packages::table
            .filter(order_packages::chef_id.eq(chef_id))
            .first::<OrderPackage>(&mut conn)
            .await
            .optional()
            .map_err(ServiceError::store)
    }

    pub async fn insert(&self, package: NewPackage) -> Result<Uuid, ServiceError> {
        ensure_positive_quantity(package.quantity)?;
        let row = NewOrderPackageRow {
            id: Uuid::new_v4(),
            order_id: package.order_id,
            menu_package_id: package.menu_package_id,
            chef_id: package.chef_id,
            quantity: package.quantity,
            note: package.note,
            status: package.status.to_string(),
        };
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        diesel::insert_into(order_packages::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(ServiceError::store)?;
        info!("order package {} added for order {}", row.id, row.order_id);
        Ok(row.id)
    }

    pub async fn update_status(&self, id: Uuid, new_status: &str) -> Result<(), ServiceError> {
        let status: PackageStatus = new_status.parse()?;
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        let matched = diesel::update(order_packages::table.filter(order_packages::id.eq(id)))
            .set(order_packages::status.eq(status.to_string()))
            .execute(&mut conn)
            .await
            .map_err(ServiceError::store)?;
        ensure_row_matched(matched, format!("order package {}", id))?;
        info!("order package {} status updated to {}", id, status);
        Ok(())
    }

    pub async fn update_quantity(&self, id: Uuid, new_quantity: i32) -> Result<(), ServiceError> {
        ensure_positive_quantity(new_quantity)?;
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        let matched = diesel::update(order_packages::table.filter(order_packages::id.eq(id)))
            .set(order_packages::quantity.eq(new_quantity))
            .execute(&mut conn)
            .await
            .map_err(ServiceError::store)?;
        ensure_row_matched(matched, format!("order package {}", id))?;
        info!("order package {} quantity updated to {}", id, new_quantity);
        Ok(())
    }

    pub async fn update_note(&self, id: Uuid, new_note: String) -> Result<(), ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        let matched = diesel::update(order_packages::table.filter(order_packages::id.eq(id)))
            .set(order_packages::note.eq(new_note))
            .execute(&mut conn)
            .await
            .map_err(ServiceError::store)?;
        ensure_row_matched(matched, format!("order package {}", id))?;
        info!("order package {} note updated", id);
        Ok(())
    }

    pub async fn delete_by_order(&self, order_id: Uuid) -> Result<u64, ServiceError> {
        let mut conn = self.pool.get().await.map_err(ServiceError::store)?;
        let deleted =
            diesel::delete(order_packages::table.filter(order_packages::order_id.eq(order_id)))
                .execute(&mut conn)
                .await
                .map_err(ServiceError::store)?;
        info!("{} order packages deleted for order {}", deleted, order_id);
        Ok(deleted as u64)
    }
}

#[async_trait]
impl PackageWriter for OrderPackageStore {
    async fn insert_package(&self, package: NewPackage) -> Result<Uuid, ServiceError> {
        self.insert(package).await
    }

    async fn delete_packages_by_order(&self, order_id: Uuid) -> Result<u64, ServiceError> {
        self.delete_by_order(order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mirrors the detail store: note updates report their matched-row
    // count through the same mapping as status and quantity.
    #[test]
    fn note_update_match_count_decides_not_found() {
        let id = Uuid::new_v4();
        assert!(ensure_row_matched(1, format!("order package {}", id)).is_ok());

        let err = ensure_row_matched(0, format!("order package {}", id)).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn quantity_updates_reject_non_positive_values_before_any_statement() {
        assert!(matches!(
            ensure_positive_quantity(0),
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(ensure_positive_quantity(2).is_ok());
    }

    #[test]
    fn repeating_a_valid_status_update_succeeds_each_time() {
        let first: PackageStatus = "PACKED".parse().unwrap();
        let second: PackageStatus = "PACKED".parse().unwrap();
        assert_eq!(first.to_string(), second.to_string());

        let id = Uuid::new_v4();
        for _ in 0..2 {
            assert!(ensure_row_matched(1, format!("order package {}", id)).is_ok());
        }
    }
}
