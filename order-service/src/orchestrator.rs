use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use shared::{
    BatchItem, DetailStatus, DetailWriter, ItemOutcome, NewDetail, NewPackage, OrderType,
    PackageStatus, PackageWriter, ServiceError,
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::{NewOrder, Order, OrderChangeset};

/// Contract between the orchestrator and the order store.
#[async_trait]
pub trait OrderRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Order>, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<Order>, ServiceError>;
    async fn insert(&self, order: NewOrder) -> Result<Uuid, ServiceError>;
    async fn update(&self, id: Uuid, changes: OrderChangeset) -> Result<(), ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// How a multi-item creation batch is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Each insert commits independently. A failed item is recorded in the
    /// results list and the parent order is kept.
    Independent,
    /// The batch is validated up front and any insert failure triggers
    /// compensation: the order's items and the parent row are removed.
    Atomic,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<BatchItem>,
    pub user_id: Uuid,
    pub reservation_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
    pub voucher_id: Option<Uuid>,
    #[serde(default)]
    pub order_type: OrderType,
    #[serde(default = "zero_payment")]
    pub total_payment: BigDecimal,
}

fn zero_payment() -> BigDecimal {
    BigDecimal::from(0)
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order_id: Uuid,
    pub items_processing_results: Vec<ItemOutcome>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteOrderResponse {
    pub success: bool,
    pub message: String,
    pub details_deleted: u64,
    pub packages_deleted: u64,
}

/// Composes the three stores to implement multi-item order creation and
/// cascading deletion. The only component with multi-step logic.
pub struct OrderOrchestrator {
    orders: Arc<dyn OrderRepo>,
    details: Arc<dyn DetailWriter>,
    packages: Arc<dyn PackageWriter>,
    batch_mode: BatchMode,
    op_timeout: Duration,
}

impl OrderOrchestrator {
    pub fn new(
        orders: Arc<dyn OrderRepo>,
        details: Arc<dyn DetailWriter>,
        packages: Arc<dyn PackageWriter>,
        batch_mode: BatchMode,
        op_timeout: Duration,
    ) -> Self {
        Self {
            orders,
            details,
            packages,
            batch_mode,
            op_timeout,
        }
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
        self.with_deadline("listing orders", self.orders.list()).await
    }

    /// Creates the parent order, then processes each item in input order.
    ///
    /// In `Independent` mode the call succeeds as long as the parent order
    /// was created; per-item failures are visible only in the results list.
    /// In `Atomic` mode the first failure compensates everything written so
    /// far and the call fails.
    pub async fn create_order(
        &self,
        req: CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ServiceError> {
        if req.items.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "at least one item is required to create an order".into(),
            ));
        }
        info!("creating order with {} items", req.items.len());

        if self.batch_mode == BatchMode::Atomic {
            for item in &req.items {
                validate_item(item)?;
            }
        }

        let order_id = self
            .with_deadline(
                "inserting order",
                self.orders.insert(NewOrder {
                    user_id: req.user_id,
                    reservation_id: req.reservation_id,
                    event_id: req.event_id,
                    voucher_id: req.voucher_id,
                    order_type: req.order_type,
                    total_payment: req.total_payment,
                }),
            )
            .await?;
        info!("order {} created", order_id);

        let mut results = Vec::with_capacity(req.items.len());
        for item in req.items {
            match self.process_item(order_id, &item).await {
                Ok(new_id) => results.push(ItemOutcome::succeeded(item, new_id)),
                Err(err) if self.batch_mode == BatchMode::Atomic => {
                    error!("order {}: item failed in atomic mode, compensating: {}", order_id, err);
                    self.compensate(order_id).await;
                    return Err(err);
                }
                Err(err) => {
                    warn!("order {}: item processing failed: {}", order_id, err);
                    results.push(ItemOutcome::failed(item, err.to_string()));
                }
            }
        }
        info!("all items processed for order {}", order_id);

        Ok(CreateOrderResponse {
            success: true,
            order_id,
            items_processing_results: results,
            message: "order and all specified items processed".into(),
        })
    }

    /// Deletes the order's details, then its packages, then the parent row.
    /// The three deletions are not atomic; the ordering avoids foreign-key
    /// violations when cascades are absent.
    pub async fn delete_order(&self, order_id: Uuid) -> Result<DeleteOrderResponse, ServiceError> {
        let details_deleted = self
            .with_deadline(
                "deleting order details",
                self.details.delete_details_by_order(order_id),
            )
            .await?;
        let packages_deleted = self
            .with_deadline(
                "deleting order packages",
                self.packages.delete_packages_by_order(order_id),
            )
            .await?;
        let order_deleted = self
            .with_deadline("deleting order", self.orders.delete(order_id))
            .await?;
        let message = if order_deleted {
            format!("order {} deleted", order_id)
        } else {
            format!("order {} was not found", order_id)
        };
        Ok(DeleteOrderResponse {
            success: order_deleted,
            message,
            details_deleted,
            packages_deleted,
        })
    }

    pub async fn update_order(
        &self,
        order_id: Uuid,
        changes: OrderChangeset,
    ) -> Result<(), ServiceError> {
        if let Some(ref order_type) = changes.order_type {
            order_type.parse::<OrderType>()?;
        }
        let existing = self
            .with_deadline("loading order", self.orders.find(order_id))
            .await?;
        if existing.is_none() {
            return Err(ServiceError::NotFound(format!("order {} not found", order_id)));
        }
        self.with_deadline("updating order", self.orders.update(order_id, changes))
            .await
    }

    async fn process_item(&self, order_id: Uuid, item: &BatchItem) -> Result<Uuid, ServiceError> {
        let (item_type, id, quantity) = require_item_fields(item)?;
        match item_type {
            "menu_item" => {
                let status = match item.status.as_deref() {
                    Some(s) => s.parse::<DetailStatus>()?,
                    None => DetailStatus::default(),
                };
                self.with_deadline(
                    "inserting order detail",
                    self.details.insert_detail(NewDetail {
                        order_id,
                        menu_id: id,
                        chef_id: item.chef_id,
                        quantity,
                        note: item.note.clone(),
                        status,
                    }),
                )
                .await
            }
            "menu_package" => {
                let status = match item.status.as_deref() {
                    Some(s) => s.parse::<PackageStatus>()?,
                    None => PackageStatus::default(),
                };
                self.with_deadline(
                    "inserting order package",
                    self.packages.insert_package(NewPackage {
                        order_id,
                        menu_package_id: id,
                        chef_id: item.chef_id,
                        quantity,
                        note: item.note.clone(),
                        status,
                    }),
                )
                .await
            }
            other => Err(ServiceError::UnknownItemType(other.to_string())),
        }
    }

    /// Best-effort removal of everything written for an aborted atomic
    /// batch. Failures are logged; the original error is what the caller
    /// sees.
    async fn compensate(&self, order_id: Uuid) {
        if let Err(err) = self
            .with_deadline(
                "removing order details",
                self.details.delete_details_by_order(order_id),
            )
            .await
        {
            error!("compensation for order {}: detail cleanup failed: {}", order_id, err);
        }
        if let Err(err) = self
            .with_deadline(
                "removing order packages",
                self.packages.delete_packages_by_order(order_id),
            )
            .await
        {
            error!("compensation for order {}: package cleanup failed: {}", order_id, err);
        }
        if let Err(err) = self
            .with_deadline("removing order", self.orders.delete(order_id))
            .await
        {
            error!("compensation for order {}: order cleanup failed: {}", order_id, err);
        }
    }

    async fn with_deadline<T>(
        &self,
        what: &str,
        fut: impl Future<Output = Result<T, ServiceError>> + Send,
    ) -> Result<T, ServiceError> {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::DeadlineExceeded(what.to_string())),
        }
    }
}

fn require_item_fields(item: &BatchItem) -> Result<(&str, Uuid, i32), ServiceError> {
    let (Some(item_type), Some(id), Some(quantity)) =
        (item.item_type.as_deref(), item.id, item.quantity)
    else {
        return Err(ServiceError::InvalidArgument(
            "missing type, id, or quantity for item".into(),
        ));
    };
    if quantity <= 0 {
        return Err(ServiceError::InvalidArgument(
            "item quantity must be a positive integer".into(),
        ));
    }
    Ok((item_type, id, quantity))
}

/// Up-front validation used by atomic batches: field presence, a known
/// type discriminator, and a parseable status.
fn validate_item(item: &BatchItem) -> Result<(), ServiceError> {
    let (item_type, _, _) = require_item_fields(item)?;
    match item_type {
        "menu_item" => {
            if let Some(s) = item.status.as_deref() {
                s.parse::<DetailStatus>()?;
            }
            Ok(())
        }
        "menu_package" => {
            if let Some(s) = item.status.as_deref() {
                s.parse::<PackageStatus>()?;
            }
            Ok(())
        }
        other => Err(ServiceError::UnknownItemType(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockOrders {
        rows: Mutex<Vec<Order>>,
        fail_insert: bool,
    }

    fn order_row(id: Uuid, order: &NewOrder) -> Order {
        Order {
            id,
            user_id: order.user_id,
            reservation_id: order.reservation_id,
            event_id: order.event_id,
            voucher_id: order.voucher_id,
            order_type: order.order_type.to_string(),
            total_payment: order.total_payment.clone(),
            created_at: None,
            updated_at: None,
        }
    }

    #[async_trait]
    impl OrderRepo for MockOrders {
        async fn list(&self) -> Result<Vec<Order>, ServiceError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find(&self, id: Uuid) -> Result<Option<Order>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|o| o.id == id).cloned())
        }

        async fn insert(&self, order: NewOrder) -> Result<Uuid, ServiceError> {
            if self.fail_insert {
                return Err(ServiceError::store("connection reset"));
            }
            let id = Uuid::new_v4();
            self.rows.lock().unwrap().push(order_row(id, &order));
            Ok(id)
        }

        async fn update(&self, id: Uuid, _changes: OrderChangeset) -> Result<(), ServiceError> {
            if self.rows.lock().unwrap().iter().any(|o| o.id == id) {
                Ok(())
            } else {
                Err(ServiceError::NotFound(format!("order {} not found", id)))
            }
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|o| o.id != id);
            Ok(rows.len() < before)
        }
    }

    #[derive(Default)]
    struct MockDetails {
        inserted: Mutex<Vec<NewDetail>>,
        fail: bool,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl DetailWriter for MockDetails {
        async fn insert_detail(&self, detail: NewDetail) -> Result<Uuid, ServiceError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                return Err(ServiceError::store("detail insert failed"));
            }
            self.inserted.lock().unwrap().push(detail);
            Ok(Uuid::new_v4())
        }

        async fn delete_details_by_order(&self, order_id: Uuid) -> Result<u64, ServiceError> {
            let mut rows = self.inserted.lock().unwrap();
            let before = rows.len();
            rows.retain(|d| d.order_id != order_id);
            Ok((before - rows.len()) as u64)
        }
    }

    #[derive(Default)]
    struct MockPackages {
        inserted: Mutex<Vec<NewPackage>>,
        fail: bool,
    }

    #[async_trait]
    impl PackageWriter for MockPackages {
        async fn insert_package(&self, package: NewPackage) -> Result<Uuid, ServiceError> {
            if self.fail {
                return Err(ServiceError::store("package insert failed"));
            }
            self.inserted.lock().unwrap().push(package);
            Ok(Uuid::new_v4())
        }

        async fn delete_packages_by_order(&self, order_id: Uuid) -> Result<u64, ServiceError> {
            let mut rows = self.inserted.lock().unwrap();
            let before = rows.len();
            rows.retain(|p| p.order_id != order_id);
            Ok((before - rows.len()) as u64)
        }
    }

    fn orchestrator(
        orders: Arc<MockOrders>,
        details: Arc<MockDetails>,
        packages: Arc<MockPackages>,
        batch_mode: BatchMode,
    ) -> OrderOrchestrator {
        OrderOrchestrator::new(orders, details, packages, batch_mode, Duration::from_secs(5))
    }

    fn menu_item(id: Uuid, quantity: i32) -> BatchItem {
        BatchItem {
            item_type: Some("menu_item".into()),
            id: Some(id),
            quantity: Some(quantity),
            note: None,
            status: None,
            chef_id: None,
        }
    }

    fn menu_package(id: Uuid, quantity: i32) -> BatchItem {
        BatchItem {
            item_type: Some("menu_package".into()),
            id: Some(id),
            quantity: Some(quantity),
            note: None,
            status: None,
            chef_id: None,
        }
    }

    fn request(items: Vec<BatchItem>) -> CreateOrderRequest {
        CreateOrderRequest {
            items,
            user_id: Uuid::new_v4(),
            reservation_id: None,
            event_id: None,
            voucher_id: None,
            order_type: OrderType::default(),
            total_payment: BigDecimal::from(0),
        }
    }

    #[tokio::test]
    async fn creates_parent_and_routes_items_by_type() {
        let orders = Arc::new(MockOrders::default());
        let details = Arc::new(MockDetails::default());
        let packages = Arc::new(MockPackages::default());
        let orch = orchestrator(
            orders.clone(),
            details.clone(),
            packages.clone(),
            BatchMode::Independent,
        );

        let menu_id = Uuid::new_v4();
        let package_id = Uuid::new_v4();
        let chef_id = Uuid::new_v4();
        let mut first = menu_item(menu_id, 2);
        first.chef_id = Some(chef_id);
        let second = menu_package(package_id, 1);

        let resp = orch.create_order(request(vec![first, second])).await.unwrap();

        assert!(resp.success);
        assert_eq!(resp.items_processing_results.len(), 2);
        assert!(resp.items_processing_results.iter().all(|r| r.success));
        assert_eq!(orders.rows.lock().unwrap().len(), 1);
        assert_eq!(orders.rows.lock().unwrap()[0].id, resp.order_id);

        let inserted_details = details.inserted.lock().unwrap();
        assert_eq!(inserted_details.len(), 1);
        assert_eq!(inserted_details[0].menu_id, menu_id);
        assert_eq!(inserted_details[0].chef_id, Some(chef_id));
        assert_eq!(inserted_details[0].quantity, 2);
        assert_eq!(inserted_details[0].order_id, resp.order_id);

        let inserted_packages = packages.inserted.lock().unwrap();
        assert_eq!(inserted_packages.len(), 1);
        assert_eq!(inserted_packages[0].menu_package_id, package_id);
        assert_eq!(inserted_packages[0].quantity, 1);
    }

    #[tokio::test]
    async fn empty_items_rejected_without_creating_order() {
        let orders = Arc::new(MockOrders::default());
        let orch = orchestrator(
            orders.clone(),
            Arc::new(MockDetails::default()),
            Arc::new(MockPackages::default()),
            BatchMode::Independent,
        );

        let err = orch.create_order(request(vec![])).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        assert!(orders.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_item_fields_recorded_without_aborting_batch() {
        let details = Arc::new(MockDetails::default());
        let orch = orchestrator(
            Arc::new(MockOrders::default()),
            details.clone(),
            Arc::new(MockPackages::default()),
            BatchMode::Independent,
        );

        let mut bad = menu_item(Uuid::new_v4(), 1);
        bad.quantity = None;
        let good = menu_item(Uuid::new_v4(), 3);

        let resp = orch.create_order(request(vec![bad, good])).await.unwrap();
        assert!(resp.success);
        assert_eq!(resp.items_processing_results.len(), 2);
        assert!(!resp.items_processing_results[0].success);
        assert!(resp.items_processing_results[0]
            .error
            .as_deref()
            .unwrap()
            .contains("missing type, id, or quantity"));
        assert!(resp.items_processing_results[1].success);
        assert_eq!(details.inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn non_positive_quantity_is_a_per_item_failure() {
        let orch = orchestrator(
            Arc::new(MockOrders::default()),
            Arc::new(MockDetails::default()),
            Arc::new(MockPackages::default()),
            BatchMode::Independent,
        );

        let resp = orch
            .create_order(request(vec![menu_item(Uuid::new_v4(), 0)]))
            .await
            .unwrap();
        assert!(!resp.items_processing_results[0].success);
    }

    #[tokio::test]
    async fn unknown_item_type_recorded_as_failure() {
        let orch = orchestrator(
            Arc::new(MockOrders::default()),
            Arc::new(MockDetails::default()),
            Arc::new(MockPackages::default()),
            BatchMode::Independent,
        );

        let mut item = menu_item(Uuid::new_v4(), 1);
        item.item_type = Some("beverage".into());

        let resp = orch.create_order(request(vec![item])).await.unwrap();
        assert!(resp.success);
        let outcome = &resp.items_processing_results[0];
        assert!(!outcome.success);
        assert!(outcome.error.as_deref().unwrap().contains("unknown item type"));
    }

    #[tokio::test]
    async fn parent_insert_failure_aborts_whole_call() {
        let orders = Arc::new(MockOrders {
            fail_insert: true,
            ..Default::default()
        });
        let details = Arc::new(MockDetails::default());
        let orch = orchestrator(
            orders,
            details.clone(),
            Arc::new(MockPackages::default()),
            BatchMode::Independent,
        );

        let err = orch
            .create_order(request(vec![menu_item(Uuid::new_v4(), 1)]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Store(_)));
        assert!(details.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_item_insert_does_not_stop_remaining_items() {
        let details = Arc::new(MockDetails {
            fail: true,
            ..Default::default()
        });
        let packages = Arc::new(MockPackages::default());
        let orch = orchestrator(
            Arc::new(MockOrders::default()),
            details,
            packages.clone(),
            BatchMode::Independent,
        );

        let resp = orch
            .create_order(request(vec![
                menu_item(Uuid::new_v4(), 1),
                menu_package(Uuid::new_v4(), 2),
            ]))
            .await
            .unwrap();

        assert!(resp.success);
        assert!(!resp.items_processing_results[0].success);
        assert!(resp.items_processing_results[1].success);
        assert_eq!(packages.inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn results_preserve_input_length_and_order() {
        let orch = orchestrator(
            Arc::new(MockOrders::default()),
            Arc::new(MockDetails::default()),
            Arc::new(MockPackages::default()),
            BatchMode::Independent,
        );

        let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let mut items = vec![
            menu_item(ids[0], 1),
            menu_package(ids[1], 1),
            menu_item(ids[2], 1),
            menu_package(ids[3], 1),
            menu_item(ids[4], 1),
        ];
        items[2].item_type = None; // becomes a failure entry, in place

        let resp = orch.create_order(request(items)).await.unwrap();
        assert_eq!(resp.items_processing_results.len(), 5);
        for (i, outcome) in resp.items_processing_results.iter().enumerate() {
            assert_eq!(outcome.item.id, Some(ids[i]));
        }
        assert!(!resp.items_processing_results[2].success);
    }

    #[tokio::test]
    async fn invalid_item_status_is_a_per_item_failure() {
        let details = Arc::new(MockDetails::default());
        let orch = orchestrator(
            Arc::new(MockOrders::default()),
            details.clone(),
            Arc::new(MockPackages::default()),
            BatchMode::Independent,
        );

        let mut item = menu_item(Uuid::new_v4(), 1);
        item.status = Some("SHIPPED".into());

        let resp = orch.create_order(request(vec![item])).await.unwrap();
        assert!(!resp.items_processing_results[0].success);
        assert!(details.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn atomic_mode_rejects_invalid_batch_before_writing() {
        let orders = Arc::new(MockOrders::default());
        let orch = orchestrator(
            orders.clone(),
            Arc::new(MockDetails::default()),
            Arc::new(MockPackages::default()),
            BatchMode::Atomic,
        );

        let mut bad = menu_item(Uuid::new_v4(), 1);
        bad.quantity = None;

        let err = orch
            .create_order(request(vec![menu_item(Uuid::new_v4(), 1), bad]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        assert!(orders.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn atomic_mode_compensates_on_store_failure() {
        let orders = Arc::new(MockOrders::default());
        let details = Arc::new(MockDetails::default());
        let packages = Arc::new(MockPackages {
            fail: true,
            ..Default::default()
        });
        let orch = orchestrator(orders.clone(), details.clone(), packages, BatchMode::Atomic);

        let err = orch
            .create_order(request(vec![
                menu_item(Uuid::new_v4(), 1),
                menu_package(Uuid::new_v4(), 1),
            ]))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Store(_)));
        assert!(orders.rows.lock().unwrap().is_empty());
        assert!(details.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn downstream_deadline_expiry_is_distinguished() {
        let details = Arc::new(MockDetails {
            delay: Some(Duration::from_millis(100)),
            ..Default::default()
        });
        let orch = OrderOrchestrator::new(
            Arc::new(MockOrders::default()),
            details,
            Arc::new(MockPackages::default()),
            BatchMode::Independent,
            Duration::from_millis(5),
        );

        let resp = orch
            .create_order(request(vec![menu_item(Uuid::new_v4(), 1)]))
            .await
            .unwrap();
        let outcome = &resp.items_processing_results[0];
        assert!(!outcome.success);
        assert!(outcome.error.as_deref().unwrap().contains("deadline exceeded"));
    }

    #[tokio::test]
    async fn delete_order_removes_children_then_parent() {
        let orders = Arc::new(MockOrders::default());
        let details = Arc::new(MockDetails::default());
        let packages = Arc::new(MockPackages::default());
        let orch = orchestrator(
            orders.clone(),
            details.clone(),
            packages.clone(),
            BatchMode::Independent,
        );

        let resp = orch
            .create_order(request(vec![
                menu_item(Uuid::new_v4(), 1),
                menu_package(Uuid::new_v4(), 2),
                menu_package(Uuid::new_v4(), 1),
            ]))
            .await
            .unwrap();

        let deleted = orch.delete_order(resp.order_id).await.unwrap();
        assert!(deleted.success);
        assert_eq!(deleted.details_deleted, 1);
        assert_eq!(deleted.packages_deleted, 2);
        assert!(orders.rows.lock().unwrap().is_empty());
        assert!(details.inserted.lock().unwrap().is_empty());
        assert!(packages.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_order_reports_missing_parent() {
        let orch = orchestrator(
            Arc::new(MockOrders::default()),
            Arc::new(MockDetails::default()),
            Arc::new(MockPackages::default()),
            BatchMode::Independent,
        );

        let resp = orch.delete_order(Uuid::new_v4()).await.unwrap();
        assert!(!resp.success);
        assert_eq!(resp.details_deleted, 0);
        assert_eq!(resp.packages_deleted, 0);
    }

    #[tokio::test]
    async fn update_order_requires_existing_order() {
        let orch = orchestrator(
            Arc::new(MockOrders::default()),
            Arc::new(MockDetails::default()),
            Arc::new(MockPackages::default()),
            BatchMode::Independent,
        );

        let err = orch
            .update_order(
                Uuid::new_v4(),
                OrderChangeset {
                    voucher_id: Some(Uuid::new_v4()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_order_validates_order_type() {
        let orders = Arc::new(MockOrders::default());
        let orch = orchestrator(
            orders.clone(),
            Arc::new(MockDetails::default()),
            Arc::new(MockPackages::default()),
            BatchMode::Independent,
        );

        let resp = orch
            .create_order(request(vec![menu_item(Uuid::new_v4(), 1)]))
            .await
            .unwrap();

        let err = orch
            .update_order(
                resp.order_id,
                OrderChangeset {
                    order_type: Some("BOGUS".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));

        orch.update_order(
            resp.order_id,
            OrderChangeset {
                order_type: Some("TAKEAWAY".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }
}
