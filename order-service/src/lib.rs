mod api;
mod models;
mod orchestrator;
mod schema;
mod store;

pub use api::router;
pub use models::{NewOrder, Order, OrderChangeset};
pub use orchestrator::{
    BatchMode, CreateOrderRequest, CreateOrderResponse, DeleteOrderResponse, OrderOrchestrator,
    OrderRepo,
};
pub use store::OrderStore;
