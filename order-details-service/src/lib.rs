mod api;
mod models;
mod schema;
mod store;

pub use api::router;
pub use models::OrderDetail;
pub use store::OrderDetailStore;
