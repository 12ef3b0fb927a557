mod api;
mod models;
mod schema;
mod store;

pub use api::router;
pub use models::OrderPackage;
pub use store::OrderPackageStore;
