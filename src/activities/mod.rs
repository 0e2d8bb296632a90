mod models;
mod routes;
mod store;

pub use models::{Activity, Catalog};
pub use routes::{routes, EmailQuery, Health};
pub use store::ActivityStore;
