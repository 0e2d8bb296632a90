mod responses;
mod router;
mod services;
mod tests;

pub use responses::{AppPath, AppQuery, AppResult, Message};
pub use router::{get_router, AppRouter};
pub use services::{shutdown_signal, Service, ServiceExt};
pub use tests::StubService;
