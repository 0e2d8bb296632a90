mod orquestrator;
mod tracing;

pub use orquestrator::ServicesOrquestrator;
pub use self::tracing::init_tracing;
