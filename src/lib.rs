pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::contact_service::ContactService;
pub use infra::Config;
pub use storage::{ContactRepository, SqliteContactStore};
