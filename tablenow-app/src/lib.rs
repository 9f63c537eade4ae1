//! TableNow application core
//!
//! Client-side restaurant discovery and table-reservation engine:
//! a slot-persisted reservation store, a deterministic availability
//! generator, and a pure filter/sort/paginate engine over the catalog.

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod context;
pub mod paths;
pub mod storage;
pub mod store;

// Re-exports
pub use catalog::{Catalog, FilterCriteria, PaginatedResponse, SortBy};
pub use config::AppConfig;
pub use context::AppContext;
pub use store::AppStore;
