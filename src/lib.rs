//! Personal finance tracking: a persisted transaction store, a static category
//! registry and the monthly aggregations a dashboard is built from.

pub mod engine;
pub mod models;
pub mod storage;
pub mod store;
pub mod types;
