pub mod api;
pub mod config;
pub mod datagen;
pub mod error;
pub mod model;
pub mod query;

pub use api::{fetch_customer_roster, fetch_dashboard_snapshot, DashboardSnapshot, FetchOptions};
pub use error::{DashboardError, Result};
