//! Merchdesk Client - HTTP client for the Sales Reporting API
//!
//! Provides bearer-token authenticated calls to the Sales Reporting API:
//! daily sales reports, retail partners, inventory, and products.

pub mod config;
pub mod error;
pub mod http;

mod inventory;
mod partners;
mod products;
mod reports;
mod users;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::auth::{TokenResponse, UserInfo};
pub use shared::models::{ReportFilter, ReportStatus, SalesReport};
