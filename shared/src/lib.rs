//! Shared types for Merchdesk
//!
//! Common types used across the client and review crates: API data models,
//! request/response DTOs, and auth types.

pub mod auth;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use auth::{TokenResponse, UserInfo, UserRole};
pub use models::{
    InventoryProductDetail, InventorySummary, MerchandiserName, Product, ReportFilter,
    ReportStatus, ReportStatusUpdate, RetailPartner, RetailPartnerCreate, SalesLineItem,
    SalesLineItemCreate, SalesReport, SalesReportCreate, StoreInventory,
};
