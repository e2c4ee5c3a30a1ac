//! API data models
//!
//! Wire shapes match the Sales Reporting API (camelCase JSON). Legacy field
//! spellings that older payload revisions used (`Salesid`) are absorbed with
//! serde aliases at this boundary so nothing downstream has to care.

mod inventory;
mod product;
mod report;
mod retail_partner;

pub use inventory::{InventoryProductDetail, InventorySummary, StoreInventory};
pub use product::Product;
pub use report::{
    ReportFilter, ReportStatus, ReportStatusUpdate, SalesLineItem, SalesLineItemCreate,
    SalesReport, SalesReportCreate,
};
pub use retail_partner::{MerchandiserName, RetailPartner, RetailPartnerCreate};
