//! Inventory models

use serde::{Deserialize, Serialize};

/// Per-partner stock summary row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub retail_partner_id: i64,
    pub store_name: String,
    pub total_quantity: i64,
    pub total_value: f64,
}

/// A single product line in a store's detailed inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryProductDetail {
    pub product_id: i64,
    pub product_name: String,
    pub category: String,
    pub quantity: i64,
    pub unit_selling_price: f64,
    /// Derived upstream as `quantity * unit_selling_price`
    pub total_value: f64,
}

/// Detailed inventory for one store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInventory {
    pub retail_partner_id: i64,
    pub store_name: String,
    #[serde(default)]
    pub products: Vec<InventoryProductDetail>,
}
