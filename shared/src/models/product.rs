//! Product model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Cost price (what the company paid)
    pub unit_cost_price: f64,
    /// Recommended selling price
    pub unit_price: f64,
}
