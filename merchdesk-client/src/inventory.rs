//! Inventory endpoints

use crate::{ClientResult, HttpClient};
use shared::models::{InventorySummary, StoreInventory};

impl HttpClient {
    /// Per-partner stock summary (total quantity and value per store).
    pub async fn inventory_summary(&self) -> ClientResult<Vec<InventorySummary>> {
        self.get("/sales/inventory/summary").await
    }

    /// Detailed inventory for one store.
    ///
    /// The API shapes this as a one-element array grouped by store.
    pub async fn store_inventory(&self, retail_partner_id: i64) -> ClientResult<Vec<StoreInventory>> {
        self.get(&format!("/sales/inventory/{}", retail_partner_id))
            .await
    }
}
