//! Retail partner endpoints

use crate::{ClientResult, HttpClient};
use shared::models::{RetailPartner, RetailPartnerCreate};

impl HttpClient {
    /// List all retail partners with their merchandisers.
    pub async fn list_retail_partners(&self) -> ClientResult<Vec<RetailPartner>> {
        self.get("/sales/retail-partners").await
    }

    /// Fetch a single retail partner by id.
    pub async fn get_retail_partner(&self, id: i64) -> ClientResult<RetailPartner> {
        self.get(&format!("/sales/retail-partners/{}", id)).await
    }

    /// Create a new retail partner.
    pub async fn create_retail_partner(
        &self,
        partner: &RetailPartnerCreate,
    ) -> ClientResult<RetailPartner> {
        self.post("/sales/retail-partners", partner).await
    }
}
