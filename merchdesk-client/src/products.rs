//! Product endpoints

use crate::{ClientResult, HttpClient};
use shared::models::Product;

impl HttpClient {
    /// List the product catalog.
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get("/sales/products").await
    }

    /// Fetch a single product by id.
    pub async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.get(&format!("/sales/products/{}", id)).await
    }
}
