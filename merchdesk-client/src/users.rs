//! User endpoints

use crate::{ClientResult, HttpClient};
use shared::auth::UserInfo;

impl HttpClient {
    /// List all users (admins and merchandisers).
    pub async fn list_users(&self) -> ClientResult<Vec<UserInfo>> {
        self.get("/sales/users").await
    }
}
