//! Retail partner model

use serde::{Deserialize, Serialize};

/// A merchandiser's name, embedded in partner responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchandiserName {
    pub id: i64,
    pub name: String,
}

/// A store location associated with one or more merchandisers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailPartner {
    pub id: i64,
    /// Store name (the API exposes the partner's `name` under `store`)
    pub store: String,
    pub location: String,
    #[serde(default)]
    pub merchandisers: Vec<MerchandiserName>,
}

/// Create retail partner payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailPartnerCreate {
    pub name: String,
    pub location: String,
}
