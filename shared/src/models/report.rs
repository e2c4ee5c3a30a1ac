//! Daily sales report model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a daily sales report.
///
/// Only `Submitted` reports are eligible for admin review. The transition to
/// `Approved`/`Rejected` happens upstream via the PATCH endpoint; this enum
/// never changes locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Submitted,
    Pending,
    Approved,
    Rejected,
}

impl ReportStatus {
    /// Wire representation, as used in query strings and PATCH bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Submitted => "submitted",
            ReportStatus::Pending => "pending",
            ReportStatus::Approved => "approved",
            ReportStatus::Rejected => "rejected",
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, ReportStatus::Submitted)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single product line within a sales report
///
/// `final_price` is derived upstream as
/// `sales_price * quantity_sold * (1 - discount_percent / 100)` and is
/// trusted as-is; the review core never recomputes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesLineItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity_sold: i64,
    pub sales_price: f64,
    pub discount_percent: f64,
    pub final_price: f64,
}

/// A merchandiser's daily sales report
///
/// The aggregate fields (`total_quantity`, `total_sales`, `final_value`) are
/// redundant sums over `data`, computed upstream. They are carried for
/// display and never corrected locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    /// Stable key for the review session. Older payload revisions spelled
    /// this `Salesid`.
    #[serde(alias = "Salesid")]
    pub sales_id: i64,
    pub merchandiser_id: i64,
    pub merchandiser_name: String,
    pub retail_partner_id: i64,
    pub report_date: NaiveDate,
    pub status: ReportStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Ordered line items, server order preserved
    #[serde(default)]
    pub data: Vec<SalesLineItem>,
    pub total_quantity: i64,
    pub total_sales: f64,
    pub final_value: f64,
}

/// Filter for the report list endpoint
///
/// Serialized into query-string pairs (the API uses snake_case query
/// parameter names).
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub status: Option<ReportStatus>,
    pub retail_partner_id: Option<i64>,
    pub merchandiser_id: Option<i64>,
    pub report_date: Option<NaiveDate>,
}

impl ReportFilter {
    /// Filter for the reviewable slice: status = submitted.
    pub fn submitted() -> Self {
        Self {
            status: Some(ReportStatus::Submitted),
            ..Self::default()
        }
    }

    /// Restrict to a single retail partner.
    pub fn with_retail_partner(mut self, id: i64) -> Self {
        self.retail_partner_id = Some(id);
        self
    }

    /// Restrict to a single merchandiser.
    pub fn with_merchandiser(mut self, id: i64) -> Self {
        self.merchandiser_id = Some(id);
        self
    }

    /// Restrict to a single report date.
    pub fn with_report_date(mut self, date: NaiveDate) -> Self {
        self.report_date = Some(date);
        self
    }

    /// Query-string pairs for the list endpoint.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(id) = self.retail_partner_id {
            pairs.push(("retail_partner_id", id.to_string()));
        }
        if let Some(id) = self.merchandiser_id {
            pairs.push(("merchandiser_id", id.to_string()));
        }
        if let Some(date) = self.report_date {
            pairs.push(("report_date", date.to_string()));
        }
        pairs
    }
}

/// PATCH body for a status decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStatusUpdate {
    pub status: ReportStatus,
}

/// Line item within a new report submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesLineItemCreate {
    pub product_id: i64,
    pub quantity_sold: i64,
    pub sales_price: f64,
    pub discount_percent: f64,
}

/// Create daily sales report payload (merchandiser side)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportCreate {
    pub merchandiser_id: i64,
    pub retail_partner_id: i64,
    pub report_date: NaiveDate,
    pub data: Vec<SalesLineItemCreate>,
    pub status: ReportStatus,
    #[serde(default)]
    pub notes: Option<String>,
}
