//! Data-client seam for the review workflow

use async_trait::async_trait;
use merchdesk_client::{ClientResult, HttpClient};
use shared::models::{ReportFilter, ReportStatus, SalesReport};

/// The slice of the Sales Reporting API the review workflow consumes
///
/// Kept as a trait so the session can run against the real [`HttpClient`]
/// or an in-memory double in tests.
#[async_trait]
pub trait ReportsApi: Send + Sync {
    /// Fetch reports matching the filter, server order preserved.
    async fn fetch_reports(&self, filter: &ReportFilter) -> ClientResult<Vec<SalesReport>>;

    /// Transition one report's status upstream. 2xx = success.
    async fn update_status(&self, sales_id: i64, status: ReportStatus) -> ClientResult<()>;
}

#[async_trait]
impl ReportsApi for HttpClient {
    async fn fetch_reports(&self, filter: &ReportFilter) -> ClientResult<Vec<SalesReport>> {
        self.list_daily_sales_reports(filter).await
    }

    async fn update_status(&self, sales_id: i64, status: ReportStatus) -> ClientResult<()> {
        self.set_report_status(sales_id, status).await
    }
}
