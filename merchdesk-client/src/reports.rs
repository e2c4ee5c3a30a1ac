//! Daily sales report endpoints

use crate::{ClientResult, HttpClient};
use shared::models::{ReportFilter, ReportStatus, ReportStatusUpdate, SalesReport, SalesReportCreate};

impl HttpClient {
    /// List daily sales reports matching the filter.
    ///
    /// Server order is preserved; the API returns a plain JSON array.
    pub async fn list_daily_sales_reports(
        &self,
        filter: &ReportFilter,
    ) -> ClientResult<Vec<SalesReport>> {
        let reports: Vec<SalesReport> = self
            .get_with_query("/sales/daily-sales-reports", &filter.to_query_pairs())
            .await?;
        tracing::debug!(count = reports.len(), "fetched daily sales reports");
        Ok(reports)
    }

    /// Transition a report to `approved` or `rejected`.
    ///
    /// Any 2xx counts as success; the response body is ignored. Non-2xx
    /// surfaces as a [`crate::ClientError`] carrying the server detail.
    pub async fn set_report_status(
        &self,
        sales_id: i64,
        status: ReportStatus,
    ) -> ClientResult<()> {
        let body = ReportStatusUpdate { status };
        self.patch(&format!("/sales/daily-sales-reports/{}", sales_id), &body)
            .await
    }

    /// Submit a new daily sales report (merchandiser side).
    pub async fn create_daily_sales_report(
        &self,
        report: &SalesReportCreate,
    ) -> ClientResult<SalesReport> {
        self.post("/sales/daily-sales-reports", report).await
    }
}
