//! In-memory store for the reviewable report list

use shared::models::{ReportStatus, SalesReport};

/// Ordered list of reports currently pending review
///
/// Only `submitted` reports are admitted; server-provided order is
/// preserved. Entries leave the list when a decision is confirmed upstream.
#[derive(Debug, Clone, Default)]
pub struct ReportListStore {
    reports: Vec<SalesReport>,
}

impl ReportListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a fresh load.
    ///
    /// Reports whose status is not `submitted` are dropped here, so the
    /// invariant holds even if the server returns a wider slice.
    pub fn replace_all(&mut self, reports: Vec<SalesReport>) {
        let total = reports.len();
        self.reports = reports
            .into_iter()
            .filter(|r| r.status == ReportStatus::Submitted)
            .collect();
        let dropped = total - self.reports.len();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped non-submitted reports from review list");
        }
    }

    /// Remove the report with the given id.
    ///
    /// Returns whether anything was removed; removing an absent id is a
    /// no-op, not an error.
    pub fn remove(&mut self, sales_id: i64) -> bool {
        match self.index_of(sales_id) {
            Some(index) => {
                self.reports.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn index_of(&self, sales_id: i64) -> Option<usize> {
        self.reports.iter().position(|r| r.sales_id == sales_id)
    }

    pub fn contains(&self, sales_id: i64) -> bool {
        self.index_of(sales_id).is_some()
    }

    pub fn at(&self, index: usize) -> Option<&SalesReport> {
        self.reports.get(index)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn reports(&self) -> &[SalesReport] {
        &self.reports
    }
}
