//! Approval workflow controller

use std::collections::HashSet;

use merchdesk_client::ClientError;
use shared::models::{ReportFilter, SalesReport};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::api::ReportsApi;
use crate::cursor::{Direction, ReviewCursor};
use crate::store::ReportListStore;
use crate::view::{Decision, ViewState};

/// Review workflow error
#[derive(Debug, Error)]
pub enum ReviewError {
    /// A decision for this report is already in flight
    #[error("decision already in flight for report {0}")]
    DecisionInFlight(i64),

    /// The underlying API call failed; list and cursor are unchanged
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Result type for review operations
pub type ReviewResult<T> = Result<T, ReviewError>;

/// What happened to the review session after a confirmed decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecideOutcome {
    /// The resolved report left the list and the next one is open
    Advanced,
    /// The resolved report was the last one; the detail view closed
    Closed,
    /// The id was no longer in the list; nothing was sent or changed
    Ignored,
}

#[derive(Debug, Default)]
struct SessionState {
    store: ReportListStore,
    cursor: ReviewCursor,
    in_flight: HashSet<i64>,
    overlay: Option<Decision>,
}

/// Orchestrates the review queue, the open-report cursor, and decisions
///
/// All methods take `&self`; state lives behind one lock so a decision's
/// remove-then-advance is applied atomically. The lock is never held across
/// a network call, so decisions on different reports proceed independently.
pub struct ReviewSession<C> {
    api: C,
    state: RwLock<SessionState>,
}

impl<C: ReportsApi> ReviewSession<C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Load the review queue from upstream.
    ///
    /// On success the previous list is replaced (non-submitted reports are
    /// filtered out) and any open detail view closes, since indexes no
    /// longer line up. On failure the previous list stays untouched and the
    /// error propagates to the caller.
    pub async fn load(&self, filter: &ReportFilter) -> ReviewResult<usize> {
        let reports = self.api.fetch_reports(filter).await?;
        let mut state = self.state.write().await;
        state.store.replace_all(reports);
        state.cursor.close();
        state.overlay = None;
        tracing::debug!(len = state.store.len(), "review queue loaded");
        Ok(state.store.len())
    }

    /// Open the report at `index` for detailed review (clamped when out of
    /// bounds, silent on an empty list).
    pub async fn open(&self, index: usize) {
        let mut state = self.state.write().await;
        let len = state.store.len();
        state.cursor.open(index, len);
        state.overlay = None;
    }

    /// Close the detail view.
    pub async fn close(&self) {
        let mut state = self.state.write().await;
        state.cursor.close();
        state.overlay = None;
    }

    /// Approve or reject one report.
    ///
    /// The status update is confirmed upstream before anything changes
    /// locally; on success the report leaves the list and the cursor
    /// advances or closes. On failure nothing moves and the report stays
    /// re-selectable. At most one decision per report id may be in flight;
    /// ids absent from the list are ignored without a network call (guards
    /// against double-clicks and stale UI).
    pub async fn decide(&self, sales_id: i64, decision: Decision) -> ReviewResult<DecideOutcome> {
        {
            let mut state = self.state.write().await;
            if !state.store.contains(sales_id) {
                tracing::debug!(sales_id, "decide on absent report ignored");
                return Ok(DecideOutcome::Ignored);
            }
            if !state.in_flight.insert(sales_id) {
                return Err(ReviewError::DecisionInFlight(sales_id));
            }
        }

        let result = self.api.update_status(sales_id, decision.status()).await;

        let mut state = self.state.write().await;
        state.in_flight.remove(&sales_id);

        if let Err(err) = result {
            tracing::warn!(sales_id, error = %err, "decision failed, report stays in queue");
            return Err(err.into());
        }

        // Remove first: the cursor's last-index check must see the
        // post-removal length.
        state.store.remove(sales_id);
        let len = state.store.len();
        state.cursor.advance_or_close(len);
        state.overlay = Some(decision);

        tracing::debug!(sales_id, decision = ?decision, remaining = len, "report resolved");
        Ok(if state.cursor.selected().is_some() {
            DecideOutcome::Advanced
        } else {
            DecideOutcome::Closed
        })
    }

    /// Dismiss the decision stamp overlay (after its display timeout).
    pub async fn dismiss_overlay(&self) {
        self.state.write().await.overlay = None;
    }

    /// Current UI state as one tagged variant.
    pub async fn view(&self) -> ViewState {
        let state = self.state.read().await;
        if let Some(decision) = state.overlay {
            return ViewState::Overlay { decision };
        }
        match state.cursor.selected() {
            Some(index) => ViewState::Reviewing { index },
            None => ViewState::Idle,
        }
    }

    /// The report currently open for review, if any.
    pub async fn selected_report(&self) -> Option<SalesReport> {
        let state = self.state.read().await;
        let index = state.cursor.selected()?;
        state.store.at(index).cloned()
    }

    /// Index of the open report and the current slide direction.
    pub async fn cursor(&self) -> (Option<usize>, Direction) {
        let state = self.state.read().await;
        (state.cursor.selected(), state.cursor.direction())
    }

    /// Snapshot of the current review queue.
    pub async fn reports(&self) -> Vec<SalesReport> {
        self.state.read().await.store.reports().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.store.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.store.is_empty()
    }
}
