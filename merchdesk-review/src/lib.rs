//! Merchdesk Review - approval workflow for submitted daily sales reports
//!
//! Holds the in-memory queue of reports pending review, tracks which report
//! is open, and orchestrates approve/reject decisions against the Sales
//! Reporting API. The authoritative record lives upstream; the local list is
//! a read-through cache of the `submitted` status slice.

pub mod api;
pub mod cursor;
pub mod session;
pub mod store;
pub mod view;

pub use api::ReportsApi;
pub use cursor::{Direction, ReviewCursor};
pub use session::{DecideOutcome, ReviewError, ReviewResult, ReviewSession};
pub use store::ReportListStore;
pub use view::{Decision, ViewState};
