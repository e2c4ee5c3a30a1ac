//! Session view state

use serde::{Deserialize, Serialize};
use shared::models::ReportStatus;

/// An admin's decision on a submitted report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    /// The status a decided report transitions to.
    pub fn status(self) -> ReportStatus {
        match self {
            Decision::Approved => ReportStatus::Approved,
            Decision::Rejected => ReportStatus::Rejected,
        }
    }
}

/// Mutually exclusive UI states of the review session
///
/// One tagged variant instead of a pile of independent "show X" flags:
/// either nothing is open, a report is open for review, or a decision stamp
/// overlay is showing on top of whatever the cursor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ViewState {
    Idle,
    Reviewing { index: usize },
    Overlay { decision: Decision },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_maps_to_terminal_status() {
        assert_eq!(Decision::Approved.status(), ReportStatus::Approved);
        assert_eq!(Decision::Rejected.status(), ReportStatus::Rejected);
    }

    #[test]
    fn view_state_serializes_tagged() {
        let json = serde_json::to_value(ViewState::Reviewing { index: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "reviewing", "index": 2 }));

        let json = serde_json::to_value(ViewState::Overlay {
            decision: Decision::Approved,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "state": "overlay", "decision": "approved" })
        );
    }
}
