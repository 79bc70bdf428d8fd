//! Score-to-tier classification.

use super::domain::Decision;

pub(crate) const FULL_APPROVAL_SCORE: i32 = 750;
pub(crate) const LIMITED_APPROVAL_SCORE: i32 = 650;
pub(crate) const MANUAL_REVIEW_SCORE: i32 = 550;

/// Flat threshold lookup; every evaluation is independent and terminal.
pub(crate) fn classify_score(score: i32) -> Decision {
    if score >= FULL_APPROVAL_SCORE {
        Decision::Approved
    } else if score >= LIMITED_APPROVAL_SCORE {
        Decision::ApprovedLimited
    } else if score >= MANUAL_REVIEW_SCORE {
        Decision::ManualReview
    } else {
        Decision::Rejected
    }
}
