//! Offline commentator: grades a discard with a fixed rubric.
//!
//! Stands in for the external service in the simulator and in tests.

use super::{Commentator, CommentaryError, DiscardReport, SLOW_RESPONSE};

/// Rule-of-thumb grading, most serious fault first.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalCoach;

impl LocalCoach {
    /// Letter grade and one-line verdict.
    #[must_use]
    pub fn grade(report: &DiscardReport) -> (char, &'static str) {
        if report.broke_gap_candidate {
            ('F', "broke a 4/6 gap that was waiting on the 5")
        } else if report.copies_held >= 3 {
            ('C', "split a set of three")
        } else if report.copies_held == 2 {
            ('B', "split a pair")
        } else if report.gap_five_after {
            ('S', "isolated discard, gap kept")
        } else {
            ('A', "isolated discard")
        }
    }
}

impl Commentator for LocalCoach {
    fn comment(&self, report: &DiscardReport) -> Result<String, CommentaryError> {
        let (grade, verdict) = Self::grade(report);
        let mut text = format!("[Grade: {}] Threw {}: {}.", grade, report.discarded, verdict);
        if report.latency() > SLOW_RESPONSE {
            text.push_str(" Too slow.");
        }
        Ok(text)
    }
}
