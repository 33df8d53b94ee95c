//! Home screen: a pure display of server-computed aggregates.

use crate::interface::GatewayApi;
use crate::model::structs::{DashboardSummary, Student};

/// Hardcoded baseline the collected amount is charted against.
pub const COMPARISON_AMOUNT: i64 = 20_000;

/// The home screen shows at most this many recent enrollments.
pub const RECENT_STUDENT_LIMIT: usize = 5;

pub struct DashboardController {
    pub summary: Option<DashboardSummary>,
}

impl DashboardController {
    pub fn new() -> DashboardController {
        DashboardController { summary: None }
    }

    pub fn loading(&self) -> bool {
        self.summary.is_none()
    }

    /// One request to the combined summary endpoint. A failure leaves the
    /// screen empty and is logged only.
    pub async fn load<G: GatewayApi>(&mut self, gateway: &G) {
        match gateway.home_summary().await {
            Ok(value) => match serde_json::from_value::<DashboardSummary>(value) {
                Ok(summary) => self.summary = Some(summary),
                Err(e) => tracing::error!(error = %e, "malformed dashboard summary"),
            },
            Err(e) => tracing::error!(error = %e, "error fetching dashboard summary"),
        }
    }

    /// Proportion-chart segments: collected, remaining-to-baseline, and the
    /// baseline itself. Remaining goes negative once the target is passed,
    /// as the original chart did.
    pub fn chart_segments(&self) -> [i64; 3] {
        let collected = self
            .summary
            .as_ref()
            .map(|s| s.total_amount)
            .unwrap_or_default();
        [collected, COMPARISON_AMOUNT - collected, COMPARISON_AMOUNT]
    }

    pub fn recent_students(&self) -> &[Student] {
        let students = self
            .summary
            .as_ref()
            .map(|s| s.students.as_slice())
            .unwrap_or_default();
        &students[..students.len().min(RECENT_STUDENT_LIMIT)]
    }

    /// (total students, total courses)
    pub fn totals(&self) -> (i64, i64) {
        self.summary
            .as_ref()
            .map(|s| (s.total_student, s.total_course))
            .unwrap_or_default()
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}
