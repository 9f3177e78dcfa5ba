use serde::{Deserialize, Serialize};

use crate::scenario::scenario_model::ScenarioResult;

// ============================================================================
// Suite report — aggregates multiple ScenarioResult instances
// ============================================================================

/// Aggregated report for a batch of scenario runs, consumed by the console
/// and JUnit reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite_name: String,

    pub total: usize,

    pub passed: usize,

    pub failed: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,

    pub scenario_results: Vec<ScenarioResult>,
}

impl SuiteReport {
    /// Build a suite report, computing the pass/fail counts.
    pub fn from_results(suite_name: &str, results: Vec<ScenarioResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            suite_name: suite_name.to_string(),
            total,
            passed,
            failed,
            duration_ms: None,
            scenario_results: results,
        }
    }

    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
