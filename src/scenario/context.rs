use crate::scenario::scenario_model::ExpectationResult;

/// Execution state of a running scenario.
#[derive(Debug, Clone, Default)]
pub struct ScenarioContext {
    pub current_step: usize,

    pub expectation_results: Vec<ExpectationResult>,

    /// Trace step counter, one per emitted event
    pub trace_seq: u64,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, results: Vec<ExpectationResult>) {
        self.expectation_results.extend(results);
    }

    pub fn next_seq(&mut self) -> u64 {
        self.trace_seq += 1;
        self.trace_seq
    }

    pub fn all_passed(&self) -> bool {
        self.expectation_results.iter().all(|r| r.passed)
    }
}
