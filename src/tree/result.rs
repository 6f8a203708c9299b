use crate::tree::outcome::Outcome;

/// Result attached to a single test leaf during the execution phase.
///
/// Fixture names keep their reported order for display; the order carries
/// no other meaning.
#[derive(Debug, Clone, Builder)]
pub struct TestResult {
    pub outcome: Outcome,
    #[builder(default = "0.0")]
    pub duration: f64,
    #[builder(default = "None")]
    pub docstring: Option<String>,
    #[builder(default = "Vec::new()")]
    pub fixture_names: Vec<String>,
    #[builder(default = "None")]
    pub failure: Option<String>,
}

impl TestResult {
    pub fn builder() -> TestResultBuilder {
        TestResultBuilder::default()
    }

    /// Shorthand for a result that carries nothing but outcome and timing.
    pub fn new(outcome: Outcome, duration: f64) -> Self {
        Self {
            outcome,
            duration,
            docstring: None,
            fixture_names: Vec::new(),
            failure: None,
        }
    }
}
