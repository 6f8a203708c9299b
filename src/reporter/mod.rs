pub mod error;
pub mod html;
pub mod terminal;

use crate::configuration::constants::report::DEFAULT_SLOW_THRESHOLD;
use crate::tree::Outcome;
use colored::Color;

/// Display configuration shared by the renderers, filled from the command
/// line by the caller.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Tests slower than this many seconds get a slow marker.
    pub slow_threshold: f64,
    /// Show docstrings and fixture names on every line.
    pub expand_all: bool,
    /// Hide fixture names even in expanded output.
    pub no_fixtures: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            slow_threshold: DEFAULT_SLOW_THRESHOLD,
            expand_all: false,
            no_fixtures: false,
        }
    }
}

/// Glyph for an outcome. Total: every outcome renders as something.
pub fn outcome_symbol(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Passed => "\u{2713}",
        Outcome::Failed => "\u{2717}",
        Outcome::Skipped => "\u{25cb}",
        Outcome::Xfailed => "\u{2298}",
        Outcome::Xpassed => "\u{2717}!",
        Outcome::Error => "\u{2620}",
        Outcome::Pending => "?",
    }
}

pub(crate) fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Passed => Color::Green,
        Outcome::Failed | Outcome::Xpassed | Outcome::Error => Color::Red,
        Outcome::Skipped | Outcome::Xfailed => Color::Yellow,
        Outcome::Pending => Color::White,
    }
}

pub(crate) const SLOW_MARKER: &str = "\u{23f1}";
pub(crate) const FIXTURE_MARKER: &str = "\u{1f527}";

#[cfg(test)]
mod tests {
    use crate::reporter::outcome_symbol;
    use crate::tree::Outcome;

    #[test]
    fn test_every_outcome_has_a_symbol() {
        let outcomes = [
            Outcome::Passed,
            Outcome::Failed,
            Outcome::Skipped,
            Outcome::Xfailed,
            Outcome::Xpassed,
            Outcome::Error,
            Outcome::Pending,
        ];
        for outcome in &outcomes {
            assert!(!outcome_symbol(*outcome).is_empty());
        }
    }

    #[test]
    fn test_symbols_are_distinct() {
        assert_ne!(
            outcome_symbol(Outcome::Failed),
            outcome_symbol(Outcome::Xpassed)
        );
        assert_ne!(
            outcome_symbol(Outcome::Skipped),
            outcome_symbol(Outcome::Xfailed)
        );
    }
}
