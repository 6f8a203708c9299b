use crate::tree::error::ParseError;
use core::str::FromStr;
use std::fmt;

/// Terminal status of a single executed test. `Pending` stands in for a
/// test that has no result yet and doubles as the outcome of an empty
/// subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
    Xfailed,
    Xpassed,
    Error,
    Pending,
}

impl Outcome {
    /// Rollup precedence. When outcomes are merged up the tree the highest
    /// value wins, so an error or failure is never masked by a softer
    /// outcome further down.
    pub fn precedence(self) -> u8 {
        match self {
            Outcome::Error => 6,
            Outcome::Failed => 5,
            Outcome::Xpassed => 4,
            Outcome::Xfailed => 3,
            Outcome::Skipped => 2,
            Outcome::Passed => 1,
            Outcome::Pending => 0,
        }
    }

    pub fn is_failure(self) -> bool {
        match self {
            Outcome::Failed | Outcome::Error => true,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
            Outcome::Skipped => "skipped",
            Outcome::Xfailed => "xfailed",
            Outcome::Xpassed => "xpassed",
            Outcome::Error => "error",
            Outcome::Pending => "pending",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passed" | "pass" => Ok(Outcome::Passed),
            "failed" | "fail" => Ok(Outcome::Failed),
            "skipped" | "skip" => Ok(Outcome::Skipped),
            "xfailed" | "xfail" => Ok(Outcome::Xfailed),
            "xpassed" | "xpass" => Ok(Outcome::Xpassed),
            "error" => Ok(Outcome::Error),
            "pending" => Ok(Outcome::Pending),
            _ => Err(ParseError::UnknownOutcome(format!(
                "Outcome '{}' not supported",
                s
            ))),
        }
    }
}
