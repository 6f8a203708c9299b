use crate::tree::node::NodeKind;
use std::fmt;

/// Contract violations raised by the collector. These indicate a mismatch
/// between the discovery and execution phases of the host and are reported,
/// never silently corrected.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectorError {
    EmptyPath,
    RootNotFile(String),
    LeafNotTest(String),
    InteriorNotDescribe {
        key: String,
        found: NodeKind,
    },
    KindConflict {
        key: String,
        existing: NodeKind,
        requested: NodeKind,
    },
    UnknownTest(String),
    NotATest(String),
}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CollectorError::EmptyPath => write!(f, "discovered path has no segments"),
            CollectorError::RootNotFile(key) => {
                write!(f, "path root '{}' is not classified as a file", key)
            }
            CollectorError::LeafNotTest(key) => {
                write!(f, "path leaf '{}' is not classified as a test", key)
            }
            CollectorError::InteriorNotDescribe { key, found } => write!(
                f,
                "segment '{}' between file and test must be a describe block, found {}",
                key, found
            ),
            CollectorError::KindConflict {
                key,
                existing,
                requested,
            } => write!(
                f,
                "node '{}' already recorded as {} but rediscovered as {}",
                key, existing, requested
            ),
            CollectorError::UnknownTest(key) => {
                write!(f, "result reported for unknown test '{}'", key)
            }
            CollectorError::NotATest(key) => {
                write!(f, "result reported for non-test node '{}'", key)
            }
        }
    }
}

impl std::error::Error for CollectorError {}

/// Errors from parsing outcome or node-kind names out of a run log.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    UnknownOutcome(String),
    UnknownKind(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnknownOutcome(err) => err.fmt(f),
            ParseError::UnknownKind(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {}
