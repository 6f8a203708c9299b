use crate::tree::{NodeKind, Outcome};
use config::{Config, ConfigError, File};
use serde_derive::Deserialize;
use std::path::PathBuf;

/// A recorded test run: the discovery order of every test path, followed by
/// the result events in completion order. Loadable from YAML, JSON or TOML.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub discovered: Vec<DiscoveredTest>,
    #[serde(default)]
    pub results: Vec<ResultEntry>,
}

#[derive(Debug, Deserialize)]
pub struct DiscoveredTest {
    pub path: Vec<SegmentEntry>,
}

/// One path component with its host-supplied classification.
#[derive(Debug, Deserialize)]
pub struct SegmentEntry {
    #[serde(with = "crate::configuration::deserialize::node_kind")]
    pub kind: NodeKind,
    pub name: String,
    pub docstring: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResultEntry {
    /// Path key of the test this result belongs to, segments joined with `::`.
    pub test: String,
    #[serde(with = "crate::configuration::deserialize::outcome")]
    pub outcome: Outcome,
    #[serde(default)]
    pub duration: f64,
    pub docstring: Option<String>,
    #[serde(default)]
    pub fixtures: Vec<String>,
    pub failure: Option<String>,
}

impl Manifest {
    pub fn from(file: PathBuf) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        config.merge(File::from(file))?;
        config.try_into()
    }
}
