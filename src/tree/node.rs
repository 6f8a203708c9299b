use crate::tree::error::ParseError;
use crate::tree::result::TestResult;
use core::str::FromStr;
use std::fmt;

/// Handle into the tree arena. Stable for the lifetime of the tree, usable
/// as a map key for O(1) result attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Describe,
    Test,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Describe => "describe",
            NodeKind::Test => "test",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" | "module" => Ok(NodeKind::File),
            "describe" | "block" => Ok(NodeKind::Describe),
            "test" | "it" => Ok(NodeKind::Test),
            _ => Err(ParseError::UnknownKind(format!(
                "Node kind '{}' not supported",
                s
            ))),
        }
    }
}

/// One node of the describe tree: a file, a describe block or a test leaf.
///
/// Structure is frozen once discovery ends; only the `result` of a test
/// node changes afterwards, through the collector.
#[derive(Debug, Clone)]
pub struct DescribeNode {
    /// Raw identifier as discovered, e.g. `describe_my_feature`.
    pub name: String,
    /// Human-readable label computed at insertion.
    pub display_name: String,
    /// Docstring of a describe block, empty when absent.
    pub docstring: String,
    pub kind: NodeKind,
    /// Full root-to-node path identity, segments joined with `::`.
    pub key: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) result: Option<TestResult>,
}

impl DescribeNode {
    pub fn is_test(&self) -> bool {
        self.kind == NodeKind::Test
    }

    pub fn is_describe(&self) -> bool {
        self.kind == NodeKind::Describe
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn result(&self) -> Option<&TestResult> {
        self.result.as_ref()
    }
}
