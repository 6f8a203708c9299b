use crate::naming;
use crate::tree::error::CollectorError;
use crate::tree::node::{DescribeNode, NodeId, NodeKind};
use crate::tree::result::TestResult;
use crate::tree::DescribeTree;
use std::collections::HashMap;

/// One step of a discovered test path, classification supplied by the host:
/// the module component is a file, the leaf is a test, everything between is
/// a describe block.
#[derive(Debug, Clone)]
pub struct PathSegment {
    pub kind: NodeKind,
    pub name: String,
    pub docstring: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Discovering,
    Executing,
}

/// Builds the describe tree out of flat discovered paths and attaches
/// results to its leaves as they stream in.
///
/// Paths sharing a prefix resolve to the same nodes; the key index makes
/// result attachment a map lookup instead of a tree walk, which is why
/// discovery has to finish before execution starts.
pub struct TreeCollector {
    tree: DescribeTree,
    index: HashMap<String, NodeId>,
    phase: Phase,
}

impl TreeCollector {
    pub fn new() -> Self {
        Self {
            tree: DescribeTree::default(),
            index: HashMap::new(),
            phase: Phase::Discovering,
        }
    }

    /// Joined path identity used as the attachment key for a test.
    pub fn path_key(names: &[&str]) -> String {
        names.join("::")
    }

    /// Records one discovered test path, reusing every prefix node seen
    /// before and appending new nodes in discovery order.
    ///
    /// Once execution has started the structure is frozen; a late discovery
    /// is logged and dropped rather than corrupting the index.
    pub fn record_path(&mut self, segments: &[PathSegment]) -> Result<(), CollectorError> {
        if segments.is_empty() {
            return Err(CollectorError::EmptyPath);
        }
        if self.phase == Phase::Executing {
            let names: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
            warn!(
                "Ignoring path '{}' discovered after execution started",
                Self::path_key(&names)
            );
            return Ok(());
        }

        let last = segments.len() - 1;
        let mut key = String::new();
        let mut parent: Option<NodeId> = None;
        for (position, segment) in segments.iter().enumerate() {
            if !key.is_empty() {
                key.push_str("::");
            }
            key.push_str(&segment.name);

            let expected = if position == 0 {
                NodeKind::File
            } else if position == last {
                NodeKind::Test
            } else {
                NodeKind::Describe
            };
            if segment.kind != expected {
                return Err(if position == 0 {
                    CollectorError::RootNotFile(key)
                } else if position == last {
                    CollectorError::LeafNotTest(key)
                } else {
                    CollectorError::InteriorNotDescribe {
                        key,
                        found: segment.kind,
                    }
                });
            }

            parent = Some(match self.index.get(&key) {
                Some(&existing) => {
                    let node = self.tree.node(existing);
                    if node.kind != segment.kind {
                        return Err(CollectorError::KindConflict {
                            key,
                            existing: node.kind,
                            requested: segment.kind,
                        });
                    }
                    existing
                }
                None => self.insert(segment, key.clone(), parent),
            });
        }
        Ok(())
    }

    /// Attaches a result to a previously discovered test leaf. Re-reporting
    /// the same key overwrites, last write wins, so a teardown error can
    /// replace the primary result.
    pub fn attach_result(
        &mut self,
        key: &str,
        result: TestResult,
    ) -> Result<NodeId, CollectorError> {
        self.phase = Phase::Executing;
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => return Err(CollectorError::UnknownTest(key.to_owned())),
        };
        if !self.tree.node(id).is_test() {
            return Err(CollectorError::NotATest(key.to_owned()));
        }
        self.tree.nodes[id.0].result = Some(result);
        Ok(id)
    }

    /// The tree as built so far, for live rendering mid-execution.
    pub fn tree(&self) -> &DescribeTree {
        &self.tree
    }

    pub fn finalize(self) -> DescribeTree {
        self.tree
    }

    fn insert(&mut self, segment: &PathSegment, key: String, parent: Option<NodeId>) -> NodeId {
        let display_name = match segment.kind {
            NodeKind::File => segment.name.clone(),
            NodeKind::Describe => naming::format_describe(&segment.name),
            NodeKind::Test => naming::format_test(&segment.name),
        };
        let id = NodeId(self.tree.nodes.len());
        self.tree.nodes.push(DescribeNode {
            name: segment.name.clone(),
            display_name,
            docstring: segment.docstring.clone().unwrap_or_default(),
            kind: segment.kind,
            key: key.clone(),
            parent,
            children: Vec::new(),
            result: None,
        });
        self.index.insert(key, id);
        match parent {
            Some(parent) => self.tree.nodes[parent.0].children.push(id),
            None => self.tree.roots.push(id),
        }
        id
    }
}

impl Default for TreeCollector {
    fn default() -> Self {
        Self::new()
    }
}
