pub mod collector;
pub mod error;
pub mod node;
pub mod outcome;
pub mod result;

pub use self::collector::{PathSegment, TreeCollector};
pub use self::error::CollectorError;
pub use self::node::{DescribeNode, NodeId, NodeKind};
pub use self::outcome::Outcome;
pub use self::result::TestResult;

/// The forest of discovered test files. Built by the collector during the
/// discovery phase, queried read-only by the renderers.
///
/// Every aggregate below is computed on demand over the subtree, never
/// cached, so a query mid-execution always reflects the results attached so
/// far.
#[derive(Debug, Default)]
pub struct DescribeTree {
    pub(crate) nodes: Vec<DescribeNode>,
    pub(crate) roots: Vec<NodeId>,
}

impl DescribeTree {
    pub fn node(&self, id: NodeId) -> &DescribeNode {
        &self.nodes[id.0]
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Chain of ancestors from the root down to the parent of `id`.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            chain.push(parent);
            current = self.node(parent).parent;
        }
        chain.reverse();
        chain
    }

    /// Number of test leaves under `id`, the node itself included.
    pub fn test_count(&self, id: NodeId) -> usize {
        let node = self.node(id);
        if node.is_test() {
            return 1;
        }
        node.children.iter().map(|&c| self.test_count(c)).sum()
    }

    pub fn passed_count(&self, id: NodeId) -> usize {
        self.count_by(id, |outcome| outcome == Outcome::Passed)
    }

    /// Errors count as failures; a broken setup is as alarming as a failed
    /// assertion.
    pub fn failed_count(&self, id: NodeId) -> usize {
        self.count_by(id, Outcome::is_failure)
    }

    pub fn skipped_count(&self, id: NodeId) -> usize {
        self.count_by(id, |outcome| outcome == Outcome::Skipped)
    }

    /// Sum of result durations over the subtree. Pending leaves contribute
    /// nothing.
    pub fn aggregate_duration(&self, id: NodeId) -> f64 {
        let node = self.node(id);
        if node.is_test() {
            return node.result.as_ref().map(|r| r.duration).unwrap_or(0.0);
        }
        node.children
            .iter()
            .map(|&c| self.aggregate_duration(c))
            .sum()
    }

    /// Precedence-reduced outcome of the subtree: the highest-precedence
    /// outcome among descendants wins. An empty subtree is `Pending`.
    pub fn overall_outcome(&self, id: NodeId) -> Outcome {
        let node = self.node(id);
        if node.is_test() {
            return node
                .result
                .as_ref()
                .map(|r| r.outcome)
                .unwrap_or(Outcome::Pending);
        }
        node.children
            .iter()
            .map(|&c| self.overall_outcome(c))
            .max_by_key(|outcome| outcome.precedence())
            .unwrap_or(Outcome::Pending)
    }

    pub fn total_tests(&self) -> usize {
        self.roots.iter().map(|&r| self.test_count(r)).sum()
    }

    pub fn total_passed(&self) -> usize {
        self.roots.iter().map(|&r| self.passed_count(r)).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.roots.iter().map(|&r| self.failed_count(r)).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.roots.iter().map(|&r| self.skipped_count(r)).sum()
    }

    pub fn total_duration(&self) -> f64 {
        self.roots.iter().map(|&r| self.aggregate_duration(r)).sum()
    }

    /// Outcome of the whole forest, `Pending` when nothing was discovered.
    pub fn overall(&self) -> Outcome {
        self.roots
            .iter()
            .map(|&r| self.overall_outcome(r))
            .max_by_key(|outcome| outcome.precedence())
            .unwrap_or(Outcome::Pending)
    }

    fn count_by<F>(&self, id: NodeId, matches: F) -> usize
    where
        F: Fn(Outcome) -> bool + Copy,
    {
        let node = self.node(id);
        if node.is_test() {
            let matched = node
                .result
                .as_ref()
                .map(|r| matches(r.outcome))
                .unwrap_or(false);
            return matched as usize;
        }
        node.children
            .iter()
            .map(|&c| self.count_by(c, matches))
            .sum()
    }
}
