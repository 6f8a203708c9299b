use crate::reporter::{
    outcome_color, outcome_symbol, ReportOptions, FIXTURE_MARKER, SLOW_MARKER,
};
use crate::time::format_duration;
use crate::tree::{DescribeTree, NodeId};
use colored::Colorize;
use std::io::{self, Write};

const LAST_CONNECTOR: &str = "\u{2514}\u{2500}\u{2500} ";
const MID_CONNECTOR: &str = "\u{251c}\u{2500}\u{2500} ";
const PIPE_PREFIX: &str = "\u{2502}   ";
const BLANK_PREFIX: &str = "    ";

/// Streams one line per completed test in arrival order, then prints the
/// authoritative tree-ordered summary once at session end. Never mutates
/// the tree it renders.
pub struct TerminalReporter<W: Write> {
    out: W,
    options: ReportOptions,
    current_stack: Vec<String>,
}

impl TerminalReporter<io::Stdout> {
    pub fn stdout(options: ReportOptions) -> Self {
        Self::new(io::stdout(), options)
    }
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W, options: ReportOptions) -> Self {
        Self {
            out,
            options,
            current_stack: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints the live line for a test whose result just arrived, preceded
    /// by headers for any describe blocks not entered yet.
    pub fn report_test(&mut self, tree: &DescribeTree, id: NodeId) -> io::Result<()> {
        self.print_headers(tree, id)?;
        self.print_test_line(tree, id)
    }

    fn print_headers(&mut self, tree: &DescribeTree, id: NodeId) -> io::Result<()> {
        let blocks: Vec<NodeId> = tree
            .ancestors(id)
            .into_iter()
            .filter(|&a| tree.node(a).is_describe())
            .collect();
        for (depth, &block) in blocks.iter().enumerate() {
            let node = tree.node(block);
            if self.current_stack.contains(&node.key) {
                continue;
            }
            let indent = "  ".repeat(depth);
            let mut header = format!("{}{}", indent, node.display_name);
            if self.options.expand_all && !node.docstring.is_empty() {
                header.push_str(" -- ");
                header.push_str(&node.docstring);
            }
            writeln!(self.out, "{}", header)?;
        }
        self.current_stack = blocks.iter().map(|&b| tree.node(b).key.clone()).collect();
        Ok(())
    }

    fn print_test_line(&mut self, tree: &DescribeTree, id: NodeId) -> io::Result<()> {
        let node = tree.node(id);
        let result = match node.result() {
            Some(result) => result,
            None => return Ok(()),
        };

        let indent = "  ".repeat(self.current_stack.len());
        let mut line = format!(
            "{}{} {}",
            indent,
            outcome_symbol(result.outcome),
            node.display_name
        );
        if self.options.expand_all {
            if let Some(docstring) = &result.docstring {
                line.push_str(" -- ");
                line.push_str(docstring);
            }
        }
        line.push_str(&format!(" ({})", format_duration(result.duration)));
        if result.duration > self.options.slow_threshold {
            line.push(' ');
            line.push_str(SLOW_MARKER);
        }
        if self.options.expand_all && !self.options.no_fixtures && !result.fixture_names.is_empty()
        {
            line.push_str(&format!(" {} {}", FIXTURE_MARKER, result.fixture_names.join(", ")));
        }
        writeln!(self.out, "{}", line.color(outcome_color(result.outcome)))?;

        if result.outcome.is_failure() {
            if let Some(failure) = &result.failure {
                for failure_line in failure.lines() {
                    let detail = format!("{}    {}", indent, failure_line);
                    writeln!(self.out, "{}", detail.red())?;
                }
            }
        }
        Ok(())
    }

    /// Prints the summary tree for the whole forest with rollups at every
    /// level. Describe blocks are listed before sibling tests; that is a
    /// display grouping only, the tree itself keeps discovery order.
    pub fn print_summary(&mut self, tree: &DescribeTree) -> io::Result<()> {
        if tree.is_empty() {
            return Ok(());
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", "Test Summary".bold())?;
        let roots = tree.roots();
        for (position, &root) in roots.iter().enumerate() {
            self.print_summary_node(tree, root, "", position == roots.len() - 1)?;
        }
        Ok(())
    }

    fn print_summary_node(
        &mut self,
        tree: &DescribeTree,
        id: NodeId,
        prefix: &str,
        is_last: bool,
    ) -> io::Result<()> {
        let node = tree.node(id);
        let connector = if is_last { LAST_CONNECTOR } else { MID_CONNECTOR };
        let outcome = tree.overall_outcome(id);
        let symbol = outcome_symbol(outcome);

        let line = if node.is_test() {
            let duration = node.result().map(|r| r.duration).unwrap_or(0.0);
            format!(
                "{}{}{} {} ({})",
                prefix,
                connector,
                symbol,
                node.display_name,
                format_duration(duration)
            )
        } else {
            format!(
                "{}{}{} {} ({}/{} passed, {})",
                prefix,
                connector,
                symbol,
                node.display_name,
                tree.passed_count(id),
                tree.test_count(id),
                format_duration(tree.aggregate_duration(id))
            )
        };
        writeln!(self.out, "{}", line.color(outcome_color(outcome)))?;

        let child_prefix = format!(
            "{}{}",
            prefix,
            if is_last { BLANK_PREFIX } else { PIPE_PREFIX }
        );
        let (blocks, tests): (Vec<NodeId>, Vec<NodeId>) = node
            .children()
            .iter()
            .copied()
            .partition(|&c| !tree.node(c).is_test());
        let ordered: Vec<NodeId> = blocks.into_iter().chain(tests).collect();
        for (position, &child) in ordered.iter().enumerate() {
            self.print_summary_node(tree, child, &child_prefix, position == ordered.len() - 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::reporter::terminal::TerminalReporter;
    use crate::reporter::ReportOptions;
    use crate::tree::{NodeKind, Outcome, PathSegment, TestResult, TreeCollector};

    fn segment(kind: NodeKind, name: &str) -> PathSegment {
        PathSegment {
            kind,
            name: name.to_owned(),
            docstring: None,
        }
    }

    fn collector_with_calculator() -> TreeCollector {
        let mut collector = TreeCollector::new();
        for (block, test) in &[
            ("describe_add", "it_adds_two_numbers"),
            ("describe_add", "it_handles_negatives"),
            ("describe_divide", "it_raises_on_zero"),
        ] {
            collector
                .record_path(&[
                    segment(NodeKind::File, "calculator.py"),
                    segment(NodeKind::Describe, block),
                    segment(NodeKind::Test, test),
                ])
                .unwrap();
        }
        collector
    }

    fn render(collector: &mut TreeCollector, options: ReportOptions) -> String {
        colored::control::set_override(false);
        let mut reporter = TerminalReporter::new(Vec::new(), options);
        let reports = [
            (
                "calculator.py::describe_add::it_adds_two_numbers",
                TestResult::new(Outcome::Passed, 0.003),
            ),
            (
                "calculator.py::describe_add::it_handles_negatives",
                TestResult::new(Outcome::Passed, 0.001),
            ),
            (
                "calculator.py::describe_divide::it_raises_on_zero",
                TestResult::builder()
                    .outcome(Outcome::Failed)
                    .duration(0.002)
                    .failure(Some("ZeroDivisionError".to_owned()))
                    .build()
                    .unwrap(),
            ),
        ];
        for (key, result) in reports.iter().cloned() {
            let id = collector.attach_result(key, result).unwrap();
            reporter.report_test(collector.tree(), id).unwrap();
        }
        reporter.print_summary(collector.tree()).unwrap();
        String::from_utf8(reporter.out).unwrap()
    }

    #[test]
    fn test_live_lines_follow_block_headers() {
        let mut collector = collector_with_calculator();
        let output = render(&mut collector, ReportOptions::default());
        let add_header = output.find("add\n").unwrap();
        let first_test = output.find("\u{2713} it adds two numbers (3ms)").unwrap();
        assert!(add_header < first_test);
    }

    #[test]
    fn test_headers_are_not_repeated_for_same_block() {
        let mut collector = collector_with_calculator();
        let output = render(&mut collector, ReportOptions::default());
        assert_eq!(output.matches("add\n").count(), 1);
    }

    #[test]
    fn test_failure_detail_is_printed_indented() {
        let mut collector = collector_with_calculator();
        let output = render(&mut collector, ReportOptions::default());
        assert!(output.contains("      ZeroDivisionError"));
    }

    #[test]
    fn test_summary_carries_rollups_at_every_level() {
        let mut collector = collector_with_calculator();
        let output = render(&mut collector, ReportOptions::default());
        assert!(output.contains("Test Summary"));
        assert!(output.contains("calculator.py (2/3 passed, 6ms)"));
        assert!(output.contains("add (2/2 passed, 4ms)"));
        assert!(output.contains("divide (0/1 passed, 2ms)"));
        assert!(output.contains("\u{2514}\u{2500}\u{2500} \u{2717} it raises on zero (2ms)"));
    }

    #[test]
    fn test_slow_tests_are_marked() {
        colored::control::set_override(false);
        let mut collector = TreeCollector::new();
        collector
            .record_path(&[
                segment(NodeKind::File, "slow.py"),
                segment(NodeKind::Test, "it_crawls"),
            ])
            .unwrap();
        let id = collector
            .attach_result("slow.py::it_crawls", TestResult::new(Outcome::Passed, 0.9))
            .unwrap();
        let mut reporter = TerminalReporter::new(Vec::new(), ReportOptions::default());
        reporter.report_test(collector.tree(), id).unwrap();
        let output = String::from_utf8(reporter.out).unwrap();
        assert!(output.contains("\u{23f1}"));
    }

    #[test]
    fn test_expanded_output_shows_docstrings_and_fixtures() {
        colored::control::set_override(false);
        let mut collector = TreeCollector::new();
        collector
            .record_path(&[
                segment(NodeKind::File, "api.py"),
                PathSegment {
                    kind: NodeKind::Describe,
                    name: "describe_sessions".to_owned(),
                    docstring: Some("session lifecycle".to_owned()),
                },
                segment(NodeKind::Test, "it_logs_in"),
            ])
            .unwrap();
        let result = TestResult::builder()
            .outcome(Outcome::Passed)
            .duration(0.01)
            .docstring(Some("happy path".to_owned()))
            .fixture_names(vec!["client".to_owned(), "database".to_owned()])
            .build()
            .unwrap();
        let id = collector
            .attach_result("api.py::describe_sessions::it_logs_in", result)
            .unwrap();

        let options = ReportOptions {
            expand_all: true,
            ..ReportOptions::default()
        };
        let mut reporter = TerminalReporter::new(Vec::new(), options);
        reporter.report_test(collector.tree(), id).unwrap();
        let output = String::from_utf8(reporter.out).unwrap();
        assert!(output.contains("sessions -- session lifecycle"));
        assert!(output.contains("it logs in -- happy path"));
        assert!(output.contains("client, database"));

        let options = ReportOptions {
            expand_all: true,
            no_fixtures: true,
            ..ReportOptions::default()
        };
        let mut reporter = TerminalReporter::new(Vec::new(), options);
        let id = collector
            .attach_result(
                "api.py::describe_sessions::it_logs_in",
                TestResult::builder()
                    .outcome(Outcome::Passed)
                    .duration(0.01)
                    .fixture_names(vec!["client".to_owned()])
                    .build()
                    .unwrap(),
            )
            .unwrap();
        reporter.report_test(collector.tree(), id).unwrap();
        let output = String::from_utf8(reporter.out).unwrap();
        assert!(!output.contains("client"));
    }

    #[test]
    fn test_empty_tree_prints_no_summary() {
        colored::control::set_override(false);
        let collector = TreeCollector::new();
        let mut reporter = TerminalReporter::new(Vec::new(), ReportOptions::default());
        reporter.print_summary(collector.tree()).unwrap();
        assert!(reporter.out.is_empty());
    }
}
