//! End-to-end run through the collector and both renderers.

use canopy::reporter::html::HtmlReporter;
use canopy::reporter::terminal::TerminalReporter;
use canopy::reporter::ReportOptions;
use canopy::tree::{DescribeTree, NodeId, NodeKind, Outcome, PathSegment, TestResult, TreeCollector};

fn segment(kind: NodeKind, name: &str) -> PathSegment {
    PathSegment {
        kind,
        name: name.to_owned(),
        docstring: None,
    }
}

fn calculator_collector() -> TreeCollector {
    let mut collector = TreeCollector::new();
    for (block, test) in &[
        ("add", "it_adds_two_numbers"),
        ("add", "it_handles_negatives"),
        ("divide", "it_divides_evenly"),
        ("divide", "it_raises_on_zero"),
    ] {
        collector
            .record_path(&[
                segment(NodeKind::File, "Calculator"),
                segment(NodeKind::Describe, block),
                segment(NodeKind::Test, test),
            ])
            .unwrap();
    }
    collector
}

fn report_all(collector: &mut TreeCollector) -> Vec<NodeId> {
    let reports = [
        ("Calculator::add::it_adds_two_numbers", Outcome::Passed, 0.003),
        ("Calculator::add::it_handles_negatives", Outcome::Passed, 0.001),
        ("Calculator::divide::it_divides_evenly", Outcome::Passed, 0.002),
        ("Calculator::divide::it_raises_on_zero", Outcome::Failed, 0.001),
    ];
    reports
        .iter()
        .map(|(key, outcome, duration)| {
            collector
                .attach_result(key, TestResult::new(*outcome, *duration))
                .unwrap()
        })
        .collect()
}

fn divide_subtree(tree: &DescribeTree) -> NodeId {
    let root = tree.roots()[0];
    tree.node(root)
        .children()
        .iter()
        .copied()
        .find(|&c| tree.node(c).name == "divide")
        .unwrap()
}

#[test]
fn test_calculator_scenario_aggregates() {
    let mut collector = calculator_collector();
    report_all(&mut collector);
    let tree = collector.finalize();

    let root = tree.roots()[0];
    assert_eq!(tree.overall_outcome(root), Outcome::Failed);
    assert_eq!(tree.test_count(root), 4);
    assert!((tree.aggregate_duration(root) - 0.007).abs() < 1e-9);

    let divide = divide_subtree(&tree);
    assert_eq!(tree.overall_outcome(divide), Outcome::Failed);
    assert_eq!(tree.test_count(divide), 2);
    assert!((tree.aggregate_duration(divide) - 0.003).abs() < 1e-9);
}

#[test]
fn test_live_stream_follows_arrival_order() {
    colored::control::set_override(false);
    let mut collector = calculator_collector();
    let mut reporter = TerminalReporter::new(Vec::new(), ReportOptions::default());

    // Completion order differs from discovery order on purpose.
    let reports = [
        ("Calculator::divide::it_raises_on_zero", Outcome::Failed, 0.001),
        ("Calculator::add::it_adds_two_numbers", Outcome::Passed, 0.003),
        ("Calculator::add::it_handles_negatives", Outcome::Passed, 0.001),
        ("Calculator::divide::it_divides_evenly", Outcome::Passed, 0.002),
    ];
    for (key, outcome, duration) in &reports {
        let id = collector
            .attach_result(key, TestResult::new(*outcome, *duration))
            .unwrap();
        reporter.report_test(collector.tree(), id).unwrap();
    }
    let output = String::from_utf8(reporter.into_inner()).unwrap();

    let first_done = output.find("it raises on zero").unwrap();
    let second_done = output.find("it adds two numbers").unwrap();
    assert!(first_done < second_done);

    let divide_header = output.find("divide\n").unwrap();
    let add_header = output.find("add\n").unwrap();
    assert!(divide_header < add_header);
    // The divide block is re-entered once its second test completes.
    assert_eq!(output.matches("divide\n").count(), 2);
}

#[test]
fn test_terminal_summary_matches_scenario() {
    colored::control::set_override(false);
    let mut collector = calculator_collector();
    let ids = report_all(&mut collector);

    let mut reporter = TerminalReporter::new(Vec::new(), ReportOptions::default());
    for id in ids {
        reporter.report_test(collector.tree(), id).unwrap();
    }
    let tree = collector.finalize();
    reporter.print_summary(&tree).unwrap();
    let output = String::from_utf8(reporter.into_inner()).unwrap();

    assert!(output.contains("Test Summary"));
    assert!(output.contains("Calculator (3/4 passed, 7ms)"));
    assert!(output.contains("add (2/2 passed, 4ms)"));
    assert!(output.contains("divide (1/2 passed, 3ms)"));
    assert!(output.contains("it raises on zero (1ms)"));
}

#[test]
fn test_html_report_is_written_to_disk() {
    let mut collector = calculator_collector();
    report_all(&mut collector);
    let tree = collector.finalize();

    let path = std::env::temp_dir().join("canopy-replay-report.html");
    HtmlReporter::new(ReportOptions::default())
        .generate_report(&tree, &path)
        .unwrap();

    let document = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(document.contains("4 tests"));
    assert!(document.contains("3 passed"));
    assert!(document.contains("1 failed"));
    assert!(document.contains("it divides evenly"));
    assert!(document.contains("7ms"));
}
