use crate::reporter::error::ReportError;
use crate::reporter::{outcome_symbol, ReportOptions, FIXTURE_MARKER, SLOW_MARKER};
use crate::time::format_duration;
use crate::tree::{DescribeTree, NodeId};
use kstring::KString;
use liquid::model::Value;
use liquid::Object;
use std::fs;
use std::path::Path;

const REPORT_TEMPLATE: &str = include_str!("report.html.liquid");

/// Renders the tree into a single self-contained HTML document: summary
/// badges, expand/collapse controls, a failed-only filter and the full
/// describe tree as nested disclosure widgets.
pub struct HtmlReporter {
    options: ReportOptions,
}

impl HtmlReporter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn generate_report(&self, tree: &DescribeTree, path: &Path) -> Result<(), ReportError> {
        let document = self.render(tree)?;
        fs::write(path, document)?;
        Ok(())
    }

    /// The document text; writing it anywhere is the caller's business.
    pub fn render(&self, tree: &DescribeTree) -> Result<String, ReportError> {
        let template = liquid::ParserBuilder::with_stdlib()
            .build()?
            .parse(REPORT_TEMPLATE)?;

        let mut tree_html = String::new();
        for &root in tree.roots() {
            tree_html.push_str(&self.render_node(tree, root, true));
        }

        let mut globals = Object::new();
        globals.insert(
            KString::from_static("total"),
            Value::scalar(tree.total_tests() as i32),
        );
        globals.insert(
            KString::from_static("passed"),
            Value::scalar(tree.total_passed() as i32),
        );
        globals.insert(
            KString::from_static("failed"),
            Value::scalar(tree.total_failed() as i32),
        );
        globals.insert(
            KString::from_static("skipped"),
            Value::scalar(tree.total_skipped() as i32),
        );
        globals.insert(
            KString::from_static("duration"),
            Value::scalar(format_duration(tree.total_duration())),
        );
        globals.insert(
            KString::from_static("generated"),
            Value::scalar(chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()),
        );
        globals.insert(KString::from_static("tree"), Value::scalar(tree_html));

        Ok(template.render(&globals)?)
    }

    fn render_node(&self, tree: &DescribeTree, id: NodeId, is_root: bool) -> String {
        let node = tree.node(id);
        if node.is_test() {
            return self.render_test(tree, id);
        }

        let outcome = tree.overall_outcome(id);
        let open_attr = if outcome.is_failure() { " open" } else { "" };
        let root_class = if is_root { "root" } else { "" };
        let stats = format!(
            "{}/{} passed",
            tree.passed_count(id),
            tree.test_count(id)
        );
        let duration = format_duration(tree.aggregate_duration(id));

        let docstring_html = if node.docstring.is_empty() {
            String::new()
        } else {
            format!(
                " <span class=\"docstring\">-- {}</span>",
                escape(&node.docstring)
            )
        };

        let children_html: String = node
            .children()
            .iter()
            .map(|&child| self.render_node(tree, child, false))
            .collect();

        format!(
            "<details class=\"{}\"{}>\
             <summary>{}{}<span class=\"describe-stats\">({}, {})</span></summary>\n\
             {}</details>\n",
            root_class, open_attr, escape(&node.display_name), docstring_html, stats, duration,
            children_html
        )
    }

    fn render_test(&self, tree: &DescribeTree, id: NodeId) -> String {
        let node = tree.node(id);
        let result = match node.result() {
            Some(result) => result,
            None => return String::new(),
        };

        let symbol = outcome_symbol(result.outcome);
        let css_class = result.outcome.as_str();
        let duration = format_duration(result.duration);
        let is_slow = result.duration > self.options.slow_threshold;
        let slow_class = if is_slow { " slow" } else { "" };
        let slow_marker = if is_slow {
            format!(" {}", SLOW_MARKER)
        } else {
            String::new()
        };

        let docstring_html = match &result.docstring {
            Some(docstring) => format!(
                "<span class=\"docstring\">-- {}</span>",
                escape(docstring)
            ),
            None => String::new(),
        };
        let fixtures_html = if result.fixture_names.is_empty() {
            String::new()
        } else {
            format!(
                "<span class=\"fixtures\">{} {}</span>",
                FIXTURE_MARKER,
                escape(&result.fixture_names.join(", "))
            )
        };

        let mut test_html = format!(
            "<div class=\"test-item {}\">\
             <span class=\"symbol\">{}</span>{}{}\
             <span class=\"duration{}\">({}){}</span>{}</div>\n",
            css_class,
            symbol,
            escape(&node.display_name),
            docstring_html,
            slow_class,
            duration,
            slow_marker,
            fixtures_html
        );

        if result.outcome.is_failure() {
            if let Some(failure) = &result.failure {
                test_html.push_str(&format!(
                    "<div class=\"failure-block\">{}</div>\n",
                    escape(failure)
                ));
            }
        }
        test_html
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
