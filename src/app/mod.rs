use crate::configuration::manifest::{Manifest, ResultEntry, SegmentEntry};
use crate::reporter::html::HtmlReporter;
use crate::reporter::terminal::TerminalReporter;
use crate::reporter::ReportOptions;
use crate::tree::collector::PathSegment;
use crate::tree::result::TestResult;
use crate::tree::TreeCollector;
use std::io;
use std::path::PathBuf;

/// Replays a recorded run through the collector: the discovery phase builds
/// the tree skeleton, then each result event updates its leaf and produces a
/// live terminal line. A contract violation is reported once and the replay
/// carries on with the remaining events.
pub struct App {
    name: String,
    manifest: Manifest,
    options: ReportOptions,
    html_path: Option<PathBuf>,
}

impl App {
    pub fn new(manifest: Manifest, options: ReportOptions, html_path: Option<PathBuf>) -> Self {
        App {
            name: manifest.name.clone(),
            manifest,
            options,
            html_path,
        }
    }

    pub fn run(&self) -> io::Result<()> {
        info!("Starting test session '{}'", self.name);
        info!("Discovered {} tests", self.manifest.discovered.len());

        let mut collector = TreeCollector::new();
        for discovered in &self.manifest.discovered {
            let segments: Vec<PathSegment> =
                discovered.path.iter().map(Self::to_segment).collect();
            if let Err(e) = collector.record_path(&segments) {
                error!("Discovery contract violation: {}", e);
            }
        }

        let mut reporter = TerminalReporter::stdout(self.options);
        for entry in &self.manifest.results {
            match Self::to_result(entry) {
                Ok(result) => match collector.attach_result(&entry.test, result) {
                    Ok(id) => reporter.report_test(collector.tree(), id)?,
                    Err(e) => error!("Result contract violation: {}", e),
                },
                Err(e) => error!("Malformed result for '{}': {}", entry.test, e),
            }
        }

        let tree = collector.finalize();
        reporter.print_summary(&tree)?;

        if let Some(path) = &self.html_path {
            let html = HtmlReporter::new(self.options);
            match html.generate_report(&tree, path) {
                Ok(()) => println!("\nHTML report generated: {}", path.display()),
                Err(e) => error!("Failed to generate HTML report: {}", e),
            }
        }
        Ok(())
    }

    fn to_segment(entry: &SegmentEntry) -> PathSegment {
        PathSegment {
            kind: entry.kind,
            name: entry.name.clone(),
            docstring: entry.docstring.clone(),
        }
    }

    fn to_result(entry: &ResultEntry) -> Result<TestResult, String> {
        TestResult::builder()
            .outcome(entry.outcome)
            .duration(entry.duration)
            .docstring(entry.docstring.clone())
            .fixture_names(entry.fixtures.clone())
            .failure(entry.failure.clone())
            .build()
    }
}
