use crate::model::{EventResult, Failure, Info, ProcessResult, RunResult};
use crate::report::xml::{Attributes, Tag, XmlWriter};
use anyhow::Context;
use std::path::Path;

/// Layout options for the rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level. `None` renders every element back to back.
    pub indent: Option<usize>,
}

impl RenderOptions {
    pub fn compact() -> Self {
        Self { indent: None }
    }

    pub fn pretty(width: usize) -> Self {
        Self {
            indent: Some(width),
        }
    }
}

/// Renders the complete JUnit document for `result`.
///
/// `tests` and `failures` are always recomputed from the child lists; the
/// declared counts on the tree are ignored.
pub fn render_junit(result: &RunResult, options: &RenderOptions) -> String {
    let mut ser = Serializer::new(options, estimate_capacity(result));
    ser.w.declaration();
    ser.w.line_break();
    ser.run(result);
    if ser.indent.is_some() {
        ser.w.line_break();
    }
    ser.w.into_string()
}

/// Renders `result` and writes the raw bytes to `out`. The parent directory
/// must already exist.
pub fn write_junit(result: &RunResult, options: &RenderOptions, out: &Path) -> anyhow::Result<()> {
    let xml = render_junit(result, options);
    std::fs::write(out, xml.as_bytes())
        .with_context(|| format!("failed to write JUnit report {}", out.display()))?;
    tracing::debug!(
        path = %out.display(),
        bytes = xml.len(),
        suites = result.process_count(),
        "wrote JUnit report"
    );
    Ok(())
}

struct Serializer {
    w: XmlWriter,
    indent: Option<usize>,
}

impl Serializer {
    fn new(options: &RenderOptions, capacity: usize) -> Self {
        Self {
            w: XmlWriter::with_capacity(capacity),
            indent: options.indent,
        }
    }

    fn break_line(&mut self, depth: usize) {
        if let Some(width) = self.indent {
            self.w.newline(width, depth);
        }
    }

    fn run(&mut self, result: &RunResult) {
        let attrs = info_attributes(&result.info)
            .with("tests", result.process_count().to_string())
            .with("failures", result.failed_process_count().to_string());
        self.w.start_tag(Tag::TestSuites, &attrs);
        for process in &result.processes {
            self.break_line(1);
            self.process(process);
        }
        if !result.processes.is_empty() {
            self.break_line(0);
        }
        self.w.end_tag(Tag::TestSuites);
    }

    fn process(&mut self, process: &ProcessResult) {
        let attrs = info_attributes(&process.info)
            .with("tests", process.event_count().to_string())
            .with("failures", process.failed_event_count().to_string());
        self.w.start_tag(Tag::TestSuite, &attrs);
        for event in &process.events {
            self.break_line(2);
            self.event(event);
        }
        if !process.events.is_empty() {
            self.break_line(1);
        }
        self.w.end_tag(Tag::TestSuite);
    }

    fn event(&mut self, event: &EventResult) {
        self.w.start_tag(Tag::TestCase, &info_attributes(&event.info));
        for failure in &event.failures {
            self.break_line(3);
            self.failure(failure);
        }
        if event.is_failing() {
            self.break_line(2);
        }
        self.w.end_tag(Tag::TestCase);
    }

    // The body is exactly "\n" + detail; no indentation may leak into it.
    fn failure(&mut self, failure: &Failure) {
        let attrs = Attributes::new()
            .with("message", failure.message.as_str())
            .with("type", failure.severity.as_str());
        self.w.start_tag(Tag::Failure, &attrs);
        self.w.line_break();
        self.w.text(&failure.detail);
        self.w.end_tag(Tag::Failure);
    }
}

fn info_attributes(info: &Info) -> Attributes {
    Attributes::new()
        .with("id", info.id.as_str())
        .with("name", info.name.as_str())
        .with("time", info.elapsed_time.as_str())
}

fn estimate_capacity(result: &RunResult) -> usize {
    let events = result.event_count();
    let failures = result.failure_count();
    128 + result.process_count() * 96 + events * 80 + failures * 160
}
