use crate::errors::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive metadata shared by runs, processes and events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub id: String,
    pub name: String,
    /// Numeric text as reported by the producer; never parsed.
    #[serde(alias = "time")]
    pub elapsed_time: String,
}

impl Info {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        elapsed_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            elapsed_time: elapsed_time.into(),
        }
    }

    fn validate(&self, node: &str) -> Result<(), ReportError> {
        let fields = [
            ("id", &self.id),
            ("name", &self.name),
            ("time", &self.elapsed_time),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(ReportError::MalformedResultTree {
                    node: node.to_string(),
                    field,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed outcome recorded against an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub message: String,
    pub severity: Severity,
    pub detail: String,
}

impl Failure {
    pub fn new(message: impl Into<String>, severity: Severity, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResult {
    pub info: Info,
    #[serde(default)]
    pub failures: Vec<Failure>,
}

impl EventResult {
    pub fn new(info: Info, failures: Vec<Failure>) -> Self {
        Self { info, failures }
    }

    pub fn is_failing(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// A named group of events, rendered as a `testsuite`.
///
/// `declared_event_count` and `declared_failed_event_count` are labels supplied
/// by the producer. Rendering always uses [`ProcessResult::event_count`] and
/// [`ProcessResult::failed_event_count`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub info: Info,
    #[serde(default)]
    pub declared_event_count: String,
    #[serde(default)]
    pub declared_failed_event_count: String,
    #[serde(default)]
    pub events: Vec<EventResult>,
}

impl ProcessResult {
    pub fn new(
        info: Info,
        declared_event_count: impl Into<String>,
        declared_failed_event_count: impl Into<String>,
        events: Vec<EventResult>,
    ) -> Self {
        Self {
            info,
            declared_event_count: declared_event_count.into(),
            declared_failed_event_count: declared_failed_event_count.into(),
            events,
        }
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn failed_event_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_failing()).count()
    }

    /// A process fails as soon as one of its events carries a failure.
    pub fn is_failing(&self) -> bool {
        self.events.iter().any(EventResult::is_failing)
    }
}

/// Root of the tree: one complete run, rendered as `testsuites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub info: Info,
    #[serde(default)]
    pub declared_process_count: String,
    #[serde(default)]
    pub declared_failed_process_count: String,
    #[serde(default)]
    pub processes: Vec<ProcessResult>,
}

impl RunResult {
    pub fn new(
        info: Info,
        declared_process_count: impl Into<String>,
        declared_failed_process_count: impl Into<String>,
        processes: Vec<ProcessResult>,
    ) -> Self {
        Self {
            info,
            declared_process_count: declared_process_count.into(),
            declared_failed_process_count: declared_failed_process_count.into(),
            processes,
        }
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    pub fn failed_process_count(&self) -> usize {
        self.processes.iter().filter(|p| p.is_failing()).count()
    }

    pub fn event_count(&self) -> usize {
        self.processes.iter().map(ProcessResult::event_count).sum()
    }

    pub fn failed_event_count(&self) -> usize {
        self.processes
            .iter()
            .map(ProcessResult::failed_event_count)
            .sum()
    }

    pub fn failure_count(&self) -> usize {
        self.processes
            .iter()
            .flat_map(|p| &p.events)
            .map(|e| e.failures.len())
            .sum()
    }

    /// Checks that every run, process and event carries a non-empty id, name
    /// and time. Stops at the first offending node.
    pub fn validate(&self) -> Result<(), ReportError> {
        self.info.validate("result")?;
        for (pi, process) in self.processes.iter().enumerate() {
            let node = format!("processes[{}]", pi);
            process.info.validate(&node)?;
            for (ei, event) in process.events.iter().enumerate() {
                event.info.validate(&format!("{}.events[{}]", node, ei))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, failures: Vec<Failure>) -> EventResult {
        EventResult::new(Info::new(id, "Event", "1"), failures)
    }

    fn warning() -> Failure {
        Failure::new("boom", Severity::Warning, "detail")
    }

    #[test]
    fn test_counts_ignore_declared_labels() {
        let process = ProcessResult::new(
            Info::new("p", "Process", "10"),
            "99",
            "42",
            vec![event("a", vec![]), event("b", vec![warning(), warning()])],
        );

        assert_eq!(process.event_count(), 2);
        assert_eq!(process.failed_event_count(), 1);
        assert!(process.is_failing());
    }

    #[test]
    fn test_process_without_failures_is_not_failing() {
        let process = ProcessResult::new(
            Info::new("p", "Process", "10"),
            "1",
            "1",
            vec![event("a", vec![])],
        );
        assert!(!process.is_failing());

        let empty = ProcessResult::new(Info::new("q", "Empty", "0"), "0", "0", vec![]);
        assert!(!empty.is_failing());
        assert_eq!(empty.failed_event_count(), 0);
    }

    #[test]
    fn test_run_aggregates() {
        let run = RunResult::new(
            Info::new("r", "Run", "20"),
            "",
            "",
            vec![
                ProcessResult::new(
                    Info::new("1", "One", "5"),
                    "",
                    "",
                    vec![event("a", vec![warning()])],
                ),
                ProcessResult::new(
                    Info::new("2", "Two", "5"),
                    "",
                    "",
                    vec![event("b", vec![]), event("c", vec![warning(), warning()])],
                ),
                ProcessResult::new(Info::new("3", "Three", "5"), "", "", vec![]),
            ],
        );

        assert_eq!(run.process_count(), 3);
        assert_eq!(run.failed_process_count(), 2);
        assert_eq!(run.event_count(), 3);
        assert_eq!(run.failed_event_count(), 2);
        assert_eq!(run.failure_count(), 3);
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Error.as_str(), "ERROR");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            r#""WARNING""#
        );
        assert!(serde_json::from_str::<Severity>(r#""FATAL""#).is_err());
    }

    #[test]
    fn test_validate_reports_offending_node() {
        let run = RunResult::new(
            Info::new("r", "Run", "20"),
            "1",
            "0",
            vec![ProcessResult::new(
                Info::new("1", "One", "5"),
                "2",
                "0",
                vec![event("a", vec![]), EventResult::new(Info::new("b", "", "1"), vec![])],
            )],
        );

        match run.validate() {
            Err(ReportError::MalformedResultTree { node, field }) => {
                assert_eq!(node, "processes[0].events[1]");
                assert_eq!(field, "name");
            }
            other => panic!("expected MalformedResultTree, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_complete_tree() {
        let run = RunResult::new(Info::new("r", "Run", "0"), "0", "0", vec![]);
        assert!(run.validate().is_ok());
    }
}
