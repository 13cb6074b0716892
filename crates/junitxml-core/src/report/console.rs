use crate::model::RunResult;

pub fn summary_line(result: &RunResult) -> String {
    format!(
        "Results: suites={} cases={} failing_suites={} failing_cases={} failures={}",
        result.process_count(),
        result.event_count(),
        result.failed_process_count(),
        result.failed_event_count(),
        result.failure_count()
    )
}

pub fn print_summary(result: &RunResult) {
    eprintln!("{}", summary_line(result));
}
