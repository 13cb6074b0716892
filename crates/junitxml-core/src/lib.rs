pub mod config;
pub mod errors;
pub mod loader;
pub mod model;
pub mod report;
pub mod sample;

pub use errors::{ConfigError, ReportError};
pub use model::{EventResult, Failure, Info, ProcessResult, RunResult, Severity};
pub use report::junit::{render_junit, write_junit, RenderOptions};
