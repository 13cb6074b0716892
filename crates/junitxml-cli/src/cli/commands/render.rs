use crate::cli::args::RenderArgs;
use crate::exit_codes::{EXIT_CONFIG_ERROR, EXIT_REPORT_HAS_FAILURES, EXIT_SUCCESS};
use junitxml_core::loader::load_result;
use junitxml_core::report::console::print_summary;
use junitxml_core::report::junit::write_junit;
use std::path::PathBuf;

use super::config_path::resolve_config;

pub const DEFAULT_OUTPUT: &str = "junit.xml";

pub fn run(args: RenderArgs) -> anyhow::Result<i32> {
    let cfg = match resolve_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("{e:#}");
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    let result = match load_result(&args.input) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("{e}");
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    let mut options = cfg.render_options();
    if args.indent.is_some() {
        options.indent = args.indent;
    }
    let out = args
        .output
        .or(cfg.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    crate::fs::ensure_parent_dir(&out)?;
    write_junit(&result, &options, &out)?;
    tracing::info!(path = %out.display(), "JUnit report written");
    print_summary(&result);

    if args.fail_on_failures && result.failed_process_count() > 0 {
        return Ok(EXIT_REPORT_HAS_FAILURES);
    }
    Ok(EXIT_SUCCESS)
}
