use crate::cli::args::DemoArgs;
use crate::exit_codes::EXIT_SUCCESS;
use junitxml_core::report::console::print_summary;
use junitxml_core::report::junit::{write_junit, RenderOptions};
use junitxml_core::sample::reference_result;

pub fn run(args: DemoArgs) -> anyhow::Result<i32> {
    let result = reference_result();
    let options = RenderOptions {
        indent: args.indent,
    };

    crate::fs::ensure_parent_dir(&args.output)?;
    write_junit(&result, &options, &args.output)?;

    println!("✓ Wrote reference report to {}", args.output.display());
    print_summary(&result);
    Ok(EXIT_SUCCESS)
}
