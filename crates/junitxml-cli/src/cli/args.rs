use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "junitxml",
    version,
    about = "Render process/event result trees as JUnit XML reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a result tree (YAML or JSON) to a JUnit XML file
    Render(RenderArgs),
    /// Write the built-in reference stress run as a JUnit XML file
    Demo(DemoArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Result tree to render (.yaml, .yml or .json)
    #[arg(long)]
    pub input: PathBuf,

    /// Output report path (default: config `output`, then junit.xml)
    #[arg(long, env = "JUNITXML_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Config file (default: junitxml.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Spaces per nesting level; omit for compact output
    #[arg(long)]
    pub indent: Option<usize>,

    /// Exit with code 1 when any suite reports failures
    #[arg(long)]
    pub fail_on_failures: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DemoArgs {
    #[arg(long, default_value = "out/junitXmlReport.xml")]
    pub output: PathBuf,

    /// Spaces per nesting level; omit for compact output
    #[arg(long)]
    pub indent: Option<usize>,
}
