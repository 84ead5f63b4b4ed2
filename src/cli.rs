use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "build-error-table",
    version,
    about = "Generate error_lookup_table.cpp from the EPUBError enumeration"
)]
pub struct Args {
    /// The path to the project root folder
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub project_path: String,

    /// Display verbose logging information
    #[arg(long)]
    pub verbose: bool,

    /// Don't actually write the output, just print to stdout
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// Arguments for running against `root` with every flag off.
    pub fn for_project(root: impl Into<String>) -> Self {
        Args {
            project_path: root.into(),
            verbose: false,
            dry_run: false,
        }
    }

    /// Level forced on this crate's log targets. `--verbose` overrides
    /// whatever `RUST_LOG` says about them.
    pub fn log_override(&self) -> Option<LevelFilter> {
        self.verbose.then_some(LevelFilter::Debug)
    }
}
