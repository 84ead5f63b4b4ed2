pub mod cli;
pub mod emit;
pub mod layout;
pub mod record;
pub mod scan;

use std::path::Path;

use anyhow::Result;
use clap::CommandFactory;
use log::debug;

use cli::Args;
use emit::{Destination, emit};
use layout::ProjectLayout;
use scan::scan_file;

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The table was written; holds the number of records.
    Generated(usize),
    /// The enumeration had no annotated enumerators, nothing was written.
    NothingFound,
    /// The project path was empty; usage was printed to stderr.
    Usage,
}

/// Scan `error_handler.h` under the project root and write the lookup table.
pub fn run(args: &Args) -> Result<Outcome> {
    if args.project_path.is_empty() {
        println!("No project root specified.");
        eprint!("{}", Args::command().render_help());
        return Ok(Outcome::Usage);
    }

    let layout = ProjectLayout::new(Path::new(&args.project_path));
    debug!("input: {}", layout.input.display());
    debug!("output: {}", layout.output.display());

    let records = scan_file(&layout.input)?;
    if records.is_empty() {
        println!("No error information found ???");
        return Ok(Outcome::NothingFound);
    }

    let dest = if args.dry_run {
        Destination::Stdout
    } else {
        Destination::File(layout.output.clone())
    };
    emit(&layout.license, &records, &dest)?;
    Ok(Outcome::Generated(records.len()))
}
