use std::process;

use clap::Parser;

use build_error_table::cli::Args;

fn main() {
    let args = Args::parse();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = args.log_override() {
        logger.filter_module("build_error_table", level);
    }
    logger.init();

    if let Err(e) = build_error_table::run(&args) {
        eprintln!("error: {e:#}");
        process::exit(2);
    }
}
