//! Stencil CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use stencil::ImportError;
use stencil_cli::{Args, error_adapter::ErrorAdapter};

/// Sets up `env_logger`, falling back to `warn` for unknown level names.
fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}

fn report(err: &ImportError) {
    let mut rendered = String::new();
    miette::GraphicalReportHandler::new()
        .render_report(&mut rendered, &ErrorAdapter(err))
        .expect("Writing to String buffer is infallible");
    error!("{rendered}");
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match stencil_cli::run(&args) {
        Ok(summary) => {
            // The status line goes to stdout whatever the log level.
            println!("{summary}");
            info!("Import finished");
        }
        Err(err) => {
            report(&err);
            process::exit(1);
        }
    }
}
