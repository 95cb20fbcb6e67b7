//! Terminal host for the attendance dashboard.
//!
//! # Responsibility
//! - Parse host configuration and start optional file logging.
//! - Own one roster for the lifetime of the process and draw it.

mod app;
mod config;
mod text;

use std::error::Error;
use std::process::ExitCode;

use attendance_core::{DashboardView, RosterStore};
use clap::Parser;
use log::info;

use crate::config::{CliArgs, OutputMode};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("attendance: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    args.init_logging()?;

    let mode = args.output_mode();
    info!("event=cli_start module=cli status=ok mode={mode:?}");

    let store = RosterStore::seeded();
    match mode {
        OutputMode::Interactive => app::run_tui(store)?,
        OutputMode::Snapshot => print!("{}", text::render_text(&DashboardView::render(&store))),
        OutputMode::Json => println!(
            "{}",
            serde_json::to_string_pretty(&DashboardView::render(&store))?
        ),
    }
    Ok(())
}
