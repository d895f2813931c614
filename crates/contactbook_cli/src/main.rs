//! Contact book CLI entry point.
//!
//! # Responsibility
//! - Resolve configuration and start file logging.
//! - Drive the interactive menu on stdin/stdout.

mod config;
mod menu;

use config::CliConfig;
use contactbook_core::{core_version, init_logging, ContactStore};
use log::{error, info};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::from_env();

    let log_dir = config.log_dir.to_string_lossy();
    if let Err(err) = init_logging(&config.log_level, &log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
    info!("event=cli_start module=cli status=ok version={}", core_version());

    let mut store = ContactStore::new();
    let stdin = io::stdin();
    match menu::run_menu(&mut store, &config, stdin.lock(), io::stdout()) {
        Ok(()) => {
            info!("event=cli_exit module=cli status=ok contacts={}", store.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: terminal I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}
