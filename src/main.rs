//! climate-api CLI entry point
//!
//! Minimal entrypoint: parse arguments, dispatch, print errors to stderr
//! and exit non-zero on failure. All logic lives in the cli module.

use climate_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
