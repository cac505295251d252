//! # `TxQuery`
//!
//! `TxQuery` builds the `get_transactions` command of a blockchain CLI from
//! individual field values, and decodes such commands back into request files.
//!
//! ## Usage
//!
//! **Encode:**
//! ```sh
//! txquery --from-version 10 --limit 5
//! # get_transactions --fromVersion 10 --limit 5 --includeEvents --prettify
//! ```
//!
//! **From a request file, as a JSON-RPC body:**
//! ```sh
//! txquery --config query.yaml --output-format json-rpc
//! ```
//!
//! **Decode:**
//! ```sh
//! txquery --decode "get_transactions --fromVersion 0 --limit 1 --includeEvents false"
//! ```
//!
//! See `txquery --help` for more options and details.

use clap::Parser as _;
use txquery::cli::Args;
use txquery::error::QueryError;
use txquery::system::real::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    // stdout carries only the command, so logs go to stderr
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let system = RealSystem::new();
    match txquery::run(&args, &system) {
        Ok(output) => {
            // Output to stdout (not using logging)
            println!("{}", output.trim_end());
            std::process::exit(0);
        }
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<QueryError>()
                    .map_or(1, QueryError::exit_code),
            );
        }
    }
}
