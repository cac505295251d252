//! `TxQuery` - A CLI tool for building and parsing `get_transactions` commands
//!
//! This library turns the field values of a transaction query (starting
//! version, page size, event and formatting switches) into the canonical
//! `get_transactions` command string of a blockchain CLI, and parses such
//! strings back into a validated request.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod request;
pub mod system;

use anyhow::Result;
use cli::Args;
use config::QueryConfig;
use operations::encode::decode;
use operations::to_command_line::{OutputFormat, generate_command_line};
use request::TransactionQueryRequest;
use system::System;
use tracing::{debug, info};

/// Main entry point for the txquery library
///
/// Returns the text to print on stdout.
///
/// # Errors
///
/// Returns an error if the request file is invalid, a field is missing or
/// malformed, or a command passed to `--decode` cannot be parsed
pub fn run(args: &Args, system: &dyn System) -> Result<String> {
    if let Some(command) = args.decode.as_deref() {
        return run_decode(command);
    }

    let format = args
        .output_format
        .parse::<OutputFormat>()
        .map_err(|e| error::QueryError::invalid_argument("output-format", e))?;

    run_encode(args, system, format)
}

/// Build a request from the request file and CLI values, then render it
///
/// # Errors
///
/// Returns an error if the request file is invalid or the merged values do
/// not form a valid request
pub fn run_encode(args: &Args, system: &dyn System, format: OutputFormat) -> Result<String> {
    let config = match args.config.as_deref() {
        Some(path) => QueryConfig::load_from_file(system, path)?,
        None => QueryConfig::default(),
    };

    let form = args.merge_form(&config);
    debug!("Merged form values: {form:?}");

    let request = TransactionQueryRequest::try_from(&form)?;
    request.check_page_size(args.page_size_limit(&config))?;

    info!(
        "Encoding get_transactions from version {} (limit {}) as {format}",
        request.from_version(),
        request.limit()
    );

    generate_command_line(&request, format)
}

/// Parse a command string and render it as a YAML request file
///
/// # Errors
///
/// Returns a `ParseError` if the command is not a canonical `get_transactions` invocation
pub fn run_decode(command: &str) -> Result<String> {
    let request = decode(command)?;
    debug!("Decoded request: {request:?}");

    QueryConfig::from(&request).to_yaml()
}
