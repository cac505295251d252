use clap::Parser;

use crate::config::QueryConfig;
use crate::request::QueryForm;

/// Command-line arguments for txquery
#[derive(Parser, Debug, Clone)]
#[command(name = "txquery")]
#[command(about = "A CLI tool for building and parsing get_transactions commands")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// First transaction version to fetch (non-negative integer)
    #[arg(long = "from-version", value_name = "VERSION")]
    pub from_version: Option<String>,

    /// Maximum number of transactions to fetch (positive integer)
    #[arg(long, value_name = "COUNT")]
    pub limit: Option<String>,

    /// Exclude events emitted by each transaction
    #[arg(long = "no-include-events")]
    pub no_include_events: bool,

    /// Do not ask the CLI to pretty-print its output
    #[arg(long = "no-prettify")]
    pub no_prettify: bool,

    /// YAML request file with default field values
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Largest limit the target server accepts [default: 1000]
    #[arg(
        long = "page-size-limit",
        value_name = "COUNT",
        env = "TXQUERY_PAGE_SIZE_LIMIT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub page_size_limit: Option<u64>,

    /// Decode a get_transactions command and print it as a request file
    #[arg(
        long,
        value_name = "COMMAND",
        conflicts_with_all = ["from_version", "limit", "no_include_events", "no_prettify", "config", "output_format"]
    )]
    pub decode: Option<String>,

    /// Output format: shell, json or json-rpc
    #[arg(long = "output-format", value_name = "FORMAT", default_value = "shell")]
    pub output_format: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Merge the request file (if any) with the values given on the command line
    ///
    /// Command-line values win over file values.
    #[must_use]
    pub fn merge_form(&self, config: &QueryConfig) -> QueryForm {
        let mut form = config.to_form();

        if let Some(from_version) = self.from_version.as_ref() {
            form.from_version = Some(from_version.clone());
        }
        if let Some(limit) = self.limit.as_ref() {
            form.limit = Some(limit.clone());
        }
        if self.no_include_events {
            form.include_events = false;
        }
        if self.no_prettify {
            form.prettify = false;
        }

        form
    }

    /// Page size limit from the command line, then the request file, then the default
    #[must_use]
    pub fn page_size_limit(&self, config: &QueryConfig) -> u64 {
        self.page_size_limit
            .unwrap_or_else(|| config.page_size_limit())
    }
}
