//! YAML request file loading and parsing

use crate::config::QueryConfig;
use crate::error::QueryError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Load and parse a YAML request file
///
/// # Errors
///
/// Returns a `Configuration` error if the file is missing, unreadable, not
/// valid YAML, or does not match the request file schema
pub fn load_config(system: &dyn System, path: &str) -> Result<QueryConfig> {
    let path_obj = Path::new(path);

    if !system.is_file(path_obj) {
        return Err(QueryError::configuration(format!(
            "Request file not found: {path}\n\
            Create a request file or specify a different path with --config"
        ))
        .into());
    }

    let content = system
        .read_to_string(path_obj)
        .map_err(|e| QueryError::configuration(format!("Failed to read request file {path}: {e}")))?;

    debug!("Loaded request file {path} ({} bytes)", content.len());

    parse_config(&content).with_context(|| format!("Invalid request file: {path}"))
}

/// Parse and validate request file content
///
/// # Errors
///
/// Returns a `Configuration` error if the content is not valid YAML or fails schema validation
pub fn parse_config(content: &str) -> Result<QueryConfig> {
    // An empty document means "no values"
    if content.trim().is_empty() {
        return Ok(QueryConfig::default());
    }

    let value: Value = serde_yaml::from_str(content).map_err(|e| {
        if let Some(location) = e.location() {
            return QueryError::configuration(format!(
                "Failed to parse YAML at line {}, column {}: {e}",
                location.line(),
                location.column()
            ));
        }
        QueryError::configuration(format!("Failed to parse YAML: {e}"))
    })?;

    crate::config::schema::validate_against_schema(&value)
        .map_err(|e| QueryError::configuration(e.to_string()))?;

    let config: QueryConfig = serde_json::from_value(value)
        .map_err(|e| QueryError::configuration(format!("Failed to read request fields: {e}")))?;

    Ok(config)
}
