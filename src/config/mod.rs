//! Configuration management module
//!
//! Handles YAML request files, JSON schema validation, and merging file values
//! with command-line overrides

pub mod schema;
pub mod yaml;

use crate::request::{QueryForm, TransactionQueryRequest};
use crate::system::System;
use serde::{Deserialize, Serialize};

/// Largest page the JSON-RPC server hands out by default
pub const DEFAULT_PAGE_SIZE_LIMIT: u64 = 1000;

/// Contents of a YAML request file
///
/// Every field is optional; missing values fall back to command-line flags
/// or to the form defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QueryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_version: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_events: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prettify: Option<bool>,

    /// Maximum `limit` accepted before encoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size_limit: Option<u64>,
}

impl QueryConfig {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid request file
    #[inline]
    pub fn load_from_file(system: &dyn System, path: &str) -> anyhow::Result<Self> {
        yaml::load_config(system, path)
    }

    /// Seed a form with the values present in this file
    #[must_use]
    pub fn to_form(&self) -> QueryForm {
        let defaults = QueryForm::default();
        QueryForm {
            from_version: self.from_version.map(|v| v.to_string()),
            limit: self.limit.map(|v| v.to_string()),
            include_events: self.include_events.unwrap_or(defaults.include_events),
            prettify: self.prettify.unwrap_or(defaults.prettify),
        }
    }

    /// Effective page size limit
    #[must_use]
    #[inline]
    pub fn page_size_limit(&self) -> u64 {
        self.page_size_limit.unwrap_or(DEFAULT_PAGE_SIZE_LIMIT)
    }

    /// Serialize as a YAML request file
    ///
    /// # Errors
    ///
    /// Returns an error if YAML serialization fails
    #[inline]
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize request file: {e}"))
    }
}

impl From<&TransactionQueryRequest> for QueryConfig {
    fn from(request: &TransactionQueryRequest) -> Self {
        Self {
            from_version: Some(request.from_version()),
            limit: Some(request.limit()),
            include_events: Some(request.include_events()),
            prettify: Some(request.prettify()),
            page_size_limit: None,
        }
    }
}
