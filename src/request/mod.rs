//! Transaction query descriptors
//!
//! A [`TransactionQueryRequest`] is the validated, immutable description of a
//! single `get_transactions` invocation. Front ends gather raw values into a
//! [`QueryForm`] and convert it with `TryFrom`.

pub mod form;

pub use form::QueryForm;

use crate::error::QueryError;
use serde::Serialize;

/// Field name of the starting version, as spelled on the command line
pub const FROM_VERSION_FIELD: &str = "fromVersion";

/// Field name of the page size, as spelled on the command line
pub const LIMIT_FIELD: &str = "limit";

/// Validated `get_transactions` request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQueryRequest {
    from_version: u64,
    limit: u64,
    include_events: bool,
    prettify: bool,
}

impl TransactionQueryRequest {
    /// Create a request with events included and prettified output
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `limit` is zero
    #[inline]
    pub fn new(from_version: u64, limit: u64) -> Result<Self, QueryError> {
        if limit == 0 {
            return Err(QueryError::invalid_argument(
                LIMIT_FIELD,
                "must be a positive integer",
            ));
        }

        Ok(Self {
            from_version,
            limit,
            include_events: true,
            prettify: true,
        })
    }

    /// Return a copy with the given `includeEvents` setting
    #[must_use]
    #[inline]
    pub const fn with_include_events(self, include_events: bool) -> Self {
        Self {
            include_events,
            ..self
        }
    }

    /// Return a copy with the given `prettify` setting
    #[must_use]
    #[inline]
    pub const fn with_prettify(self, prettify: bool) -> Self {
        Self { prettify, ..self }
    }

    /// First transaction version to fetch
    #[must_use]
    #[inline]
    pub const fn from_version(&self) -> u64 {
        self.from_version
    }

    /// Maximum number of transactions to fetch
    #[must_use]
    #[inline]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    #[must_use]
    #[inline]
    pub const fn include_events(&self) -> bool {
        self.include_events
    }

    #[must_use]
    #[inline]
    pub const fn prettify(&self) -> bool {
        self.prettify
    }

    /// Check the request against a server-side page size limit
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `limit` exceeds `page_size_limit`
    #[inline]
    pub fn check_page_size(&self, page_size_limit: u64) -> Result<(), QueryError> {
        if self.limit > page_size_limit {
            return Err(QueryError::invalid_argument(
                LIMIT_FIELD,
                format!(
                    "{} exceeds the page size limit of {page_size_limit}",
                    self.limit
                ),
            ));
        }
        Ok(())
    }
}
