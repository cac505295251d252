//! Raw field values gathered by a front end

use crate::error::QueryError;
use crate::request::{FROM_VERSION_FIELD, LIMIT_FIELD, TransactionQueryRequest};

/// Unvalidated form input
///
/// Numeric fields hold the text exactly as entered, `None` when left empty.
/// Checkboxes start out checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryForm {
    pub from_version: Option<String>,
    pub limit: Option<String>,
    pub include_events: bool,
    pub prettify: bool,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            from_version: None,
            limit: None,
            include_events: true,
            prettify: true,
        }
    }
}

impl QueryForm {
    /// Create an empty form with both checkboxes checked
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `fromVersion` text (builder pattern)
    #[must_use]
    #[inline]
    pub fn from_version<S: Into<String>>(mut self, value: S) -> Self {
        self.from_version = Some(value.into());
        self
    }

    /// Set the `limit` text (builder pattern)
    #[must_use]
    #[inline]
    pub fn limit<S: Into<String>>(mut self, value: S) -> Self {
        self.limit = Some(value.into());
        self
    }

    /// Set the `includeEvents` checkbox (builder pattern)
    #[must_use]
    #[inline]
    pub const fn include_events(mut self, checked: bool) -> Self {
        self.include_events = checked;
        self
    }

    /// Set the `prettify` checkbox (builder pattern)
    #[must_use]
    #[inline]
    pub const fn prettify(mut self, checked: bool) -> Self {
        self.prettify = checked;
        self
    }
}

impl TryFrom<&QueryForm> for TransactionQueryRequest {
    type Error = QueryError;

    fn try_from(form: &QueryForm) -> Result<Self, Self::Error> {
        let from_version = parse_required_u64(FROM_VERSION_FIELD, form.from_version.as_deref())?;
        let limit = parse_required_u64(LIMIT_FIELD, form.limit.as_deref())?;

        Ok(Self::new(from_version, limit)?
            .with_include_events(form.include_events)
            .with_prettify(form.prettify))
    }
}

impl TryFrom<QueryForm> for TransactionQueryRequest {
    type Error = QueryError;

    #[inline]
    fn try_from(form: QueryForm) -> Result<Self, Self::Error> {
        <Self as TryFrom<&QueryForm>>::try_from(&form)
    }
}

/// Parse a required base-10 field, surrounding whitespace allowed
fn parse_required_u64(field: &str, value: Option<&str>) -> Result<u64, QueryError> {
    let text = value.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(QueryError::invalid_argument(field, "value is required"));
    }

    // u64::from_str would also take a leading '+'
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QueryError::invalid_argument(
            field,
            format!("'{text}' is not a non-negative base-10 integer"),
        ));
    }

    text.parse::<u64>().map_err(|e| {
        return QueryError::invalid_argument(field, format!("'{text}' is out of range: {e}"));
    })
}
