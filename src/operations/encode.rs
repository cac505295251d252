//! Command encoder: descriptor to `get_transactions` command string and back
//!
//! The canonical form is
//!
//! ```text
//! get_transactions --fromVersion <N> --limit <N> --includeEvents[ false][ --prettify]
//! ```
//!
//! `--includeEvents` is always emitted; excluding events appends the bare token
//! `false` after it. [`decode`] accepts only this exact form, so every string it
//! accepts re-encodes to itself byte-for-byte.

use crate::error::QueryError;
use crate::request::{QueryForm, TransactionQueryRequest};

/// Name of the CLI command
pub const COMMAND_NAME: &str = "get_transactions";

pub const FROM_VERSION_FLAG: &str = "--fromVersion";
pub const LIMIT_FLAG: &str = "--limit";
pub const INCLUDE_EVENTS_FLAG: &str = "--includeEvents";
pub const PRETTIFY_FLAG: &str = "--prettify";

/// Token following `--includeEvents` when events are excluded
const EXCLUDE_EVENTS_TOKEN: &str = "false";

/// Encode a request into its canonical command string
#[must_use]
#[inline]
pub fn encode(request: &TransactionQueryRequest) -> String {
    command_tokens(request).join(" ")
}

/// Validate raw form input and encode it
///
/// # Errors
///
/// Returns `InvalidArgument` if `fromVersion` or `limit` is missing,
/// non-numeric, or if `limit` is zero
#[inline]
pub fn encode_form(form: &QueryForm) -> Result<String, QueryError> {
    let request = TransactionQueryRequest::try_from(form)?;
    Ok(encode(&request))
}

/// Split a request into the argv tokens of its command
#[must_use]
pub fn command_tokens(request: &TransactionQueryRequest) -> Vec<String> {
    let mut tokens = vec![
        COMMAND_NAME.to_owned(),
        FROM_VERSION_FLAG.to_owned(),
        request.from_version().to_string(),
        LIMIT_FLAG.to_owned(),
        request.limit().to_string(),
        INCLUDE_EVENTS_FLAG.to_owned(),
    ];

    if !request.include_events() {
        tokens.push(EXCLUDE_EVENTS_TOKEN.to_owned());
    }

    if request.prettify() {
        tokens.push(PRETTIFY_FLAG.to_owned());
    }

    tokens
}

/// Decode a canonical command string back into a request
///
/// # Errors
///
/// Returns `ParseError` if the string does not start with `get_transactions`,
/// is missing a required flag or value, contains unexpected tokens, or uses
/// anything but single spaces between tokens
pub fn decode(command: &str) -> Result<TransactionQueryRequest, QueryError> {
    let mut tokens = Tokens::new(command);

    match tokens.next()? {
        Some(COMMAND_NAME) => {}
        Some(other) => {
            return Err(QueryError::parse(format!(
                "expected command '{COMMAND_NAME}' at position {}, found '{other}'",
                tokens.position
            )));
        }
        None => return Err(QueryError::parse("empty command")),
    }

    tokens.expect_flag(FROM_VERSION_FLAG)?;
    let from_version = tokens.expect_number(FROM_VERSION_FLAG)?;

    tokens.expect_flag(LIMIT_FLAG)?;
    let limit = tokens.expect_number(LIMIT_FLAG)?;
    if limit == 0 {
        return Err(QueryError::parse(format!(
            "value '0' for '{LIMIT_FLAG}' at position {} must be a positive integer",
            tokens.position
        )));
    }

    tokens.expect_flag(INCLUDE_EVENTS_FLAG)?;

    let mut include_events = true;
    let mut prettify = false;
    let mut next = tokens.next()?;

    if next == Some(EXCLUDE_EVENTS_TOKEN) {
        include_events = false;
        next = tokens.next()?;
    }

    if next == Some(PRETTIFY_FLAG) {
        prettify = true;
        next = tokens.next()?;
    }

    if let Some(extra) = next {
        return Err(QueryError::parse(format!(
            "unexpected token '{extra}' at position {}",
            tokens.position
        )));
    }

    // limit was checked above, so `new` cannot fail here
    TransactionQueryRequest::new(from_version, limit)
        .map(|request| {
            return request
                .with_include_events(include_events)
                .with_prettify(prettify);
        })
        .map_err(|e| QueryError::parse(e.to_string()))
}

/// Strict single-space tokenizer over a command string
struct Tokens<'a> {
    parts: core::str::Split<'a, char>,
    /// 1-based index of the last token returned
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(command: &'a str) -> Self {
        Self {
            parts: command.split(' '),
            position: 0,
        }
    }

    /// Next token, `None` at end of input
    fn next(&mut self) -> Result<Option<&'a str>, QueryError> {
        let Some(part) = self.parts.next() else {
            return Ok(None);
        };
        self.position += 1;

        if part.is_empty() {
            // Leading, trailing or doubled space; a fully empty command lands here too
            if self.position == 1 && self.parts.clone().next().is_none() {
                return Ok(None);
            }
            return Err(QueryError::parse(format!(
                "empty token at position {} (tokens must be separated by single spaces)",
                self.position
            )));
        }

        if part.chars().any(char::is_whitespace) {
            return Err(QueryError::parse(format!(
                "token '{}' at position {} contains non-space whitespace",
                part.escape_debug(),
                self.position
            )));
        }

        Ok(Some(part))
    }

    fn expect_flag(&mut self, flag: &str) -> Result<(), QueryError> {
        match self.next()? {
            Some(token) if token == flag => Ok(()),
            Some(token) => Err(QueryError::parse(format!(
                "expected '{flag}' at position {}, found '{token}'",
                self.position
            ))),
            None => Err(QueryError::parse(format!("missing required flag '{flag}'"))),
        }
    }

    fn expect_number(&mut self, flag: &str) -> Result<u64, QueryError> {
        let Some(token) = self.next()? else {
            return Err(QueryError::parse(format!("missing value for '{flag}'")));
        };

        let canonical = !token.is_empty()
            && token.bytes().all(|b| b.is_ascii_digit())
            && (token == "0" || !token.starts_with('0'));
        if !canonical {
            return Err(QueryError::parse(format!(
                "value '{token}' for '{flag}' at position {} is not a canonical base-10 integer",
                self.position
            )));
        }

        token.parse::<u64>().map_err(|e| {
            return QueryError::parse(format!(
                "value '{token}' for '{flag}' at position {} is out of range: {e}",
                self.position
            ));
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "These are unit tests")]
mod tests {
    use super::*;

    fn request(from_version: u64, limit: u64, events: bool, pretty: bool) -> TransactionQueryRequest {
        TransactionQueryRequest::new(from_version, limit)
            .unwrap()
            .with_include_events(events)
            .with_prettify(pretty)
    }

    #[test]
    fn encode_all_flags_set() {
        assert_eq!(
            encode(&request(10, 5, true, true)),
            "get_transactions --fromVersion 10 --limit 5 --includeEvents --prettify"
        );
    }

    #[test]
    fn encode_all_flags_cleared() {
        assert_eq!(
            encode(&request(0, 1, false, false)),
            "get_transactions --fromVersion 0 --limit 1 --includeEvents false"
        );
    }

    #[test]
    fn encode_excluded_events_with_prettify() {
        assert_eq!(
            encode(&request(7, 3, false, true)),
            "get_transactions --fromVersion 7 --limit 3 --includeEvents false --prettify"
        );
    }

    #[test]
    fn command_tokens_match_encoding() {
        let req = request(1, 2, false, true);
        assert_eq!(command_tokens(&req).join(" "), encode(&req));
        assert_eq!(command_tokens(&req)[0], COMMAND_NAME);
    }

    #[test]
    fn decode_empty_command() {
        let err = decode("").unwrap_err();
        assert_eq!(err, QueryError::parse("empty command"));
    }

    #[test]
    fn decode_reports_position() {
        let err = decode("get_transactions --fromVersion 1 --limit 2 --verbose").unwrap_err();
        assert!(err.to_string().contains("position 6"), "{err}");
    }

    #[test]
    fn decode_wrong_command_reports_position() {
        let err = decode("bogus").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error: expected command 'get_transactions' at position 1, found 'bogus'"
        );
    }

    #[test]
    fn decode_zero_limit_reports_token_and_position() {
        let err = decode("get_transactions --fromVersion 1 --limit 0 --includeEvents").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error: value '0' for '--limit' at position 5 must be a positive integer"
        );
    }

    #[test]
    fn decode_rejects_tabs() {
        let err = decode("get_transactions\t--fromVersion 1 --limit 2 --includeEvents").unwrap_err();
        assert!(err.to_string().contains("non-space whitespace"), "{err}");
    }

    #[test]
    fn decode_rejects_leading_zero() {
        decode("get_transactions --fromVersion 01 --limit 2 --includeEvents").unwrap_err();
        decode("get_transactions --fromVersion 0 --limit 2 --includeEvents").unwrap();
    }
}
