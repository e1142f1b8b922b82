//! Input validation for untrusted query strings.
//!
//! Limits here only guard the transport. Any query that passes them always
//! produces a chart, however odd its contents.

use axum::http::StatusCode;
use chart_core::ChartParams;
use thiserror::Error;

/// Maximum raw query string length in bytes.
pub const MAX_QUERY_LEN: usize = 16_384;
/// Maximum number of query parameters.
pub const MAX_PARAM_COUNT: usize = 256;

/// Validation error types.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Query string exceeds maximum length.
    #[error("query string too long (max {MAX_QUERY_LEN} bytes)")]
    QueryTooLong,
    /// Too many parameters in the query string.
    #[error("too many query parameters (max {MAX_PARAM_COUNT})")]
    TooManyParams,
}

impl ValidationError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::QueryTooLong => StatusCode::URI_TOO_LONG,
            Self::TooManyParams => StatusCode::BAD_REQUEST,
        }
    }

    /// Short label for metrics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::QueryTooLong => "query_len",
            Self::TooManyParams => "param_count",
        }
    }
}

/// Validate raw query string length.
///
/// # Errors
///
/// Returns [`ValidationError::QueryTooLong`] if the query exceeds 16 KiB.
pub fn validate_query_len(query: &str) -> Result<(), ValidationError> {
    if query.len() > MAX_QUERY_LEN {
        return Err(ValidationError::QueryTooLong);
    }
    Ok(())
}

/// Validate the number of decoded parameters.
///
/// # Errors
///
/// Returns [`ValidationError::TooManyParams`] if there are more than 256.
pub fn validate_param_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_PARAM_COUNT {
        return Err(ValidationError::TooManyParams);
    }
    Ok(())
}

/// Validate and decode a raw `application/x-www-form-urlencoded` query.
///
/// A missing query decodes to an empty parameter mapping.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the query breaks a transport limit.
pub fn parse_query(raw: Option<&str>) -> Result<ChartParams, ValidationError> {
    let raw = raw.unwrap_or_default();
    validate_query_len(raw)?;

    let params: ChartParams = url::form_urlencoded::parse(raw.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    validate_param_count(params.len())?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_decodes_in_order() {
        let params =
            parse_query(Some("line-2=1%2C2&line-1=%5B1%2C2%5D&legend-1=Two+words")).expect("valid");
        assert_eq!(params.keys_with_prefix("line"), vec!["line-2", "line-1"]);
        assert_eq!(params.get("line-1"), Some("[1,2]"));
        assert_eq!(params.get("legend-1"), Some("Two words"));
    }

    #[test]
    fn test_parse_query_missing() {
        let params = parse_query(None).expect("valid");
        assert!(params.is_empty());
    }

    #[test]
    fn test_query_length_boundary() {
        assert!(validate_query_len(&"x".repeat(MAX_QUERY_LEN)).is_ok());
        let err = validate_query_len(&"x".repeat(MAX_QUERY_LEN + 1)).expect_err("too long");
        assert_eq!(err.status_code(), StatusCode::URI_TOO_LONG);
    }

    #[test]
    fn test_param_count_boundary() {
        assert!(validate_param_count(MAX_PARAM_COUNT).is_ok());
        let err = validate_param_count(MAX_PARAM_COUNT + 1).expect_err("too many");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "param_count");
    }

    #[test]
    fn test_too_many_params_rejected() {
        let query = (0..=MAX_PARAM_COUNT)
            .map(|i| format!("k{i}=1"))
            .collect::<Vec<_>>()
            .join("&");
        assert!(matches!(
            parse_query(Some(query.as_str())),
            Err(ValidationError::TooManyParams)
        ));
    }

    #[test]
    fn test_error_messages() {
        assert!(ValidationError::QueryTooLong.to_string().contains("16384"));
        assert!(ValidationError::TooManyParams.to_string().contains("256"));
    }
}
