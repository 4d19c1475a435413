//! Interpretation of a settled submission.
//!
//! The frontend hands over the HTTP ok flag and the raw body text; everything
//! after that (JSON decoding, picking the right image link, falling back to the
//! generic message) happens here so it can be tested without a browser.

use crate::model::form::FormKind;
use crate::model::suggestion::{ErrorResponse, SuggestionResponse};

/// Message shown whenever the server gives no usable explanation.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Outcome of one submission, built fresh for every request.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    Success {
        suggestions: Vec<String>,
        image_url: Option<String>,
        composite_url: Option<String>,
    },
    Failure {
        message: String,
    },
}

/// Reasons a response body could not be turned into a result.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("failure response carries no error message")]
    MissingMessage,
}

impl SubmissionResult {
    pub fn failure(message: impl Into<String>) -> Self {
        SubmissionResult::Failure {
            message: message.into(),
        }
    }

    /// Failure carrying [`GENERIC_FAILURE`].
    pub fn generic_failure() -> Self {
        Self::failure(GENERIC_FAILURE)
    }

    /// Builds the result for a settled response of `kind`.
    ///
    /// Never fails: any decoding problem on either branch collapses into
    /// [`SubmissionResult::generic_failure`].
    pub fn from_response(kind: FormKind, ok: bool, body: &str) -> Self {
        if ok {
            parse_success(kind, body).unwrap_or_else(|_| Self::generic_failure())
        } else {
            match parse_failure(body) {
                Ok(message) => Self::failure(message),
                Err(_) => Self::generic_failure(),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }
}

/// Decodes an ok body, keeping only the image link relevant to `kind`.
pub fn parse_success(kind: FormKind, body: &str) -> Result<SubmissionResult, ResponseError> {
    let response: SuggestionResponse = serde_json::from_str(body)?;

    let (image_url, composite_url) = if kind.reads_composite() {
        (None, non_empty(response.composite_url))
    } else {
        (non_empty(response.image_url), None)
    };

    Ok(SubmissionResult::Success {
        suggestions: response.suggestions,
        image_url,
        composite_url,
    })
}

/// Extracts the server-provided message from a not-ok body.
pub fn parse_failure(body: &str) -> Result<String, ResponseError> {
    let response: ErrorResponse = serde_json::from_str(body)?;
    response
        .error
        .filter(|message| !message.trim().is_empty())
        .ok_or(ResponseError::MissingMessage)
}

// An empty link is as good as no link: nothing to point an <img> at.
fn non_empty(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_body_becomes_success() {
        let result = SubmissionResult::from_response(
            FormKind::Upload,
            true,
            r#"{"suggestions":["A","B"],"image_url":"/static/a.png"}"#,
        );
        assert_eq!(
            result,
            SubmissionResult::Success {
                suggestions: vec!["A".to_string(), "B".to_string()],
                image_url: Some("/static/a.png".to_string()),
                composite_url: None,
            }
        );
    }

    #[test]
    fn compose_reads_composite_url_only() {
        let body = r#"{"suggestions":[],"image_url":"/x.png","composite_url":"/c.png"}"#;
        match SubmissionResult::from_response(FormKind::Compose, true, body) {
            SubmissionResult::Success {
                image_url,
                composite_url,
                ..
            } => {
                assert_eq!(image_url, None);
                assert_eq!(composite_url.as_deref(), Some("/c.png"));
            }
            other => panic!("Expected success, got {other:?}"),
        }
    }

    #[test]
    fn upload_ignores_composite_url() {
        let body = r#"{"suggestions":["A"],"composite_url":"/c.png"}"#;
        match SubmissionResult::from_response(FormKind::Upload, true, body) {
            SubmissionResult::Success {
                image_url,
                composite_url,
                ..
            } => {
                assert_eq!(image_url, None);
                assert_eq!(composite_url, None);
            }
            other => panic!("Expected success, got {other:?}"),
        }
    }

    #[test]
    fn empty_and_null_links_count_as_absent() {
        for body in [
            r#"{"suggestions":["A"],"image_url":""}"#,
            r#"{"suggestions":["A"],"image_url":null}"#,
        ] {
            match SubmissionResult::from_response(FormKind::Suggest, true, body) {
                SubmissionResult::Success { image_url, .. } => assert_eq!(image_url, None),
                other => panic!("Expected success, got {other:?}"),
            }
        }
    }

    #[test]
    fn error_field_is_used_on_not_ok() {
        let result =
            SubmissionResult::from_response(FormKind::Upload, false, r#"{"error":"too large"}"#);
        assert_eq!(result, SubmissionResult::failure("too large"));
    }

    #[test]
    fn unparsable_failure_body_falls_back() {
        let result = SubmissionResult::from_response(FormKind::Upload, false, "<html>502</html>");
        assert_eq!(result, SubmissionResult::failure(GENERIC_FAILURE));
    }

    #[test]
    fn missing_or_blank_error_falls_back() {
        for body in ["{}", r#"{"error":null}"#, r#"{"error":"  "}"#, r#"{"error":42}"#] {
            let result = SubmissionResult::from_response(FormKind::Compose, false, body);
            assert_eq!(result, SubmissionResult::generic_failure(), "body: {body}");
        }
    }

    #[test]
    fn malformed_ok_body_is_a_failure() {
        let result = SubmissionResult::from_response(FormKind::Suggest, true, "not json");
        assert_eq!(result, SubmissionResult::generic_failure());
    }

    #[test]
    fn ok_body_without_suggestions_is_a_failure() {
        for body in [
            r#"{"image_url":"/a.png"}"#,
            r#"{"suggestions":"A"}"#,
            r#"{"suggestions":[1]}"#,
        ] {
            let result = SubmissionResult::from_response(FormKind::Upload, true, body);
            assert!(!result.is_success(), "body: {body}");
        }
    }

    #[test]
    fn parse_failure_reports_missing_message() {
        assert!(matches!(parse_failure("{}"), Err(ResponseError::MissingMessage)));
        assert!(matches!(parse_failure("]"), Err(ResponseError::Malformed(_))));
    }
}
