use serde::{Deserialize, Serialize};

/// Body returned by `/upload`, `/suggest` and `/compose` on an ok status.
///
/// `suggestions` is mandatory: a body without it does not deserialize, and the
/// caller turns that into a generic failure instead of guessing an empty list.
/// Only one of the two image links is meaningful for a given form, see
/// [`FormKind::reads_composite`](crate::model::form::FormKind::reads_composite).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub composite_url: Option<String>,
}

/// Body returned by the endpoints on a not-ok status.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}
