//! Properties for the `SubmissionForm` component.

use common::config::FormSpec;
use yew::prelude::*;

/// Properties for the `SubmissionForm` component.
///
/// The component never looks anything up in the document: its endpoint,
/// element ids and fields all come from `spec`.
#[derive(Properties, PartialEq, Clone)]
pub struct SubmissionFormProps {
    pub spec: FormSpec,

    /// Prefix joined in front of `spec.endpoint`. Empty means same origin.
    #[prop_or_default]
    pub api_base: String,
}
