//! Component state for one submission form.
//!
//! Holds the form's node reference, its request tracker, the last applied
//! outcome and one preview set per file field.

use common::config::{FieldSpec, FormSpec};
use common::model::form::FormKind;
use common::model::preview::PreviewSet;
use common::model::render::{blocks_for, Block};
use common::model::result::SubmissionResult;
use common::submissions::{SubmissionPhase, SubmissionTracker};
use yew::prelude::*;

use crate::components::preview::Thumbnail;

/// Main state container for the `SubmissionForm` component.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct SubmissionForm {
    /// Reference to the `<form>` element serialized on submit.
    pub form_ref: NodeRef,

    /// Sequence numbers and cancellation flags for this form's requests.
    pub tracker: SubmissionTracker,

    /// Outcome currently shown in the result container.
    pub outcome: Option<SubmissionResult>,

    /// Preview sets keyed by multipart field name, in field order.
    pub previews: Vec<(String, PreviewSet<Thumbnail>)>,
}

impl SubmissionForm {
    pub fn new(spec: &FormSpec) -> Self {
        let previews = spec
            .fields
            .iter()
            .filter_map(|field| {
                field
                    .preview_policy()
                    .map(|policy| (field.name.clone(), PreviewSet::new(policy)))
            })
            .collect();

        Self {
            form_ref: NodeRef::default(),
            tracker: SubmissionTracker::new(),
            outcome: None,
            previews,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        SubmissionPhase::current(self.tracker.is_loading(), self.outcome.as_ref())
    }

    pub fn previews_for(&self, field: &str) -> Option<&PreviewSet<Thumbnail>> {
        self.previews
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, set)| set)
    }

    pub fn previews_for_mut(&mut self, field: &str) -> Option<&mut PreviewSet<Thumbnail>> {
        self.previews
            .iter_mut()
            .find(|(name, _)| name == field)
            .map(|(_, set)| set)
    }

    /// Files of the append-policy fields, which the input element alone no
    /// longer holds once more than one selection was made.
    pub fn accumulated_files(&self, spec: &FormSpec) -> Vec<(String, Vec<web_sys::File>)> {
        spec.fields
            .iter()
            .filter(|field| field.accumulates_files())
            .filter_map(|field| {
                self.previews_for(&field.name).map(|set| {
                    let files = set.items().iter().map(|t| t.file().clone()).collect();
                    (field.name.clone(), files)
                })
            })
            .collect()
    }

    /// Required append-policy field that has no accumulated files yet.
    pub fn unfilled_field<'a>(&self, spec: &'a FormSpec) -> Option<&'a FieldSpec> {
        spec.unfilled_accumulating_field(|name| self.previews_for(name).map_or(0, PreviewSet::len))
    }

    /// Content of the result container for the current outcome.
    pub fn blocks(&self, kind: FormKind) -> Vec<Block> {
        self.outcome
            .as_ref()
            .map(|result| blocks_for(result, kind.layout()))
            .unwrap_or_default()
    }
}
