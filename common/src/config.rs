//! Page configuration: which forms exist, where they post and which fields
//! they carry.
//!
//! The frontend starts from [`PageConfig::default`] and may replace it with a
//! JSON block embedded in the page. Every form component receives its
//! [`FormSpec`] explicitly instead of looking elements up in the document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::form::FormKind;
use crate::model::preview::PreviewPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page config declares no forms")]
    NoForms,

    #[error("form kind {0:?} is declared more than once")]
    DuplicateKind(FormKind),

    #[error("element id `{0}` is used more than once")]
    DuplicateElementId(String),

    #[error("form `{0}` has no fields")]
    NoFields(String),

    #[error("endpoint `{0}` must start with `/`")]
    InvalidEndpoint(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldInput {
    Text {
        #[serde(default)]
        placeholder: String,
        #[serde(default)]
        required: bool,
    },
    File {
        #[serde(default)]
        multiple: bool,
        #[serde(default)]
        preview: PreviewPolicy,
        #[serde(default)]
        required: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Multipart field name.
    pub name: String,
    pub label: String,
    pub input: FieldInput,
}

impl FieldSpec {
    pub fn file(name: &str, label: &str, multiple: bool, preview: PreviewPolicy) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input: FieldInput::File {
                multiple,
                preview,
                required: true,
            },
        }
    }

    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input: FieldInput::Text {
                placeholder: placeholder.to_string(),
                required: true,
            },
        }
    }

    /// Preview policy of a file field, `None` for text fields.
    pub fn preview_policy(&self) -> Option<PreviewPolicy> {
        match self.input {
            FieldInput::File { preview, .. } => Some(preview),
            FieldInput::Text { .. } => None,
        }
    }

    /// File fields whose previews accumulate across selections.
    pub fn accumulates_files(&self) -> bool {
        self.preview_policy() == Some(PreviewPolicy::Append)
    }

    pub fn is_required(&self) -> bool {
        match self.input {
            FieldInput::Text { required, .. } | FieldInput::File { required, .. } => required,
        }
    }

    /// Shown when a required accumulating field has no files at submit time.
    pub fn missing_files_message(&self) -> String {
        format!("{} needs at least one file", self.label)
    }
}

/// Everything one form needs: its endpoint, element ids and fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSpec {
    pub kind: FormKind,
    pub title: String,
    pub endpoint: String,
    pub form_id: String,
    pub result_container_id: String,
    pub loading_id: String,
    pub submit_label: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    fn standard(kind: FormKind, title: &str, submit_label: &str, fields: Vec<FieldSpec>) -> Self {
        let prefix = match kind {
            FormKind::Upload => "upload",
            FormKind::Suggest => "suggest",
            FormKind::Compose => "compose",
        };
        Self {
            kind,
            title: title.to_string(),
            endpoint: kind.endpoint().to_string(),
            form_id: format!("{prefix}-form"),
            result_container_id: format!("{prefix}-result"),
            loading_id: format!("{prefix}-loading"),
            submit_label: submit_label.to_string(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// First required append-policy field for which `file_count` reports no
    /// files.
    ///
    /// Those inputs are emptied after every pick, so the browser cannot
    /// enforce `required` on them; the accumulated previews are checked here.
    pub fn unfilled_accumulating_field<F>(&self, file_count: F) -> Option<&FieldSpec>
    where
        F: Fn(&str) -> usize,
    {
        self.fields
            .iter()
            .filter(|field| field.accumulates_files() && field.is_required())
            .find(|field| file_count(&field.name) == 0)
    }

    fn element_ids(&self) -> [&str; 3] {
        [
            self.form_id.as_str(),
            self.result_container_id.as_str(),
            self.loading_id.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Prefix for every endpoint path; empty means same origin.
    #[serde(default)]
    pub api_base: String,
    pub forms: Vec<FormSpec>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            forms: vec![
                FormSpec::standard(
                    FormKind::Upload,
                    "Upload a photo",
                    "Get suggestions",
                    vec![FieldSpec::file("image", "Photo", false, PreviewPolicy::Replace)],
                ),
                FormSpec::standard(
                    FormKind::Suggest,
                    "Describe an outfit",
                    "Suggest",
                    vec![FieldSpec::text("description", "Description", "casual outfit")],
                ),
                FormSpec::standard(
                    FormKind::Compose,
                    "Compose an outfit",
                    "Compose",
                    vec![
                        FieldSpec::file("body", "Body photo", false, PreviewPolicy::Replace),
                        FieldSpec::file("clothes", "Clothes", true, PreviewPolicy::Append),
                    ],
                ),
            ],
        }
    }
}

impl PageConfig {
    /// Parses and validates a full configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn form(&self, kind: FormKind) -> Option<&FormSpec> {
        self.forms.iter().find(|f| f.kind == kind)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.forms.is_empty() {
            return Err(ConfigError::NoForms);
        }

        let mut kinds = HashSet::new();
        let mut ids = HashSet::new();
        for form in &self.forms {
            if !kinds.insert(form.kind) {
                return Err(ConfigError::DuplicateKind(form.kind));
            }
            for id in form.element_ids() {
                if !ids.insert(id) {
                    return Err(ConfigError::DuplicateElementId(id.to_string()));
                }
            }
            if form.fields.is_empty() {
                return Err(ConfigError::NoFields(form.form_id.clone()));
            }
            if !form.endpoint.starts_with('/') {
                return Err(ConfigError::InvalidEndpoint(form.endpoint.clone()));
            }
        }
        Ok(())
    }
}
