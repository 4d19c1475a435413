use serde::{Deserialize, Serialize};

/// The three forms the page exposes.
///
/// Each kind is bound to a fixed backend endpoint and decides which image
/// link of the shared response contract it reads (`image_url` for the
/// single-image forms, `composite_url` for composition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    /// Single image upload, posted to `/upload`.
    Upload,
    /// Free-text suggestion request, posted to `/suggest`.
    Suggest,
    /// Body photo plus clothing images, posted to `/compose`.
    Compose,
}

/// Order in which a successful result is laid out in its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLayout {
    /// Heading, suggestion list, then the outfit image if any.
    SuggestionsFirst,
    /// Composite image if any, then heading and suggestion list.
    CompositeFirst,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::Upload, FormKind::Suggest, FormKind::Compose];

    /// Default endpoint path for this form.
    pub fn endpoint(self) -> &'static str {
        match self {
            FormKind::Upload => "/upload",
            FormKind::Suggest => "/suggest",
            FormKind::Compose => "/compose",
        }
    }

    pub fn layout(self) -> ResultLayout {
        match self {
            FormKind::Upload | FormKind::Suggest => ResultLayout::SuggestionsFirst,
            FormKind::Compose => ResultLayout::CompositeFirst,
        }
    }

    /// Whether a success for this form carries `composite_url` instead of `image_url`.
    pub fn reads_composite(self) -> bool {
        matches!(self, FormKind::Compose)
    }
}
