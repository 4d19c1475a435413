//! Network and form helpers for the submission form component.
//!
//! - **Payload**: serializing the `<form>` into `FormData`, with append-policy
//!   file fields rebuilt from their accumulated previews.
//! - **Transport**: posting the payload and turning the settled response into
//!   a `SubmissionResult`.
//! - **Inputs**: reading selected files and deciding how each field's input
//!   element behaves.

use common::config::FieldInput;
use common::model::form::FormKind;
use common::model::preview::PreviewPolicy;
use common::model::result::SubmissionResult;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData, HtmlFormElement, HtmlInputElement};

/// Serializes `form` into a multipart payload.
///
/// Fields listed in `accumulated` are replaced by the given files, so the
/// payload matches what the previews show rather than the input's last pick.
pub fn build_form_data(
    form: &HtmlFormElement,
    accumulated: &[(String, Vec<File>)],
) -> Result<FormData, JsValue> {
    let data = FormData::new_with_form(form)?;
    for (field, files) in accumulated {
        data.delete(field);
        for file in files {
            data.append_with_blob_and_filename(field, file, &file.name())?;
        }
    }
    Ok(data)
}

/// Posts `body` to `url` and interprets the settled response for `kind`.
///
/// `Err` is reserved for transport failures (request not built, connection
/// failed, body unreadable); HTTP errors and malformed bodies are
/// already folded into the returned `SubmissionResult`.
pub async fn send_submission(
    url: &str,
    kind: FormKind,
    body: FormData,
) -> Result<SubmissionResult, gloo_net::Error> {
    let response = Request::post(url).body(body)?.send().await?;

    let ok = response.ok();
    let text = response.text().await?;
    Ok(SubmissionResult::from_response(kind, ok, &text))
}

/// Files currently selected in a file input, in selection order.
pub fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// How the `<input>` of a field is rendered and treated after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBehaviour {
    pub is_file: bool,
    pub multiple: bool,
    pub required: bool,
    /// Clear the input after capturing its files so the same file can be
    /// picked again; the previews keep the accumulated selection.
    pub reset_after_capture: bool,
}

pub fn input_behaviour(input: &FieldInput) -> InputBehaviour {
    match *input {
        FieldInput::Text { required, .. } => InputBehaviour {
            is_file: false,
            multiple: false,
            required,
            reset_after_capture: false,
        },
        FieldInput::File {
            multiple,
            preview,
            required,
        } => {
            let accumulates = preview == PreviewPolicy::Append;
            InputBehaviour {
                is_file: true,
                multiple,
                // An emptied input would fail browser validation even though
                // files were accumulated.
                required: required && !accumulates,
                reset_after_capture: accumulates,
            }
        }
    }
}
