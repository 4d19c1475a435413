//! View rendering for the submission form component.
//!
//! One card per form: the fields described by its `FormSpec` (file inputs
//! with their preview strips), the submit button, the loading indicator and
//! the result container.

use common::config::{FieldInput, FieldSpec};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{input_behaviour, selected_files};
use super::messages::Msg;
use super::state::SubmissionForm;
use crate::components::preview::preview_strip;
use crate::components::results::render_blocks;

pub fn view(component: &SubmissionForm, ctx: &Context<SubmissionForm>) -> Html {
    let spec = &ctx.props().spec;
    let link = ctx.link();
    let loading = component.phase().is_loading();

    html! {
        <section class="form-card">
            <h2>{ spec.title.clone() }</h2>
            <form
                id={spec.form_id.clone()}
                ref={component.form_ref.clone()}
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                { for spec.fields.iter().map(|field| build_field(component, field, link)) }
                <button type="submit">{ spec.submit_label.clone() }</button>
            </form>
            <div
                id={spec.loading_id.clone()}
                class={classes!("loading-indicator", loading.then_some("active"))}
                hidden={!loading}
            >
                {"Loading…"}
            </div>
            <div id={spec.result_container_id.clone()} class="result-container">
                { render_blocks(&component.blocks(spec.kind)) }
            </div>
        </section>
    }
}

/// Builds the labelled input for one field, plus its previews for file fields.
fn build_field(
    component: &SubmissionForm,
    field: &FieldSpec,
    link: &Scope<SubmissionForm>,
) -> Html {
    let behaviour = input_behaviour(&field.input);

    if !behaviour.is_file {
        let placeholder = match &field.input {
            FieldInput::Text { placeholder, .. } => placeholder.clone(),
            FieldInput::File { .. } => String::new(),
        };
        return html! {
            <label class="field">
                <span>{ field.label.clone() }</span>
                <input
                    type="text"
                    name={field.name.clone()}
                    placeholder={placeholder}
                    required={behaviour.required}
                />
            </label>
        };
    }

    let name = field.name.clone();
    let onchange = link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = selected_files(&input);
        if behaviour.reset_after_capture {
            input.set_value("");
        }
        Msg::FilesSelected {
            field: name.clone(),
            files,
        }
    });

    html! {
        <>
            <label class="field">
                <span>{ field.label.clone() }</span>
                <input
                    type="file"
                    accept="image/*"
                    name={field.name.clone()}
                    multiple={behaviour.multiple}
                    required={behaviour.required}
                    {onchange}
                />
            </label>
            {
                match component.previews_for(&field.name) {
                    Some(set) => preview_strip(&field.name, set),
                    None => html! {},
                }
            }
        </>
    }
}
