//! Update function for the submission form component.
//!
//! Elm-style: receives the current `SubmissionForm` state, the `Context` and a
//! `Msg`, mutates the state and returns whether the view should re-render.
//!
//! Submission lifecycle
//! - `Submit` first refuses a form whose required append-policy field holds no
//!   files. Otherwise it takes a ticket (cancelling any request in flight),
//!   serializes the form and spawns the POST. The loading indicator is derived
//!   from the tracker, so it turns on here. A cancelled request still runs to
//!   completion; its response is dropped.
//! - The spawned task reports back with `Settled` unless its ticket was
//!   cancelled meanwhile.
//! - `Settled` is applied only for the latest ticket; applying it turns the
//!   indicator off and replaces the result container's content.

use common::model::result::SubmissionResult;
use common::requests::endpoint_url;
use gloo_console::{error, log};
use web_sys::HtmlFormElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{build_form_data, send_submission};
use super::messages::Msg;
use super::state::SubmissionForm;
use crate::components::preview::Thumbnail;

pub fn update(component: &mut SubmissionForm, ctx: &Context<SubmissionForm>, msg: Msg) -> bool {
    match msg {
        Msg::FilesSelected { field, files } => match component.previews_for_mut(&field) {
            Some(set) => {
                set.select(files.into_iter().map(Thumbnail::new));
                true
            }
            None => false,
        },
        Msg::Submit => submit(component, ctx),
        Msg::Settled { sequence, result } => {
            if !component.tracker.settle(sequence) {
                log!(format!(
                    "{}: discarding stale response #{}",
                    ctx.props().spec.form_id,
                    sequence
                ));
                return false;
            }
            component.outcome = Some(result);
            true
        }
    }
}

fn submit(component: &mut SubmissionForm, ctx: &Context<SubmissionForm>) -> bool {
    let props = ctx.props();
    let spec = &props.spec;

    let Some(form) = component.form_ref.cast::<HtmlFormElement>() else {
        return false;
    };

    if let Some(field) = component.unfilled_field(spec) {
        log!(format!("{}: not submitted, `{}` is empty", spec.form_id, field.name));
        component.outcome = Some(SubmissionResult::failure(field.missing_files_message()));
        return true;
    }

    let ticket = component.tracker.begin();

    let link = ctx.link().clone();
    let body = match build_form_data(&form, &component.accumulated_files(spec)) {
        Ok(body) => body,
        Err(err) => {
            error!(format!("{}: could not serialize form", spec.form_id), err);
            link.send_message(Msg::Settled {
                sequence: ticket.sequence(),
                result: SubmissionResult::generic_failure(),
            });
            return true;
        }
    };

    let url = endpoint_url(&props.api_base, &spec.endpoint);
    let kind = spec.kind;
    let form_id = spec.form_id.clone();
    log!(format!("{}: submitting #{} to {}", form_id, ticket.sequence(), url));

    spawn_local(async move {
        let result = match send_submission(&url, kind, body).await {
            Ok(result) => result,
            Err(_) if ticket.is_cancelled() => return,
            Err(err) => {
                error!(format!("{}: request #{} failed: {}", form_id, ticket.sequence(), err));
                SubmissionResult::generic_failure()
            }
        };

        if ticket.is_cancelled() {
            log!(format!("{}: request #{} superseded", form_id, ticket.sequence()));
            return;
        }

        link.send_message(Msg::Settled {
            sequence: ticket.sequence(),
            result,
        });
    });

    true
}
