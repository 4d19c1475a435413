//! Submission form: one Yew component per configured form, wiring the
//! `Component` implementation to the state, update and view submodules.
//!
//! Responsibilities
//! - Re-export `Msg`, `SubmissionFormProps` and `SubmissionForm`.
//! - Delegate to `update::update` and `view::view`.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SubmissionFormProps;
pub use state::SubmissionForm;

impl Component for SubmissionForm {
    type Message = Msg;
    type Properties = SubmissionFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        SubmissionForm::new(&ctx.props().spec)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
