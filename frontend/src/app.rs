use common::config::PageConfig;
use gloo_console::{error, log};
use yew::{html, Component, Context, Html};

use crate::components::forms::SubmissionForm;
use crate::form_grid::FormGrid;

/// Id of the optional `<script type="application/json">` block holding a full `PageConfig`.
const CONFIG_ELEMENT_ID: &str = "page-config";
const API_BASE_META: &str = "meta[name=\"api-base\"]";

pub struct App {
    config: PageConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: load_page_config(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let api_base = self.config.api_base.clone();
        html! {
            <main class="outfit-page">
                <h1>{"Outfit suggestions"}</h1>
                <FormGrid columns={self.config.forms.len()}>
                    { for self.config.forms.iter().map(|spec| html! {
                        <SubmissionForm
                            key={spec.form_id.clone()}
                            spec={spec.clone()}
                            api_base={api_base.clone()}
                        />
                    }) }
                </FormGrid>
            </main>
        }
    }
}

/// Reads the page configuration once at startup.
///
/// Defaults are replaced by a valid JSON override when the page embeds one;
/// an `api-base` meta tag then overrides only the endpoint prefix.
fn load_page_config() -> PageConfig {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return PageConfig::default();
    };

    let mut config = match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    {
        Some(json) => match PageConfig::from_json(&json) {
            Ok(config) => {
                log!("page config override applied");
                config
            }
            Err(err) => {
                error!(format!("ignoring page config override: {}", err));
                PageConfig::default()
            }
        },
        None => PageConfig::default(),
    };

    if let Some(api_base) = document
        .query_selector(API_BASE_META)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
    {
        config = config.with_api_base(api_base);
    }

    config
}
