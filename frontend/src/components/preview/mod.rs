//! Local thumbnails for selected files.
//!
//! Each [`Thumbnail`] owns an object URL pointing at the file's bytes in the
//! browser; no upload happens. The URL is revoked when the thumbnail is
//! dropped, so replacing a selection releases the previous files.

use common::model::preview::PreviewSet;
use gloo_file::ObjectUrl;
use uuid::Uuid;
use yew::prelude::*;

pub struct Thumbnail {
    key: String,
    file: web_sys::File,
    url: ObjectUrl,
}

impl Thumbnail {
    pub fn new(file: web_sys::File) -> Self {
        let url = ObjectUrl::from(gloo_file::File::from(file.clone()));
        Self {
            key: Uuid::new_v4().to_string(),
            file,
            url,
        }
    }

    pub fn file(&self) -> &web_sys::File {
        &self.file
    }

    pub fn name(&self) -> String {
        self.file.name()
    }
}

/// Renders one thumbnail per file in `set`, in selection order.
pub fn preview_strip(field: &str, set: &PreviewSet<Thumbnail>) -> Html {
    html! {
        <div class="preview" data-field={field.to_string()}>
            { for set.items().iter().map(|thumb| {
                let name = thumb.name();
                html! {
                    <img
                        key={thumb.key.clone()}
                        class="thumbnail"
                        src={thumb.url.to_string()}
                        alt={name.clone()}
                        title={name}
                    />
                }
            }) }
        </div>
    }
}
