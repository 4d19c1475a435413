use crate::app::App;

mod app;
mod components;
mod form_grid;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
