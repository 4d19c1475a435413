//! Result and error rendering.
//!
//! The container's content is exactly the current plan: Yew's diff removes
//! whatever the previous plan produced. Strings become text nodes, so server
//! text is never parsed as markup.

use common::model::render::Block;
use yew::prelude::*;

pub fn render_blocks(blocks: &[Block]) -> Html {
    blocks.iter().map(render_block).collect::<Html>()
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Heading(text) => html! { <h3>{ text.clone() }</h3> },
        Block::List(items) => html! {
            <ul>
                { for items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
            </ul>
        },
        Block::Image { src, alt } => html! {
            <img class="result-image" src={src.clone()} alt={alt.clone()} />
        },
        Block::Message(text) => html! { <p class="error">{ text.clone() }</p> },
    }
}
