use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct FormGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Lays the form cards out side by side, one column per form.
pub struct FormGrid;

impl Component for FormGrid {
    type Message = ();
    type Properties = FormGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FormGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(260px, 1fr));
             gap: 24px;
             align-items: start;",
            props.columns.max(1)
        );

        html! {
            <div class="form-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
