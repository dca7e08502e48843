use yew::prelude::*;

use super::SessionHeader;

#[derive(Properties, PartialEq)]
pub struct AreaLayoutProps {
    pub children: Children,
}

#[function_component(AreaLayout)]
pub fn area_layout(props: &AreaLayoutProps) -> Html {
    html! {
        <div class="area-layout">
            <SessionHeader />
            <main class="area-content">
                {props.children.clone()}
            </main>
        </div>
    }
}
