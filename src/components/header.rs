use yew::prelude::*;

use crate::config::MENU_ITEMS;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="top-header">
            <div class="container header-content">
                <h1 class="brand">
                    <a href="#inicio">
                        {"Império "}<span class="gold-text">{"Progressivas"}</span>
                    </a>
                </h1>
                <nav class="header-nav">
                    {
                        for MENU_ITEMS.iter().map(|(name, href)| html! {
                            <a href={*href} class="nav-link">{ *name }</a>
                        })
                    }
                </nav>
            </div>
        </header>
    }
}
