use yew::prelude::*;

use crate::config;

#[function_component(FixedCtaButton)]
pub fn fixed_cta_button() -> Html {
    html! {
        <a
            href={config::whatsapp_link()}
            target="_blank"
            rel="noopener noreferrer"
            class="fixed-cta gold-button"
        >
            {"Agende Agora"}
        </a>
    }
}
