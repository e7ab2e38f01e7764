use yew::prelude::*;

use crate::config;

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section id="agendamento" class="cta-section">
            <div class="container">
                <h2>
                    {"A beleza que "}<span class="gold-text">{"transforma"}</span>{"."}
                </h2>
                <p>{"O luxo que você merece."}</p>
                <a
                    href={config::whatsapp_link()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="gold-button large"
                >
                    {"Agende sua transformação agora"}
                </a>
            </div>
        </section>
    }
}
