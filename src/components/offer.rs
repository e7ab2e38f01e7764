use yew::prelude::*;

use crate::config;

#[function_component(Offer)]
pub fn offer() -> Html {
    html! {
        <section id="preco" class="offer-section">
            <div class="container">
                <h2>
                    {"🔥 Sua progressiva a partir de "}
                    <span class="gold-text">{"R$250,00"}</span>
                    {" 🔥"}
                </h2>
                <p>{"Agende agora e tenha fios lisos, brilhantes e com cara de salão de luxo."}</p>
                <a
                    href={config::whatsapp_link()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="gold-button"
                >
                    {"Agendar minha avaliação"}
                </a>
            </div>
        </section>
    }
}
