use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="inicio" class="hero-section">
            <div class="container">
                <h2>
                    {"Veja sua "}<span class="gold-text">{"transformação"}</span>
                    {" antes de acontecer."}
                </h2>
                <p>
                    {"✨ Use nosso Espelho Império com IA e visualize o resultado da sua \
                      progressiva agora mesmo."}
                </p>
                <a href="#espelho-imperio" class="hero-arrow" aria-label="Rolar para o Espelho Império">
                    {"⌄"}
                </a>
            </div>
        </section>
    }
}
