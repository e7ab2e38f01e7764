use yew::prelude::*;

const PAIRS: [(&str, &str); 6] = [
    ("woman1-before", "woman1-after"),
    ("woman2-before", "woman2-after"),
    ("woman3-before", "woman3-after"),
    ("woman4-before", "woman4-after"),
    ("woman5-before", "woman5-after"),
    ("woman6-before", "woman6-after"),
];

fn card(seed_before: &str, seed_after: &str) -> Html {
    html! {
        <div class="ba-card">
            <div class="ba-pair">
                <img
                    src={format!("https://picsum.photos/seed/{}/400/500", seed_before)}
                    alt="Antes"
                />
                <img
                    src={format!("https://picsum.photos/seed/{}/400/500", seed_after)}
                    alt="Depois"
                />
            </div>
            <p class="ba-caption">{"Imagem meramente ilustrativa"}</p>
        </div>
    }
}

#[function_component(BeforeAfter)]
pub fn before_after() -> Html {
    html! {
        <section id="antes-depois" class="ba-section">
            <div class="container">
                <h2>
                    {"Veja quem já viveu a "}<span class="gold-text">{"transformação"}</span>
                </h2>
                <p>{"A transformação que você também pode conquistar."}</p>
                <div class="ba-grid">
                    { for PAIRS.iter().map(|&(before, after)| card(before, after)) }
                </div>
            </div>
        </section>
    }
}
