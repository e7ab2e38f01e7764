use chrono::{Datelike, Utc};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();
    html! {
        <footer class="page-footer">
            <div class="container">
                <h3>
                    {"Império "}<span class="gold-text">{"Progressivas"}</span>
                </h3>
                <p>{ format!("© {} Império Progressivas. Todos os direitos reservados.", year) }</p>
            </div>
        </footer>
    }
}
