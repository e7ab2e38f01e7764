use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Contact details collected by the lead gate. The reveal is blocked until
/// every field is filled in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl LeadDetails {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadCapturePopupProps {
    pub on_submit: Callback<LeadDetails>,
}

/// Modal shown while a pending result awaits its reveal. There is no close
/// button: the result only becomes visible after the form is submitted.
#[function_component(LeadCapturePopup)]
pub fn lead_capture_popup(props: &LeadCapturePopupProps) -> Html {
    let details = use_state(LeadDetails::default);

    let oninput = |field: fn(&mut LeadDetails, String)| {
        let details = details.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*details).clone();
            field(&mut next, input.value());
            details.set(next);
        })
    };

    let on_name = oninput(|d, v| d.name = v);
    let on_email = oninput(|d, v| d.email = v);
    let on_phone = oninput(|d, v| d.phone = v);

    let onsubmit = {
        let details = details.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if details.is_complete() {
                on_submit.emit((*details).clone());
            }
        })
    };

    html! {
        <div class="popup-overlay">
            <div class="popup-card">
                <h3 class="gold-text">{"Quase lá!"}</h3>
                <p>{"Para ver sua transformação, por favor, preencha seus dados abaixo."}</p>
                <form onsubmit={onsubmit}>
                    <input
                        type="text"
                        placeholder="Seu nome completo"
                        value={details.name.clone()}
                        oninput={on_name}
                        required=true
                    />
                    <input
                        type="email"
                        placeholder="Seu melhor e-mail"
                        value={details.email.clone()}
                        oninput={on_email}
                        required=true
                    />
                    <input
                        type="tel"
                        placeholder="Seu WhatsApp (com DDD)"
                        value={details.phone.clone()}
                        oninput={on_phone}
                        required=true
                    />
                    <button type="submit" class="gold-button">
                        {"Ver meu resultado"}
                    </button>
                </form>
                <p class="popup-fineprint">
                    {"Prometemos não enviar spam. Seus dados estão seguros."}
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_complete_requires_every_field() {
        let mut details = LeadDetails::default();
        assert!(!details.is_complete());

        details.name = "Maria Silva".to_string();
        details.email = "maria@example.com".to_string();
        assert!(!details.is_complete());

        details.phone = "11912345678".to_string();
        assert!(details.is_complete());

        details.email = "   ".to_string();
        assert!(!details.is_complete());
    }
}
