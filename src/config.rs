pub const WHATSAPP_PHONE_NUMBER: &str = "5511912345678";
pub const WHATSAPP_MESSAGE: &str = "Olá! Gostaria de agendar minha progressiva.";

pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_PHONE_NUMBER,
        urlencoding::encode(WHATSAPP_MESSAGE)
    )
}

pub const MENU_ITEMS: [(&str, &str); 5] = [
    ("Início", "#inicio"),
    ("Antes & Depois", "#antes-depois"),
    ("Espelho Império", "#espelho-imperio"),
    ("Preço", "#preco"),
    ("Agendamento", "#agendamento"),
];

pub fn get_gemini_base_url() -> &'static str {
    "https://generativelanguage.googleapis.com/v1beta"
}

// Injected at build time; an empty key surfaces as a generation failure,
// never as a panic.
pub fn get_api_key() -> &'static str {
    option_env!("GEMINI_API_KEY").unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_message() {
        let link = whatsapp_link();
        assert!(link.starts_with("https://wa.me/5511912345678?text="));
        assert!(!link.contains(' '));
        assert!(link.contains("%20"));
    }
}
