use log::{info, Level};
use yew::prelude::*;

mod config;
mod components {
    pub mod before_after;
    pub mod cta;
    pub mod fixed_cta;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod offer;
}
mod mirror {
    pub mod feedback;
    pub mod gemini;
    pub mod generation;
    pub mod history;
    pub mod lead;
    pub mod state;
    pub mod widget;
}

use components::{
    before_after::BeforeAfter, cta::Cta, fixed_cta::FixedCtaButton, footer::Footer,
    header::Header, hero::Hero, offer::Offer,
};
use mirror::widget::MirrorWidget;

const GLOBAL_CSS: &str = r#"
    :root {
        --gold: #d4af37;
        --gold-soft: rgba(212, 175, 55, 0.3);
    }
    body {
        margin: 0;
        background: #000;
        color: #fff;
        font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
    }
    .container { max-width: 1100px; margin: 0 auto; padding: 0 1rem; text-align: center; }
    .gold-text { color: var(--gold); }
    .gold-button {
        display: inline-block;
        background: linear-gradient(135deg, #f5d76e, var(--gold));
        color: #000;
        font-weight: bold;
        padding: 0.9rem 2.2rem;
        border: none;
        border-radius: 999px;
        cursor: pointer;
        text-decoration: none;
        box-shadow: 0 4px 18px var(--gold-soft);
    }
    .gold-button.outline {
        background: transparent;
        color: var(--gold);
        border: 2px solid var(--gold);
    }
    .gold-button.large { font-size: 1.2rem; padding: 1.1rem 2.8rem; }
    .gold-button:disabled { opacity: 0.5; cursor: not-allowed; }

    .top-header {
        position: sticky; top: 0; z-index: 40;
        background: rgba(0, 0, 0, 0.85);
        padding: 1rem 0;
        box-shadow: 0 2px 12px var(--gold-soft);
    }
    .header-content { display: flex; justify-content: space-between; align-items: center; }
    .brand a { color: #fff; text-decoration: none; }
    .header-nav .nav-link { color: #fff; margin-left: 1.4rem; text-decoration: none; }
    .header-nav .nav-link:hover { color: var(--gold); }

    .hero-section { min-height: 80vh; display: flex; align-items: center; padding: 4rem 0; }
    .hero-section h2 { font-size: 2.6rem; }
    .hero-arrow { color: var(--gold); font-size: 2.5rem; text-decoration: none; }

    .mirror-section { padding: 4rem 0; background: rgba(30, 30, 30, 0.4); }
    .mirror-card {
        background: rgba(0, 0, 0, 0.5);
        border: 2px solid var(--gold-soft);
        border-radius: 1rem;
        padding: 1.5rem;
        margin-top: 2rem;
    }
    .mirror-panels { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
    @media (max-width: 700px) { .mirror-panels { grid-template-columns: 1fr; } }
    .mirror-panel {
        border: 1px dashed #555;
        border-radius: 0.6rem;
        min-height: 24rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        position: relative;
        background: rgba(20, 20, 20, 0.5);
    }
    .mirror-panel.after { border-color: var(--gold-soft); }
    .mirror-panel img, .mirror-panel video { max-width: 100%; max-height: 22rem; border-radius: 0.4rem; }
    .panel-label { font-size: 0.8rem; letter-spacing: 0.2em; font-weight: bold; color: #999; }
    .panel-placeholder { color: #888; }
    .panel-placeholder.gold { color: var(--gold-soft); }
    .panel-placeholder .small { font-size: 0.75rem; }
    .panel-error { color: #f87171; }
    .panel-loading { display: flex; flex-direction: column; align-items: center; }
    .spinner {
        width: 4rem; height: 4rem;
        border: 4px dashed var(--gold);
        border-radius: 50%;
        animation: spin 1.2s linear infinite;
        margin-bottom: 1rem;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    .mirror-actions { margin-top: 2rem; display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
    .mirror-fineprint { font-size: 0.75rem; color: #777; margin-top: 1.2rem; }
    .mirror-cta { margin-top: 3rem; }

    .popup-overlay {
        position: fixed; inset: 0; z-index: 50;
        background: rgba(0, 0, 0, 0.8);
        display: flex; align-items: center; justify-content: center;
        padding: 1rem;
    }
    .popup-card {
        background: #181818;
        border: 2px solid var(--gold-soft);
        border-radius: 1rem;
        padding: 2rem;
        max-width: 26rem;
        width: 100%;
        text-align: center;
    }
    .popup-card input {
        width: 100%;
        box-sizing: border-box;
        background: #222;
        border: 2px solid #444;
        border-radius: 0.5rem;
        padding: 0.8rem 1rem;
        color: #fff;
        margin-bottom: 0.8rem;
    }
    .popup-fineprint { font-size: 0.7rem; color: #777; }

    .feedback-box {
        margin-top: 2rem;
        background: rgba(0, 0, 0, 0.5);
        border: 1px solid var(--gold-soft);
        border-radius: 0.8rem;
        padding: 1.2rem;
        display: flex;
        flex-direction: column;
        gap: 0.7rem;
        align-items: center;
    }
    .feedback-reason { display: flex; gap: 0.5rem; align-items: center; color: #ccc; }
    .feedback-box textarea {
        width: 100%;
        max-width: 24rem;
        box-sizing: border-box;
        background: #222;
        border: 2px solid #444;
        border-radius: 0.5rem;
        color: #fff;
        padding: 0.6rem;
        min-height: 4rem;
    }

    .history-strip { margin-top: 3rem; }
    .history-entries { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
    .history-entry {
        display: flex; gap: 0.3rem;
        border: 1px solid var(--gold-soft);
        border-radius: 0.5rem;
        padding: 0.3rem;
    }
    .history-entry img, .history-entry video { width: 6rem; height: 7rem; object-fit: cover; border-radius: 0.3rem; }

    .ba-section { padding: 4rem 0; }
    .ba-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-top: 2rem; }
    @media (max-width: 900px) { .ba-grid { grid-template-columns: 1fr 1fr; } }
    @media (max-width: 600px) { .ba-grid { grid-template-columns: 1fr; } }
    .ba-card { border: 1px solid var(--gold-soft); border-radius: 0.6rem; overflow: hidden; }
    .ba-pair { display: grid; grid-template-columns: 1fr 1fr; gap: 2px; }
    .ba-pair img { width: 100%; height: 100%; object-fit: cover; display: block; }
    .ba-caption { font-size: 0.7rem; color: #888; padding: 0.5rem 0; }

    .offer-section { padding: 4rem 0; background: #fff; color: #000; }
    .cta-section { padding: 4rem 0; }
    .page-footer { background: #181818; color: #999; padding: 1.5rem 0; }

    .fixed-cta {
        position: fixed;
        bottom: 1.5rem; right: 1.5rem;
        z-index: 45;
        animation: pulse 2s infinite;
    }
    @keyframes pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.06); } }
"#;

#[function_component]
fn App() -> Html {
    html! {
        <div class="page">
            <style>{ GLOBAL_CSS }</style>
            <Header />
            <main>
                <Hero />
                <MirrorWidget />
                <BeforeAfter />
                <Offer />
                <Cta />
            </main>
            <Footer />
            <FixedCtaButton />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
