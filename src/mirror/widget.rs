use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::mirror::feedback::{FeedbackChecklist, FeedbackReason, FeedbackStage};
use crate::mirror::gemini::GeminiClient;
use crate::mirror::generation::{
    poll_until_done, split_data_url, user_message, video_instruction, GenerationError,
    Orientation, IMAGE_INSTRUCTION, PROGRESS_MESSAGES,
};
use crate::mirror::history::{HistoryEntry, HistoryStore, LocalStorageBackend};
use crate::mirror::lead::{LeadCapturePopup, LeadDetails};
use crate::mirror::state::{MediaKind, MediaRef, WidgetStage};

pub enum MirrorMsg {
    PickFile(MediaKind),
    FileSelected(web_sys::File),
    ImageRead(String),
    ImageReadFailed,
    DimensionsReady { width: u32, height: u32 },
    Progress(String),
    Generated(MediaRef),
    Failed(GenerationError),
    LeadSubmitted(LeadDetails),
    FeedbackPositive,
    FeedbackNegative,
    ToggleReason(FeedbackReason),
    SetFeedbackOther(String),
    SubmitFeedback,
}

/// The "Espelho Império" section: upload a photo, get an AI preview of the
/// straightening treatment as a photo or a short video, gated behind a
/// lead-capture form.
pub struct MirrorWidget {
    client: GeminiClient,
    original: Option<MediaRef>,
    stage: WidgetStage,
    output_kind: MediaKind,
    history: HistoryStore<LocalStorageBackend>,
    feedback: FeedbackStage,
    checklist: FeedbackChecklist,
    file_input: NodeRef,
    // (mime type, base64 payload) held between upload and dimension probe.
    pending_upload: Option<(String, String)>,
}

impl Component for MirrorWidget {
    type Message = MirrorMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            client: GeminiClient::new(config::get_gemini_base_url(), config::get_api_key()),
            original: None,
            stage: WidgetStage::Idle,
            output_kind: MediaKind::Image,
            history: HistoryStore::load(LocalStorageBackend),
            feedback: FeedbackStage::Idle,
            checklist: FeedbackChecklist::default(),
            file_input: NodeRef::default(),
            pending_upload: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MirrorMsg::PickFile(kind) => {
                if self.stage.is_loading() {
                    return false;
                }
                self.output_kind = kind;
                if let Some(input) = self.file_input.cast::<HtmlInputElement>() {
                    input.click();
                }
                true
            }
            MirrorMsg::FileSelected(file) => {
                if self.stage.is_loading() {
                    return false;
                }
                self.read_file(ctx, file);
                false
            }
            MirrorMsg::ImageRead(data_url) => {
                // A fresh upload always starts a new simulation.
                self.original = Some(MediaRef::image(data_url.clone()));
                self.feedback = FeedbackStage::Idle;
                self.checklist = FeedbackChecklist::default();
                self.pending_upload = None;
                self.stage = WidgetStage::Loading {
                    message: PROGRESS_MESSAGES[0].to_string(),
                };
                let encoded = split_data_url(&data_url)
                    .map(|(mime, payload)| (mime.to_string(), payload.to_string()));
                match encoded {
                    Some((mime, payload)) => match self.output_kind {
                        MediaKind::Image => self.start_image_generation(ctx, mime, payload),
                        MediaKind::Video => {
                            self.pending_upload = Some((mime, payload));
                            self.probe_dimensions(ctx, data_url);
                        }
                    },
                    None => {
                        ctx.link().send_message(MirrorMsg::Failed(GenerationError::Read));
                    }
                }
                true
            }
            MirrorMsg::ImageReadFailed => {
                // Prior upload and history stay as they were.
                self.stage = WidgetStage::Error {
                    message: user_message(&GenerationError::Read),
                };
                true
            }
            MirrorMsg::DimensionsReady { width, height } => {
                if let Some((mime, payload)) = self.pending_upload.take() {
                    let orientation = Orientation::from_dimensions(width, height);
                    self.start_video_generation(ctx, mime, payload, orientation);
                }
                false
            }
            MirrorMsg::Progress(message) => {
                if self.stage.is_loading() {
                    self.stage = WidgetStage::Loading { message };
                    return true;
                }
                false
            }
            MirrorMsg::Generated(media) => {
                self.stage = WidgetStage::AwaitingLead { pending: media };
                true
            }
            MirrorMsg::Failed(err) => {
                error!("geração falhou: {}", err);
                self.pending_upload = None;
                self.stage = WidgetStage::Error { message: user_message(&err) };
                true
            }
            MirrorMsg::LeadSubmitted(details) => {
                if !details.is_complete() {
                    return false;
                }
                let pending = match self.stage.pending() {
                    Some(media) => media.clone(),
                    None => return false,
                };
                info!(
                    "lead capturado: {} <{}> {}",
                    details.name, details.email, details.phone
                );
                if let Some(original) = self.original.clone() {
                    self.history.append(HistoryEntry::new(original, pending.clone()));
                }
                self.stage = WidgetStage::Revealed { generated: pending };
                self.feedback = self.feedback.begin();
                true
            }
            MirrorMsg::FeedbackPositive => {
                self.feedback = self.feedback.choose_positive();
                true
            }
            MirrorMsg::FeedbackNegative => {
                self.feedback = self.feedback.choose_negative();
                true
            }
            MirrorMsg::ToggleReason(reason) => {
                self.checklist.toggle(reason);
                true
            }
            MirrorMsg::SetFeedbackOther(text) => {
                self.checklist.other = text;
                true
            }
            MirrorMsg::SubmitFeedback => {
                info!("feedback negativo: {}", self.checklist.summary());
                self.feedback = self.feedback.submit_form();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onchange = ctx.link().batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|list| list.get(0));
            // Clear the value so re-picking the same file fires again.
            input.set_value("");
            file.map(MirrorMsg::FileSelected)
        });

        let is_loading = self.stage.is_loading();
        let pick_photo = ctx.link().callback(|_| MirrorMsg::PickFile(MediaKind::Image));
        let pick_video = ctx.link().callback(|_| MirrorMsg::PickFile(MediaKind::Video));

        html! {
            <section id="espelho-imperio" class="mirror-section">
                {
                    if self.stage.pending().is_some() {
                        let on_submit = ctx.link().callback(MirrorMsg::LeadSubmitted);
                        html! { <LeadCapturePopup on_submit={on_submit} /> }
                    } else {
                        html! {}
                    }
                }
                <div class="container">
                    <h2>{"Espelho "}<span class="gold-text">{"Império"}</span>{" ✨"}</h2>
                    <p class="mirror-lead">
                        {"Veja a mágica acontecer! Envie uma foto do seu cabelo e nossa IA \
                          mostrará uma simulação do resultado da sua progressiva, em foto \
                          ou em vídeo."}
                    </p>

                    <div class="mirror-card">
                        <div class="mirror-panels">
                            { self.view_original_panel() }
                            { self.view_result_panel() }
                        </div>

                        <div class="mirror-actions">
                            <input
                                type="file"
                                accept="image/*"
                                ref={self.file_input.clone()}
                                onchange={onchange}
                                style="display: none;"
                                aria-hidden="true"
                            />
                            <button
                                class="gold-button"
                                onclick={pick_photo}
                                disabled={is_loading}
                            >
                                { if is_loading { "Processando..." } else { "Simular em foto" } }
                            </button>
                            <button
                                class="gold-button outline"
                                onclick={pick_video}
                                disabled={is_loading}
                            >
                                { if is_loading { "Processando..." } else { "Simular em vídeo" } }
                            </button>
                        </div>
                        <p class="mirror-fineprint">
                            {"O resultado é uma simulação gerada por IA e pode não representar \
                              o resultado final real."}
                        </p>
                    </div>

                    { self.view_feedback(ctx) }
                    { self.view_history() }

                    <div class="mirror-cta">
                        <a
                            href={config::whatsapp_link()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="gold-button"
                        >
                            {"Fazer minha progressiva agora"}
                        </a>
                    </div>
                </div>
            </section>
        }
    }
}

impl MirrorWidget {
    fn read_file(&self, ctx: &Context<Self>, file: web_sys::File) {
        let reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(_) => {
                ctx.link().send_message(MirrorMsg::ImageReadFailed);
                return;
            }
        };

        let link = ctx.link().clone();
        let reader_handle = reader.clone();
        let onloadend = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            match reader_handle.result().ok().and_then(|v| v.as_string()) {
                Some(data_url) => link.send_message(MirrorMsg::ImageRead(data_url)),
                None => link.send_message(MirrorMsg::ImageReadFailed),
            }
        }));
        reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
        onloadend.forget();

        if reader.read_as_data_url(&file).is_err() {
            ctx.link().send_message(MirrorMsg::ImageReadFailed);
        }
    }

    fn start_image_generation(&self, ctx: &Context<Self>, mime: String, payload: String) {
        let client = self.client.clone();
        ctx.link().send_future(async move {
            match client.generate_image(&mime, &payload, IMAGE_INSTRUCTION).await {
                Ok(media) => MirrorMsg::Generated(media),
                Err(err) => MirrorMsg::Failed(err),
            }
        });
    }

    /// Loads the uploaded photo into an off-screen element to measure its
    /// natural dimensions before the video job is submitted.
    fn probe_dimensions(&self, ctx: &Context<Self>, data_url: String) {
        let image = match web_sys::HtmlImageElement::new() {
            Ok(image) => image,
            Err(_) => {
                ctx.link().send_message(MirrorMsg::Failed(GenerationError::DimensionProbe));
                return;
            }
        };

        let link = ctx.link().clone();
        let image_handle = image.clone();
        let onload = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let width = image_handle.natural_width();
            let height = image_handle.natural_height();
            if width == 0 || height == 0 {
                link.send_message(MirrorMsg::Failed(GenerationError::DimensionProbe));
            } else {
                link.send_message(MirrorMsg::DimensionsReady { width, height });
            }
        }));
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let link = ctx.link().clone();
        let onerror = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            link.send_message(MirrorMsg::Failed(GenerationError::DimensionProbe));
        }));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        image.set_src(&data_url);
    }

    fn start_video_generation(
        &self,
        ctx: &Context<Self>,
        mime: String,
        payload: String,
        orientation: Orientation,
    ) {
        let client = self.client.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let instruction = video_instruction(orientation);
            let job = match client.start_video_job(&mime, &payload, &instruction).await {
                Ok(job) => job,
                Err(err) => {
                    link.send_message(MirrorMsg::Failed(err));
                    return;
                }
            };
            let progress_link = link.clone();
            let uri = match poll_until_done(&client, job, |message| {
                progress_link.send_message(MirrorMsg::Progress(message.to_string()));
            })
            .await
            {
                Ok(uri) => uri,
                Err(err) => {
                    link.send_message(MirrorMsg::Failed(err));
                    return;
                }
            };
            match client.download_video(&uri).await {
                Ok(media) => link.send_message(MirrorMsg::Generated(media)),
                Err(err) => link.send_message(MirrorMsg::Failed(err)),
            }
        });
    }

    fn view_original_panel(&self) -> Html {
        html! {
            <div class="mirror-panel">
                {
                    match &self.original {
                        Some(media) => html! {
                            <img src={media.url.clone()} alt="Cabelo antes da transformação" />
                        },
                        None => html! {
                            <div class="panel-placeholder">
                                <p>{"Sua foto aparecerá aqui."}</p>
                                <p class="small">{"Use uma foto nítida do seu cabelo."}</p>
                            </div>
                        },
                    }
                }
                <p class="panel-label">{"ANTES"}</p>
            </div>
        }
    }

    fn view_result_panel(&self) -> Html {
        let body = match &self.stage {
            WidgetStage::Loading { message } => html! {
                <div class="panel-loading">
                    <div class="spinner"></div>
                    <p>{ message.clone() }</p>
                </div>
            },
            WidgetStage::Error { message } => html! {
                <div class="panel-error">
                    <p>{ message.clone() }</p>
                </div>
            },
            WidgetStage::Revealed { generated } => match generated.kind {
                MediaKind::Image => html! {
                    <img src={generated.url.clone()} alt="Cabelo após a transformação com IA" />
                },
                MediaKind::Video => html! {
                    <video src={generated.url.clone()} controls=true autoplay=true loop=true />
                },
            },
            // Pending results stay hidden until the lead gate is satisfied.
            WidgetStage::Idle | WidgetStage::AwaitingLead { .. } => html! {
                <div class="panel-placeholder gold">
                    <p>{"A transformação aparecerá aqui."}</p>
                </div>
            },
        };
        html! {
            <div class="mirror-panel after">
                { body }
                <p class="panel-label gold-text">{"DEPOIS (IA)"}</p>
            </div>
        }
    }

    fn view_feedback(&self, ctx: &Context<Self>) -> Html {
        match self.feedback {
            FeedbackStage::Idle => html! {},
            FeedbackStage::Prompt => {
                let positive = ctx.link().callback(|_| MirrorMsg::FeedbackPositive);
                let negative = ctx.link().callback(|_| MirrorMsg::FeedbackNegative);
                html! {
                    <div class="feedback-box">
                        <p>{"Gostou do resultado da simulação?"}</p>
                        <button class="gold-button" onclick={positive}>{"Adorei!"}</button>
                        <button class="gold-button outline" onclick={negative}>{"Não muito"}</button>
                    </div>
                }
            }
            FeedbackStage::Form => {
                let other = ctx.link().callback(|e: InputEvent| {
                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    MirrorMsg::SetFeedbackOther(input.value())
                });
                let submit = ctx.link().callback(|_| MirrorMsg::SubmitFeedback);
                html! {
                    <div class="feedback-box">
                        <p>{"O que não ficou bom? (opcional)"}</p>
                        {
                            for FeedbackReason::ALL.iter().map(|&reason| {
                                let toggle = ctx
                                    .link()
                                    .callback(move |_| MirrorMsg::ToggleReason(reason));
                                html! {
                                    <label class="feedback-reason">
                                        <input
                                            type="checkbox"
                                            checked={self.checklist.is_set(reason)}
                                            onchange={toggle}
                                        />
                                        { reason.label() }
                                    </label>
                                }
                            })
                        }
                        <textarea
                            placeholder="Conte mais, se quiser"
                            value={self.checklist.other.clone()}
                            oninput={other}
                        />
                        <button class="gold-button" onclick={submit}>{"Enviar"}</button>
                    </div>
                }
            }
            FeedbackStage::ThankYouPositive => html! {
                <div class="feedback-box">
                    <p>{"Que ótimo! Agora imagine esse resultado ao vivo."}</p>
                    <a
                        href={config::whatsapp_link()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="gold-button"
                    >
                        {"Agendar minha progressiva"}
                    </a>
                </div>
            },
            FeedbackStage::ThankYouNegative => html! {
                <div class="feedback-box">
                    <p>{"Obrigado pelo seu retorno! Vamos usar isso para melhorar o espelho."}</p>
                </div>
            },
        }
    }

    fn view_history(&self) -> Html {
        if self.history.is_empty() {
            return html! {};
        }
        html! {
            <div class="history-strip">
                <h3>{"Suas últimas simulações"}</h3>
                <div class="history-entries">
                    {
                        for self.history.entries().iter().map(|entry| {
                            html! {
                                <div class="history-entry">
                                    <img src={entry.original.url.clone()} alt="Antes" />
                                    {
                                        match entry.kind {
                                            MediaKind::Image => html! {
                                                <img src={entry.generated.url.clone()} alt="Depois" />
                                            },
                                            MediaKind::Video => html! {
                                                <video src={entry.generated.url.clone()} muted=true loop=true />
                                            },
                                        }
                                    }
                                </div>
                            }
                        })
                    }
                </div>
            </div>
        }
    }
}
