use thiserror::Error;

/// Everything that can go wrong between "photo chosen" and "result staged".
/// The raw detail is for the console; users only ever see [`user_message`].
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("falha ao ler o arquivo de imagem")]
    Read,
    #[error("o serviço não retornou nenhuma mídia utilizável")]
    Empty,
    #[error("falha na geração: {0}")]
    Failed(String),
    #[error("não foi possível medir as dimensões da imagem")]
    DimensionProbe,
    #[error("falha ao baixar o resultado: {0}")]
    Download(String),
}

/// Maps a generation failure to the copy shown inside the widget. Quota and
/// credential problems get their own wording; everything else collapses into
/// a retry prompt so no technical detail leaks to the visitor.
pub fn user_message(err: &GenerationError) -> String {
    match err {
        GenerationError::Read => "Ocorreu um erro ao ler a imagem.".to_string(),
        GenerationError::Empty => {
            "Não foi possível gerar a transformação. Tente outra imagem.".to_string()
        }
        GenerationError::Failed(detail) | GenerationError::Download(detail) => {
            let lower = detail.to_lowercase();
            if lower.contains("quota")
                || lower.contains("rate")
                || lower.contains("429")
                || lower.contains("resource_exhausted")
            {
                "Estamos com muitas simulações neste momento. Tente novamente em alguns minutos."
                    .to_string()
            } else if lower.contains("api key")
                || lower.contains("credential")
                || lower.contains("billing")
                || lower.contains("permission")
                || lower.contains("401")
                || lower.contains("403")
            {
                "Tivemos um problema técnico. Tente novamente em instantes.".to_string()
            } else {
                "A IA não conseguiu processar esta imagem. Por favor, tente uma foto mais nítida."
                    .to_string()
            }
        }
        GenerationError::DimensionProbe => {
            "A IA não conseguiu processar esta imagem. Por favor, tente uma foto mais nítida."
                .to_string()
        }
    }
}

/// Fixed instruction for the photo simulation. Face and background must stay
/// untouched; only the hair changes.
pub const IMAGE_INSTRUCTION: &str = "Aplique um tratamento de progressiva profissional no \
    cabelo da pessoa na imagem. O resultado deve ser um cabelo perfeitamente liso, com brilho \
    intenso, sem frizz e com aparência saudável. Mantenha o resto da imagem (rosto, fundo, \
    etc.) inalterado.";

/// Orientation class of the source photo, derived from width / height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
    Square,
}

impl Orientation {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 0.95 {
            Orientation::Portrait
        } else if ratio > 1.05 {
            Orientation::Landscape
        } else {
            Orientation::Square
        }
    }

    pub fn from_dimensions(width: u32, height: u32) -> Self {
        Self::from_ratio(width as f64 / height as f64)
    }

    pub fn word(self) -> &'static str {
        match self {
            Orientation::Portrait => "vertical",
            Orientation::Landscape => "horizontal",
            Orientation::Square => "quadrada",
        }
    }
}

/// Instruction for the video simulation, with the orientation constraint
/// embedded so the model does not letterbox or crop the original framing.
pub fn video_instruction(orientation: Orientation) -> String {
    format!(
        "Crie um vídeo curto mostrando a pessoa da imagem após um tratamento de progressiva \
         profissional: cabelo perfeitamente liso, com brilho intenso, sem frizz e com \
         aparência saudável, movendo-se naturalmente. Mantenha rosto, fundo e roupas \
         inalterados. O vídeo deve manter exatamente a orientação {} da imagem original, \
         sem bordas pretas, sem cortes e sem reenquadramento.",
        orientation.word()
    )
}

/// Rotated through the loading overlay while a video job is polled. Purely
/// cosmetic, one line per poll cycle.
pub const PROGRESS_MESSAGES: [&str; 4] = [
    "Alisando seus fios...",
    "Aplicando o brilho...",
    "Ajustando cada detalhe...",
    "Quase pronto, finalizando o acabamento...",
];

/// A stuck external job would otherwise stall the widget forever; 60 cycles
/// at 10 s each bounds the wait at roughly ten minutes.
pub const MAX_POLL_CYCLES: usize = 60;

/// Handle to an in-progress video generation, as reported by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationJob {
    pub name: String,
    pub done: bool,
    pub error: Option<String>,
    pub video_uri: Option<String>,
}

/// The two operations the poll loop needs from the outside world. The
/// production implementation talks to the Gemini operations endpoint and
/// sleeps on a real timer; tests swap in a scripted job sequence.
#[allow(async_fn_in_trait)]
pub trait VideoJobPoller {
    async fn wait(&self);
    async fn refetch(&self, job_name: &str) -> Result<GenerationJob, GenerationError>;
}

/// Polls `job` until the service reports a terminal state, invoking
/// `on_progress` with a rotating message at the start of every cycle.
/// Returns the result URI on success.
pub async fn poll_until_done<P, F>(
    poller: &P,
    mut job: GenerationJob,
    mut on_progress: F,
) -> Result<String, GenerationError>
where
    P: VideoJobPoller,
    F: FnMut(&str),
{
    let mut cycle = 0usize;
    while !job.done {
        if cycle >= MAX_POLL_CYCLES {
            return Err(GenerationError::Failed(
                "tempo limite excedido aguardando o serviço de vídeo".to_string(),
            ));
        }
        on_progress(PROGRESS_MESSAGES[cycle % PROGRESS_MESSAGES.len()]);
        poller.wait().await;
        job = poller.refetch(&job.name).await?;
        cycle += 1;
    }
    if let Some(reason) = job.error {
        return Err(GenerationError::Failed(reason));
    }
    job.video_uri.ok_or(GenerationError::Empty)
}

/// Splits a `data:` URL into its MIME type and base64 payload.
pub fn split_data_url(data_url: &str) -> Option<(&str, &str)> {
    let rest = data_url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    if mime.is_empty() || payload.is_empty() {
        return None;
    }
    Some((mime, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn orientation_classification() {
        assert_eq!(Orientation::from_ratio(0.5), Orientation::Portrait);
        assert_eq!(Orientation::from_ratio(1.0), Orientation::Square);
        assert_eq!(Orientation::from_ratio(2.0), Orientation::Landscape);
        assert_eq!(Orientation::from_ratio(0.5).word(), "vertical");
        assert_eq!(Orientation::from_ratio(2.0).word(), "horizontal");
        assert_eq!(Orientation::from_ratio(1.0).word(), "quadrada");
    }

    #[test]
    fn video_instruction_carries_orientation_word() {
        let text = video_instruction(Orientation::from_dimensions(1080, 1920));
        assert!(text.contains("orientação vertical"));
        let text = video_instruction(Orientation::from_dimensions(1920, 1080));
        assert!(text.contains("orientação horizontal"));
    }

    #[test]
    fn split_data_url_extracts_mime_and_payload() {
        let (mime, payload) = split_data_url("data:image/jpeg;base64,abc123").unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(payload, "abc123");
        assert!(split_data_url("not a data url").is_none());
        assert!(split_data_url("data:image/png,rawbytes").is_none());
    }

    #[test]
    fn quota_failures_map_to_busy_copy() {
        let err = GenerationError::Failed("HTTP 429: RESOURCE_EXHAUSTED".to_string());
        assert!(user_message(&err).contains("muitas simulações"));
        let err = GenerationError::Failed("API key not valid".to_string());
        assert!(user_message(&err).contains("problema técnico"));
        let err = GenerationError::Failed("something else entirely".to_string());
        assert!(user_message(&err).contains("tente uma foto mais nítida"));
        let err = GenerationError::Empty;
        assert!(user_message(&err).contains("Tente outra imagem"));
    }

    /// Scripted poller: a fixed sequence of job states, a counter per wait.
    struct ScriptedPoller {
        states: RefCell<Vec<GenerationJob>>,
        waits: RefCell<usize>,
    }

    impl VideoJobPoller for ScriptedPoller {
        async fn wait(&self) {
            *self.waits.borrow_mut() += 1;
        }

        async fn refetch(&self, _job_name: &str) -> Result<GenerationJob, GenerationError> {
            Ok(self.states.borrow_mut().remove(0))
        }
    }

    fn pending_job() -> GenerationJob {
        GenerationJob {
            name: "operations/abc".to_string(),
            done: false,
            error: None,
            video_uri: None,
        }
    }

    #[test]
    fn poll_loop_waits_exactly_once_per_pending_cycle() {
        let done = GenerationJob {
            done: true,
            video_uri: Some("https://example.com/video.mp4".to_string()),
            ..pending_job()
        };
        let poller = ScriptedPoller {
            states: RefCell::new(vec![pending_job(), done]),
            waits: RefCell::new(0),
        };
        let mut progress: Vec<String> = Vec::new();
        let uri = futures::executor::block_on(poll_until_done(&poller, pending_job(), |m| {
            progress.push(m.to_string())
        }))
        .unwrap();
        assert_eq!(uri, "https://example.com/video.mp4");
        assert_eq!(*poller.waits.borrow(), 2);
        assert_eq!(progress.len(), 2);
        assert_eq!(progress[0], PROGRESS_MESSAGES[0]);
        assert_eq!(progress[1], PROGRESS_MESSAGES[1]);
    }

    #[test]
    fn poll_loop_surfaces_service_error() {
        let failed = GenerationJob {
            done: true,
            error: Some("internal error".to_string()),
            ..pending_job()
        };
        let poller = ScriptedPoller {
            states: RefCell::new(vec![failed]),
            waits: RefCell::new(0),
        };
        let result =
            futures::executor::block_on(poll_until_done(&poller, pending_job(), |_| {}));
        assert!(matches!(result, Err(GenerationError::Failed(reason)) if reason == "internal error"));
    }

    #[test]
    fn done_without_uri_is_empty() {
        let done = GenerationJob { done: true, ..pending_job() };
        let poller = ScriptedPoller {
            states: RefCell::new(Vec::new()),
            waits: RefCell::new(0),
        };
        let result = futures::executor::block_on(poll_until_done(&poller, done, |_| {}));
        assert!(matches!(result, Err(GenerationError::Empty)));
    }
}
