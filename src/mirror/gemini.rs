use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use web_sys::js_sys;

use crate::mirror::generation::{GenerationError, GenerationJob, VideoJobPoller};
use crate::mirror::state::MediaRef;

const IMAGE_MODEL: &str = "gemini-2.5-flash-image-preview";
const VIDEO_MODEL: &str = "veo-3.0-generate-001";
const POLL_INTERVAL_MS: u32 = 10_000;

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    response_modalities: Vec<String>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct PredictRequest {
    instances: Vec<Instance>,
    parameters: Parameters,
}

#[derive(Serialize)]
struct Instance {
    prompt: String,
    image: ImageInput,
}

#[derive(Serialize)]
struct ImageInput {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: String,
    #[serde(rename = "mimeType")]
    mime_type: String,
}

#[derive(Serialize)]
struct Parameters {
    #[serde(rename = "sampleCount")]
    sample_count: u32,
}

#[derive(Deserialize)]
struct Operation {
    name: String,
    #[serde(default)]
    done: bool,
    error: Option<OperationError>,
    response: Option<OperationResult>,
}

#[derive(Deserialize)]
struct OperationError {
    message: Option<String>,
}

#[derive(Deserialize)]
struct OperationResult {
    #[serde(rename = "generatedVideos", default)]
    generated_videos: Vec<GeneratedVideo>,
}

#[derive(Deserialize)]
struct GeneratedVideo {
    video: Option<VideoHandle>,
}

#[derive(Deserialize)]
struct VideoHandle {
    uri: Option<String>,
}

impl From<Operation> for GenerationJob {
    fn from(op: Operation) -> Self {
        let video_uri = op
            .response
            .and_then(|r| r.generated_videos.into_iter().next())
            .and_then(|v| v.video)
            .and_then(|v| v.uri);
        GenerationJob {
            name: op.name,
            done: op.done,
            error: op.error.and_then(|e| e.message),
            video_uri,
        }
    }
}

/// Thin client over the Gemini REST API. Constructed with an explicit base
/// URL and key so the widget never reaches for ambient credentials.
#[derive(Clone, PartialEq)]
pub struct GeminiClient {
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), api_key: api_key.into() }
    }

    async fn post_json<B: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<R, GenerationError> {
        let request = Request::post(url)
            .json(body)
            .map_err(|e| GenerationError::Failed(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| GenerationError::Failed(e.to_string()))?;
        if !response.ok() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GenerationError::Failed(format!(
                "HTTP {}: {}",
                response.status(),
                detail
            )));
        }
        response
            .json::<R>()
            .await
            .map_err(|e| GenerationError::Failed(e.to_string()))
    }

    /// Single round trip: photo in, transformed photo out as a `data:` URL.
    pub async fn generate_image(
        &self,
        mime_type: &str,
        base64_data: &str,
        instruction: &str,
    ) -> Result<MediaRef, GenerationError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, IMAGE_MODEL, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: base64_data.to_string(),
                        }),
                        text: None,
                    },
                    Part { inline_data: None, text: Some(instruction.to_string()) },
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
            },
        };
        let response: GenerateContentResponse = self.post_json(&url, &body).await?;
        let part = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find(|p| p.inline_data.is_some()))
            .and_then(|p| p.inline_data);
        match part {
            Some(inline) => Ok(MediaRef::image(format!(
                "data:{};base64,{}",
                inline.mime_type, inline.data
            ))),
            None => Err(GenerationError::Empty),
        }
    }

    /// Submits one long-running video job; the returned handle is polled via
    /// [`VideoJobPoller`].
    pub async fn start_video_job(
        &self,
        mime_type: &str,
        base64_data: &str,
        instruction: &str,
    ) -> Result<GenerationJob, GenerationError> {
        let url = format!(
            "{}/models/{}:predictLongRunning?key={}",
            self.base_url, VIDEO_MODEL, self.api_key
        );
        let body = PredictRequest {
            instances: vec![Instance {
                prompt: instruction.to_string(),
                image: ImageInput {
                    bytes_base64_encoded: base64_data.to_string(),
                    mime_type: mime_type.to_string(),
                },
            }],
            parameters: Parameters { sample_count: 1 },
        };
        let operation: Operation = self.post_json(&url, &body).await?;
        Ok(operation.into())
    }

    /// Dereferences the result URI (with the access key appended) and wraps
    /// the bytes in a local `blob:` object URL.
    pub async fn download_video(&self, uri: &str) -> Result<MediaRef, GenerationError> {
        let separator = if uri.contains('?') { '&' } else { '?' };
        let url = format!("{}{}key={}", uri, separator, self.api_key);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| GenerationError::Download(e.to_string()))?;
        if !response.ok() {
            return Err(GenerationError::Download(format!("HTTP {}", response.status())));
        }
        let bytes = response
            .binary()
            .await
            .map_err(|e| GenerationError::Download(e.to_string()))?;

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());
        let mut options = web_sys::BlobPropertyBag::new();
        options.type_("video/mp4");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|_| GenerationError::Download("falha ao montar o blob".to_string()))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| GenerationError::Download("falha ao criar a URL local".to_string()))?;
        Ok(MediaRef::video(url))
    }
}

impl VideoJobPoller for GeminiClient {
    async fn wait(&self) {
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
    }

    async fn refetch(&self, job_name: &str) -> Result<GenerationJob, GenerationError> {
        let url = format!("{}/{}?key={}", self.base_url, job_name, self.api_key);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| GenerationError::Failed(e.to_string()))?;
        if !response.ok() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GenerationError::Failed(format!(
                "HTTP {}: {}",
                response.status(),
                detail
            )));
        }
        let operation: Operation = response
            .json()
            .await
            .map_err(|e| GenerationError::Failed(e.to_string()))?;
        Ok(operation.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_json_maps_to_job() {
        let json = r#"{
            "name": "operations/xyz",
            "done": true,
            "response": {
                "generatedVideos": [
                    { "video": { "uri": "https://example.com/v.mp4?alt=media" } }
                ]
            }
        }"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        let job = GenerationJob::from(op);
        assert!(job.done);
        assert_eq!(job.name, "operations/xyz");
        assert_eq!(job.video_uri.as_deref(), Some("https://example.com/v.mp4?alt=media"));
        assert!(job.error.is_none());
    }

    #[test]
    fn pending_operation_has_no_uri() {
        let json = r#"{ "name": "operations/xyz" }"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        let job = GenerationJob::from(op);
        assert!(!job.done);
        assert!(job.video_uri.is_none());
    }

    #[test]
    fn failed_operation_carries_service_message() {
        let json = r#"{
            "name": "operations/xyz",
            "done": true,
            "error": { "message": "quota exceeded" }
        }"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        let job = GenerationJob::from(op);
        assert_eq!(job.error.as_deref(), Some("quota exceeded"));
    }
}
