//! Mock vendor backend for integration tests
//!
//! Serves the Murf, AssemblyAI and Gemini endpoints the relay calls, under
//! `/murf/v1`, `/assemblyai/v2` and `/gemini/v1beta` respectively.
//!
//! Uploaded audio selects the transcription outcome:
//! - `speech:<text>` completes with `<text>`
//! - `silence` completes with no text
//! - `garbled` ends in the `error` status
//! - `stuck` never leaves `processing`
//!
//! Synthesis of any text containing `[murf-fail]` is rejected, text containing
//! `[murf-no-audio]` is answered without an `audioFile`, and a prompt
//! of `[empty]` or `[gemini-down]` makes Gemini return no candidates or a 503.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

pub const MURF_KEY: &str = "murf-test-key";
pub const ASSEMBLYAI_KEY: &str = "assemblyai-test-key";
pub const GEMINI_KEY: &str = "gemini-test-key";

/// Polls answered with `processing` before a job resolves
const PENDING_POLLS: u32 = 2;

/// Mock vendor backend that returns predictable responses
pub struct MockVendor {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<VendorState>,
}

#[derive(Default)]
struct VendorState {
    murf_calls: AtomicU32,
    murf_requests: Mutex<Vec<Value>>,
    uploads: Mutex<Vec<Vec<u8>>>,
    jobs: Mutex<HashMap<String, Job>>,
    gemini_requests: Mutex<Vec<(String, Value)>>,
}

struct Job {
    audio: Vec<u8>,
    polls: u32,
}

impl MockVendor {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(VendorState::default());

        let app = Router::new()
            .route("/murf/v1/speech/generate", routing::post(murf_generate))
            .route("/assemblyai/v2/upload", routing::post(assemblyai_upload))
            .route("/assemblyai/v2/transcript", routing::post(assemblyai_create))
            .route("/assemblyai/v2/transcript/{id}", routing::get(assemblyai_poll))
            .route("/gemini/v1beta/models/{call}", routing::post(gemini_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    pub fn murf_url(&self) -> String {
        format!("http://{}/murf/v1", self.addr)
    }

    pub fn assemblyai_url(&self) -> String {
        format!("http://{}/assemblyai/v2", self.addr)
    }

    pub fn gemini_url(&self) -> String {
        format!("http://{}/gemini/v1beta", self.addr)
    }

    /// Number of synthesis requests received
    pub fn murf_calls(&self) -> u32 {
        self.state.murf_calls.load(Ordering::SeqCst)
    }

    /// Body of the most recent synthesis request
    pub fn last_murf_request(&self) -> Option<Value> {
        self.state.murf_requests.lock().unwrap().last().cloned()
    }

    /// Number of audio uploads received
    pub fn upload_count(&self) -> usize {
        self.state.uploads.lock().unwrap().len()
    }

    /// Model and body of the most recent Gemini request
    pub fn last_gemini_request(&self) -> Option<(String, Value)> {
        self.state.gemini_requests.lock().unwrap().last().cloned()
    }
}

impl Drop for MockVendor {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn header_is(headers: &HeaderMap, name: &str, expected: &str) -> bool {
    headers.get(name).and_then(|v| v.to_str().ok()) == Some(expected)
}

async fn murf_generate(State(state): State<Arc<VendorState>>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !header_is(&headers, "api-key", MURF_KEY) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "errorMessage": "Invalid api key" }))).into_response();
    }

    let call = state.murf_calls.fetch_add(1, Ordering::SeqCst) + 1;
    let text = body["text"].as_str().unwrap_or_default().to_owned();
    state.murf_requests.lock().unwrap().push(body);

    if text.contains("[murf-fail]") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "errorMessage": "Text contains unsupported characters" })),
        )
            .into_response();
    }

    if text.contains("[murf-no-audio]") {
        return Json(json!({ "audioLengthInSeconds": 0.0, "encodedAudio": null })).into_response();
    }

    Json(json!({
        "audioFile": format!("https://murf.mock/audio/{call}.wav"),
        "audioLengthInSeconds": 1.5,
        "encodedAudio": null,
    }))
    .into_response()
}

async fn assemblyai_upload(State(state): State<Arc<VendorState>>, headers: HeaderMap, body: Bytes) -> Response {
    if !header_is(&headers, "authorization", ASSEMBLYAI_KEY) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Authentication error" }))).into_response();
    }

    let mut uploads = state.uploads.lock().unwrap();
    uploads.push(body.to_vec());
    let index = uploads.len() - 1;

    Json(json!({ "upload_url": format!("https://cdn.mock/upload/{index}") })).into_response()
}

async fn assemblyai_create(State(state): State<Arc<VendorState>>, Json(body): Json<Value>) -> Response {
    let index = body["audio_url"]
        .as_str()
        .and_then(|url| url.rsplit('/').next())
        .and_then(|index| index.parse::<usize>().ok());

    let Some(audio) = index.and_then(|i| state.uploads.lock().unwrap().get(i).cloned()) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Invalid audio_url" }))).into_response();
    };

    let id = format!("tx-{}", index.unwrap_or_default());
    state.jobs.lock().unwrap().insert(id.clone(), Job { audio, polls: 0 });

    Json(json!({ "id": id, "status": "queued", "text": null })).into_response()
}

async fn assemblyai_poll(State(state): State<Arc<VendorState>>, Path(id): Path<String>) -> Response {
    let mut jobs = state.jobs.lock().unwrap();

    let Some(job) = jobs.get_mut(&id) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "Transcript not found" }))).into_response();
    };

    job.polls += 1;

    if job.polls <= PENDING_POLLS || job.audio == b"stuck" {
        return Json(json!({ "id": id, "status": "processing", "text": null })).into_response();
    }

    let audio = String::from_utf8_lossy(&job.audio).into_owned();

    let body = if let Some(text) = audio.strip_prefix("speech:") {
        json!({ "id": id, "status": "completed", "text": text })
    } else if audio == "garbled" {
        json!({ "id": id, "status": "error", "text": null, "error": "File does not appear to contain audio." })
    } else {
        json!({ "id": id, "status": "completed", "text": "" })
    };

    Json(body).into_response()
}

async fn gemini_generate(
    State(state): State<Arc<VendorState>>,
    Path(call): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if query.get("key").map(String::as_str) != Some(GEMINI_KEY) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" } })),
        )
            .into_response();
    }

    let Some(model) = call.strip_suffix(":generateContent") else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_owned();
    state
        .gemini_requests
        .lock()
        .unwrap()
        .push((model.to_owned(), body));

    match prompt.as_str() {
        "[empty]" => Json(json!({ "candidates": [], "promptFeedback": { "blockReason": "OTHER" } })).into_response(),
        "[gemini-down]" => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": { "code": 503, "message": "The model is overloaded.", "status": "UNAVAILABLE" } })),
        )
            .into_response(),
        _ => Json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": format!("You asked: {prompt}") }] },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": { "promptTokenCount": 4, "candidatesTokenCount": 40, "totalTokenCount": 44 }
        }))
        .into_response(),
    }
}
