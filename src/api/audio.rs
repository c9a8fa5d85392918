//! Speech client: audio transcription and text-to-speech synthesis.
//!
//! Both operations return results directly instead of delivering them through
//! callback listeners; the caller owns any file or playback lifecycle for the
//! bytes returned by [`SpeechClient::synthesize`].

use std::io::Read;

use super::client::UREQ_AGENT;
use super::error::ApiError;
use crate::config::Config;
use chrono::Local;
use log::{debug, warn};

pub struct SpeechClient {
    transcription_endpoint: String,
    speech_endpoint: String,
    api_key: String,
    transcription_model: String,
    speech_model: String,
    voice: String,
}

impl SpeechClient {
    pub fn new(config: &Config) -> Self {
        Self {
            transcription_endpoint: config.transcription_endpoint.clone(),
            speech_endpoint: config.speech_endpoint.clone(),
            api_key: config.api_key.clone(),
            transcription_model: config.transcription_model.clone(),
            speech_model: config.speech_model.clone(),
            voice: config.speech_voice.clone(),
        }
    }

    /// Upload a recorded clip and return the recognized text.
    ///
    /// A response without a `text` field yields an empty string rather than an
    /// error; the degradation is logged so it stays observable.
    pub fn transcribe(&self, audio: &[u8]) -> Result<String, ApiError> {
        if self.api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }

        let boundary = format!(
            "----PocketTranslatorBoundary{}",
            Local::now().timestamp_millis()
        );

        let mut body = Vec::new();

        // model field
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"model\"\r\n\r\n");
        body.extend_from_slice(self.transcription_model.as_bytes());
        body.extend_from_slice(b"\r\n");

        // file field
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"file\"; filename=\"speech.mp3\"\r\n",
        );
        body.extend_from_slice(b"Content-Type: audio/mpeg\r\n\r\n");
        body.extend_from_slice(audio);
        body.extend_from_slice(b"\r\n");

        body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

        debug!(
            "transcription request: model={} bytes={}",
            self.transcription_model,
            audio.len()
        );

        let resp = UREQ_AGENT
            .post(&self.transcription_endpoint)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header(
                "Content-Type",
                &format!("multipart/form-data; boundary={}", boundary),
            )
            .send(&body)
            .map_err(ApiError::from)?;

        let json: serde_json::Value = resp
            .into_body()
            .read_json()
            .map_err(|e| ApiError::MalformedResponse(format!("无法解析语音识别响应: {}", e)))?;

        let text = json.get("text").and_then(|t| t.as_str()).unwrap_or_default();
        if text.is_empty() {
            warn!("transcription response carried no text");
        }
        Ok(text.to_string())
    }

    /// Synthesize `text` to speech and return the raw audio bytes.
    pub fn synthesize(&self, text: &str) -> Result<Vec<u8>, ApiError> {
        if self.api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }

        let payload = serde_json::json!({
            "model": self.speech_model,
            "input": text,
            "voice": self.voice,
        });

        debug!("speech synthesis request: model={}", self.speech_model);

        let resp = UREQ_AGENT
            .post(&self.speech_endpoint)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(payload)
            .map_err(ApiError::from)?;

        let mut audio = Vec::new();
        resp.into_body()
            .into_reader()
            .read_to_end(&mut audio)
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(audio)
    }
}
