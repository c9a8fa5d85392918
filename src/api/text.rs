//! Chat-completion translation client.
//!
//! Wraps the source text in a single user message asking for a translation
//! between two named languages and sends it to an OpenAI-compatible
//! chat-completion endpoint. One request per call, no retries, no streaming.

use super::client::UREQ_AGENT;
use super::error::ApiError;
use super::types::ChatCompletionResponse;
use crate::config::Config;
use log::debug;

/// Low sampling temperature to keep translations deterministic.
const TRANSLATION_TEMPERATURE: f64 = 0.3;

pub struct TranslationClient {
    endpoint: String,
    api_key: String,
    model: String,
}

impl TranslationClient {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.chat_endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.translation_model.clone(),
        }
    }

    /// Translate `text` between the two named languages. Returns the trimmed
    /// content of the first response choice.
    ///
    /// Blank-checking of `text` is the caller's job; this client will happily
    /// send whatever it is given.
    pub fn translate(
        &self,
        text: &str,
        source_lang_name: &str,
        target_lang_name: &str,
    ) -> Result<String, ApiError> {
        if self.api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }

        let prompt = build_translation_prompt(text, source_lang_name, target_lang_name);
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "temperature": TRANSLATION_TEMPERATURE,
        });

        debug!("chat completion request: model={}", self.model);

        let resp = UREQ_AGENT
            .post(&self.endpoint)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(payload)
            .map_err(ApiError::from)?;

        let parsed: ChatCompletionResponse = resp
            .into_body()
            .read_json()
            .map_err(|e| ApiError::MalformedResponse(format!("无法解析翻译响应: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ApiError::MalformedResponse("API响应中没有找到翻译结果".to_string())
            })?;

        Ok(content.trim().to_string())
    }
}

/// Build the translation instruction embedded in the user message.
pub fn build_translation_prompt(text: &str, source_lang_name: &str, target_lang_name: &str) -> String {
    format!(
        "请将以下{}文本翻译成{}:\n\n{}\n\n只返回翻译结果：",
        source_lang_name, target_lang_name, text
    )
}
