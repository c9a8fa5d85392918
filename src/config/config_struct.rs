//! Config struct definition.

use serde::{Deserialize, Serialize};

use super::defaults::{
    default_chat_endpoint, default_safety_endpoint, default_speech_endpoint,
    default_speech_model, default_speech_voice, default_transcription_endpoint,
    default_transcription_model, default_translation_model,
};

/// Explicit configuration passed into the client constructors. One instance is
/// loaded at startup and owned by the application context; clients copy the
/// fields they need. Values are plain strings; the only validation anywhere is
/// a blank check on the API key before a request is issued.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_chat_endpoint")]
    pub chat_endpoint: String,
    #[serde(default = "default_transcription_endpoint")]
    pub transcription_endpoint: String,
    #[serde(default = "default_speech_endpoint")]
    pub speech_endpoint: String,
    #[serde(default = "default_safety_endpoint")]
    pub safety_endpoint: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_translation_model")]
    pub translation_model: String,
    #[serde(default = "default_transcription_model")]
    pub transcription_model: String,
    #[serde(default = "default_speech_model")]
    pub speech_model: String,
    #[serde(default = "default_speech_voice")]
    pub speech_voice: String,

    /// Consult the moderation endpoint before each translation.
    #[serde(default)]
    pub safety_check_enabled: bool,
}
