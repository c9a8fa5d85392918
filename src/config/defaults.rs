//! Config Default implementation and per-field default functions.
//!
//! Endpoints and model identifiers default to the SiliconFlow deployment the
//! app ships against. The API key has no default; it is supplied by the user
//! through the settings form.

use super::config_struct::Config;

pub(super) fn default_chat_endpoint() -> String {
    "https://api.siliconflow.cn/v1/chat/completions".to_string()
}

pub(super) fn default_transcription_endpoint() -> String {
    "https://api.siliconflow.cn/v1/audio/transcriptions".to_string()
}

pub(super) fn default_speech_endpoint() -> String {
    "https://api.siliconflow.cn/v1/audio/speech".to_string()
}

pub(super) fn default_safety_endpoint() -> String {
    "https://safe.nanaraku.com".to_string()
}

pub(super) fn default_translation_model() -> String {
    "Qwen/Qwen3-Coder-30B-A3B-Instruct".to_string()
}

pub(super) fn default_transcription_model() -> String {
    "FunAudioLLM/SenseVoiceSmall".to_string()
}

pub(super) fn default_speech_model() -> String {
    "fnlp/MOSS-TTSD-v0.5".to_string()
}

pub(super) fn default_speech_voice() -> String {
    "fnlp/MOSS-TTSD-v0.5:alex".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat_endpoint: default_chat_endpoint(),
            transcription_endpoint: default_transcription_endpoint(),
            speech_endpoint: default_speech_endpoint(),
            safety_endpoint: default_safety_endpoint(),
            api_key: String::new(),
            translation_model: default_translation_model(),
            transcription_model: default_transcription_model(),
            speech_model: default_speech_model(),
            speech_voice: default_speech_voice(),
            safety_check_enabled: false,
        }
    }
}
