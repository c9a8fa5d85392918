//! Translation pipeline for an LLM-backed translator client.
//!
//! The crate covers everything below the UI: a chat-completion translation
//! client, a speech client (transcription and text-to-speech), an optional
//! fail-closed content safety gate, a single-flight translation orchestrator,
//! and a bounded in-memory history of recent translations. Screens, audio
//! capture, and playback are external collaborators that call in through
//! [`Translator`] and [`SpeechClient`].

pub mod api;
pub mod config;
pub mod history;
pub mod lang;
pub mod orchestrator;

pub use api::{ApiError, ContentSafetyGate, SpeechClient, TranslationClient};
pub use config::Config;
pub use history::{HistoryCache, TranslationRecord, HISTORY_CAPACITY};
pub use lang::{Language, LANGUAGES};
pub use orchestrator::{AlreadyInProgress, Translator};

/// Process-wide application context: owns the loaded configuration and the
/// pipeline built from it. Constructed once at startup; there are no ambient
/// globals to reach for by name.
pub struct AppContext {
    pub config: Config,
    pub translator: Translator,
    pub speech: SpeechClient,
}

impl AppContext {
    /// Load configuration from disk and build the pipeline from it.
    pub fn load() -> Self {
        Self::with_config(config::load_config())
    }

    pub fn with_config(config: Config) -> Self {
        let mut translator = Translator::new(&config);
        if config.safety_check_enabled {
            translator = translator.with_safety_gate(ContentSafetyGate::new(&config));
        }
        let speech = SpeechClient::new(&config);
        Self {
            config,
            translator,
            speech,
        }
    }
}
