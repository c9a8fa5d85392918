pub mod client;
pub mod error;
pub mod types;
pub mod text;
pub mod audio;
pub mod safety;

pub use audio::SpeechClient;
pub use error::ApiError;
pub use safety::ContentSafetyGate;
pub use text::TranslationClient;
