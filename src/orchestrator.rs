//! Translation orchestrator.
//!
//! Owns the current language selection, input/output text, the loading flag,
//! and the bounded history. Every state field is mutated only by the
//! orchestrator's own methods; `translate()` performs exactly one blocking
//! network call and is single-flight: a second call while one is outstanding
//! is rejected with [`AlreadyInProgress`] instead of racing on state.

use std::cell::Cell;

use log::warn;
use thiserror::Error;

use crate::api::safety::ContentSafetyGate;
use crate::api::text::TranslationClient;
use crate::config::Config;
use crate::history::{HistoryCache, TranslationRecord};
use crate::lang::{self, Language};

/// A translation request is already outstanding.
#[derive(Debug, Error)]
#[error("已有翻译请求正在进行中")]
pub struct AlreadyInProgress;

const BLOCKED_MESSAGE: &str = "内容未通过安全审查，已取消翻译";

pub struct Translator {
    client: TranslationClient,
    safety: Option<ContentSafetyGate>,
    source_lang: Language,
    target_lang: Language,
    source_text: String,
    translated_text: String,
    is_loading: Cell<bool>,
    history: HistoryCache,
}

/// Clears the loading flag on every exit path, including panics.
struct LoadingGuard<'a>(&'a Cell<bool>);

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Translator {
    pub fn new(config: &Config) -> Self {
        Self {
            client: TranslationClient::new(config),
            safety: None,
            source_lang: lang::default_source(),
            target_lang: lang::default_target(),
            source_text: String::new(),
            translated_text: String::new(),
            is_loading: Cell::new(false),
            history: HistoryCache::new(),
        }
    }

    /// Attach an optional safety gate, consulted before each translation.
    pub fn with_safety_gate(mut self, gate: ContentSafetyGate) -> Self {
        self.safety = Some(gate);
        self
    }

    pub fn source_lang(&self) -> &Language {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &Language {
        &self.target_lang
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    pub fn history(&self) -> &HistoryCache {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn update_source_lang(&mut self, lang: Language) {
        self.source_lang = lang;
    }

    pub fn update_target_lang(&mut self, lang: Language) {
        self.target_lang = lang;
    }

    pub fn update_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    /// Exchange source and target. No-op while source is the auto sentinel,
    /// so "auto" can never become a target.
    pub fn swap_languages(&mut self) {
        if self.source_lang.is_auto() {
            return;
        }
        std::mem::swap(&mut self.source_lang, &mut self.target_lang);
    }

    /// Run one translation of the current source text.
    ///
    /// Errors from the remote call never escape: they are rendered into
    /// `translated_text` as a user-facing message. The only failure this
    /// method itself reports is an overlapping invocation.
    pub fn translate(&mut self) -> Result<(), AlreadyInProgress> {
        if self.is_loading.get() {
            return Err(AlreadyInProgress);
        }

        if self.source_text.trim().is_empty() {
            self.translated_text.clear();
            return Ok(());
        }

        let _loading = LoadingGuard::acquire(&self.is_loading);

        if let Some(gate) = &self.safety {
            if !gate.is_content_safe(&self.source_text) {
                warn!("content rejected by safety gate");
                self.translated_text = BLOCKED_MESSAGE.to_string();
                return Ok(());
            }
        }

        let source_name = self.source_lang.prompt_name();
        let target_name = self.target_lang.prompt_name();

        match self
            .client
            .translate(&self.source_text, source_name, target_name)
        {
            Ok(result) => {
                self.translated_text = result;
                if !self.translated_text.trim().is_empty() {
                    self.history.push(TranslationRecord::new(
                        self.source_lang.clone(),
                        self.target_lang.clone(),
                        self.source_text.clone(),
                        self.translated_text.clone(),
                    ));
                }
            }
            Err(e) => {
                warn!("translation failed: {}", e);
                self.translated_text = format!("翻译出错: {}", e);
            }
        }

        Ok(())
    }
}
