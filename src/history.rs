//! Bounded in-memory history of completed translations.
//!
//! Records are immutable once inserted; eviction past the capacity bound is
//! the only removal path. Nothing is persisted across process restarts.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Local;
use lazy_static::lazy_static;

use crate::lang::Language;

/// Maximum number of records retained.
pub const HISTORY_CAPACITY: usize = 20;

lazy_static! {
    // Seeded from wall-clock millis so ids stay unique and roughly time-based
    // even within the same millisecond.
    static ref RECORD_ID_COUNTER: AtomicI64 = AtomicI64::new(Local::now().timestamp_millis());
}

fn next_record_id() -> i64 {
    RECORD_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// One completed translation. Created only for a successful, non-blank result.
#[derive(Clone, Debug)]
pub struct TranslationRecord {
    pub id: i64,
    pub timestamp: String,
    pub source_lang: Language,
    pub target_lang: Language,
    pub source_text: String,
    pub translated_text: String,
}

impl TranslationRecord {
    pub fn new(
        source_lang: Language,
        target_lang: Language,
        source_text: String,
        translated_text: String,
    ) -> Self {
        Self {
            id: next_record_id(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            source_lang,
            target_lang,
            source_text,
            translated_text,
        }
    }
}

/// Ordered newest-first, capacity-bounded record list.
pub struct HistoryCache {
    items: Vec<TranslationRecord>,
    capacity: usize,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Prepend a record, dropping the oldest entry beyond capacity.
    pub fn push(&mut self, record: TranslationRecord) {
        self.items.insert(0, record);
        if self.items.len() > self.capacity {
            self.items.truncate(self.capacity);
        }
    }

    /// Records newest first.
    pub fn list(&self) -> &[TranslationRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for HistoryCache {
    fn default() -> Self {
        Self::new()
    }
}
