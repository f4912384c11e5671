use std::{
    collections::HashMap,
    sync::{
        RwLock,
        atomic::{AtomicU64, Ordering},
    },
};

use super::{highlight_line, language::LanguageRegistry, types::CodeToken};

/// Entry count at which a default cache starts over.
pub const DEFAULT_MAX_ENTRIES: usize = 8192;

#[derive(Debug)]
struct Entry {
    tokens: Vec<CodeToken>,
    last_used: AtomicU64,
}

/// Read-through cache of highlighted lines keyed by `(language, line)`.
///
/// The cache is owned by the caller and passed in explicitly; the engine never
/// holds one of its own. Reads take a shared lock, misses take the write lock
/// only to insert. A cache must only ever be used with one registry, since
/// entries don't record which registry produced them.
///
/// Size is bounded two ways: inserting into a full cache empties it first, and
/// [`HighlightCache::sweep`] drops whatever the latest parse didn't touch.
#[derive(Debug)]
pub struct HighlightCache {
    entries: RwLock<HashMap<(String, String), Entry>>,
    generation: AtomicU64,
    max_entries: usize,
}

impl Default for HighlightCache {
    fn default() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }
}

impl HighlightCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            generation: AtomicU64::new(0),
            max_entries: max_entries.max(1),
        }
    }

    /// Returns the cached tokens for `line`, highlighting and storing them on
    /// a miss.
    pub fn get_or_highlight(
        &self,
        registry: &LanguageRegistry,
        language: &str,
        line: &str,
    ) -> Vec<CodeToken> {
        let key = (language.to_ascii_lowercase(), line.to_string());
        let generation = self.generation.load(Ordering::Relaxed);

        if let Ok(entries) = self.entries.read()
            && let Some(entry) = entries.get(&key)
        {
            entry.last_used.store(generation, Ordering::Relaxed);
            return entry.tokens.clone();
        }

        let tokens = highlight_line(registry, language, line);
        // A poisoned lock only costs us the memoization.
        if let Ok(mut entries) = self.entries.write() {
            if !entries.contains_key(&key) && entries.len() >= self.max_entries {
                log::debug!("highlight cache full at {} entries, clearing", entries.len());
                entries.clear();
            }
            entries.entry(key).or_insert_with(|| Entry {
                tokens: tokens.clone(),
                last_used: AtomicU64::new(generation),
            });
        }
        tokens
    }

    /// Drops every entry not used since the previous sweep and starts a new
    /// generation. Returns how many entries were dropped.
    ///
    /// Calling this after each parse of a live document keeps only the lines
    /// of its latest version.
    pub fn sweep(&self) -> usize {
        let Ok(mut entries) = self.entries.write() else {
            return 0;
        };
        let current = self.generation.fetch_add(1, Ordering::Relaxed);
        let before = entries.len();
        entries.retain(|_, e| e.last_used.load(Ordering::Relaxed) >= current);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |e| e.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}
