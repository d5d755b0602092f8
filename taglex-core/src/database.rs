//! CSV loading and the two-stage search algorithm.
use std::collections::HashSet;

use taglex_unicode::{normalize, shorten, utf8_to_utf16};

use crate::arena::Arena;
use crate::gap_match::gap_match;
use crate::word::{is_subsequence, Word};

/// Stage 1 stops scanning once this many entries have matched, even if the
/// full `words` list has not been walked.
pub const INITIAL_CUTOFF: usize = 1600;

/// Stage 3 returns at most this many entries.
pub const FINAL_CUTOFF: usize = 256;

/// CSV fields (and the keys derived from them) longer than this many bytes
/// are dropped at load time.
pub const MAX_WORD_LEN: usize = 64;

/// A named, bulk-loaded dictionary of [`Word`]s.
///
/// `load` atomically replaces both the arena and the word list; no search
/// may be in flight while that happens. This type assumes a single host
/// thread per `Database`.
pub struct Database {
    name: String,
    arena: Arena,
    words: Vec<Word>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Database {
        Database { name: name.into(), arena: Arena::new(), words: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Bulk-replace the contents of this database from CSV text. Each
    /// non-empty line is `word,category,freq,redirect`. Rows with a `word`
    /// or `redirect` field longer than [`MAX_WORD_LEN`] bytes, or with the
    /// wrong number of fields, are dropped silently.
    pub fn load(&mut self, csv: &str) {
        let mut arena = Arena::new();
        let mut words = Vec::new();
        let mut dropped = 0u32;

        for line in csv.split('\n') {
            if line.is_empty() {
                continue;
            }
            match parse_row(line) {
                Some((word, category, freq, redirect)) => {
                    if word.len() > MAX_WORD_LEN || redirect.len() > MAX_WORD_LEN {
                        dropped += 1;
                        continue;
                    }
                    let normalized = normalize(word.as_bytes());
                    let shortened = shorten(word.as_bytes());
                    let normalized = utf8_to_utf16(normalized.as_bytes());
                    let shortened = utf8_to_utf16(shortened.as_bytes());

                    words.push(Word {
                        normalized: arena.intern_units(&normalized),
                        shortened: arena.intern_units(&shortened),
                        word: arena.intern_str(word),
                        redirect: arena.intern_str(redirect),
                        freq,
                        category,
                        priority: 0,
                    });
                }
                None => dropped += 1,
            }
        }

        log::debug!(
            "database '{}': loaded {} words, dropped {}",
            self.name,
            words.len(),
            dropped
        );
        self.arena = arena;
        self.words = words;
    }

    /// Run the two-stage subsequence-then-rerank search, returning at
    /// most [`FINAL_CUTOFF`] entries.
    pub fn search(&self, query: &str) -> Vec<Word> {
        let q_text = normalize(query.as_bytes());
        let q = utf8_to_utf16(q_text.as_bytes());

        // Stage 1: subsequence filter, bounded by INITIAL_CUTOFF.
        let mut working: Vec<&Word> = Vec::new();
        let mut canonical_seen: HashSet<&str> = HashSet::new();
        for w in &self.words {
            if is_subsequence(&q, &w.normalized) {
                if w.is_canonical() {
                    canonical_seen.insert(&*w.word);
                }
                working.push(w);
                if working.len() >= INITIAL_CUTOFF {
                    break;
                }
            }
        }

        // Stage 2: redirect dedup.
        let survivors: Vec<&Word> = working
            .into_iter()
            .filter(|w| w.is_canonical() || !canonical_seen.contains(&*w.redirect))
            .collect();

        // Stage 3: score and rerank.
        let mut scored: Vec<((i64, i64, i64, i64), &Word)> = survivors
            .into_iter()
            .map(|w| {
                let key = (
                    gap_match(&q, &w.shortened),
                    gap_match(&q, &w.normalized),
                    -(w.priority as i64),
                    -w.freq,
                );
                (key, w)
            })
            .collect();
        scored.sort_by(|a, b| a.0.cmp(&b.0));

        let take = FINAL_CUTOFF.min(scored.len());
        log::trace!(
            "database '{}': search {:?} -> {} survivors, returning {}",
            self.name,
            query,
            scored.len(),
            take
        );
        scored.into_iter().take(take).map(|(_, w)| w.clone()).collect()
    }
}

/// Split one CSV line into its four fields. Returns `None` if the line
/// does not have exactly four comma-separated fields (the row is then
/// dropped instead of loaded).
fn parse_row(line: &str) -> Option<(&str, i32, i64, &str)> {
    let first = line.find(',')?;
    let (word, rest) = (&line[..first], &line[first + 1..]);
    let second = rest.find(',')?;
    let (category, rest) = (&rest[..second], &rest[second + 1..]);
    let third = rest.find(',')?;
    let (freq, redirect) = (&rest[..third], &rest[third + 1..]);

    let category: i32 = category.trim().parse().unwrap_or(0);
    let freq: i64 = freq.trim().parse().unwrap_or(0);
    Some((word, category, freq, redirect))
}
