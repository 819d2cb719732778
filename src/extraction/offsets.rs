//! Whitespace tokenization and byte-offset to token-index mapping.
//!
//! The default mapping assumes tokens are separated by exactly one whitespace
//! byte: each token's offset is the running sum of `len(token) + 1`. Runs of
//! several whitespace characters make the recorded offsets drift below the
//! true ones, so lookups can land a few tokens late. Windows only need coarse
//! boundaries and normalized text rarely contains such runs, so this is an
//! accepted approximation. [`OffsetMapping::Exact`] records true offsets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetMapping {
    /// Accumulate `len(token) + 1` per token.
    #[default]
    Approximate,
    /// Scan the text and record where each token really starts.
    Exact,
}

/// Tokens of a text and the byte offset recorded for each of them.
#[derive(Debug, Clone)]
pub struct TokenMap<'a> {
    tokens: Vec<&'a str>,
    offsets: Vec<usize>,
}

impl<'a> TokenMap<'a> {
    pub fn build(text: &'a str, mapping: OffsetMapping) -> Self {
        match mapping {
            OffsetMapping::Approximate => Self::approximate(text),
            OffsetMapping::Exact => Self::exact(text),
        }
    }

    fn approximate(text: &'a str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut offsets = Vec::with_capacity(tokens.len());
        let mut cursor = 0;
        for token in &tokens {
            offsets.push(cursor);
            cursor += token.len() + 1;
        }
        Self { tokens, offsets }
    }

    fn exact(text: &'a str) -> Self {
        let mut tokens = Vec::new();
        let mut offsets = Vec::new();
        let mut token_start: Option<usize> = None;

        for (i, ch) in text.char_indices() {
            match (ch.is_whitespace(), token_start) {
                (true, Some(start)) => {
                    tokens.push(&text[start..i]);
                    offsets.push(start);
                    token_start = None;
                }
                (false, None) => token_start = Some(i),
                _ => {}
            }
        }
        if let Some(start) = token_start {
            tokens.push(&text[start..]);
            offsets.push(start);
        }

        Self { tokens, offsets }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Greatest token index whose recorded offset is `<= offset`.
    ///
    /// Never fails: offsets before the first token map to 0, offsets past the
    /// last token map to the last index, and an empty map answers 0.
    pub fn token_index(&self, offset: usize) -> usize {
        self.offsets
            .partition_point(|&o| o <= offset)
            .saturating_sub(1)
    }

    /// Tokens `[start, end)` joined with single spaces. Bounds are clipped.
    pub fn render(&self, start: usize, end: usize) -> String {
        let end = end.min(self.tokens.len());
        let start = start.min(end);
        self.tokens[start..end].join(" ")
    }
}
