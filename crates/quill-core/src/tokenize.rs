//! Splitting text into the keys a font knows about
//!
//! Fonts bind multi-character values ("ng", "khw", "ea") as well as single
//! letters, so text can't simply be walked char by char. At each position
//! the longest known key wins, up to [`MAX_KEY_CHARS`] characters. That is
//! what tells the digraph "ch" apart from a lone "c" followed by "h".

use std::collections::BTreeSet;

use crate::font::{Font, Glyph};

/// Longest value, in characters, the tokenizer will try to match
pub const MAX_KEY_CHARS: usize = 3;

/// One recognized piece of the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'t, 'f> {
    /// The slice of input text that matched
    pub key: &'t str,
    pub glyph: &'f Glyph,
}

/// What tokenizing produced: glyphs in order, plus whatever was dropped
#[derive(Debug, Clone, Default)]
pub struct Tokenized<'t, 'f> {
    pub tokens: Vec<Token<'t, 'f>>,
    /// Characters the font couldn't place, each reported once
    pub unresolved: BTreeSet<char>,
}

impl<'t, 'f> Tokenized<'t, 'f> {
    pub fn glyphs(&self) -> Vec<&'f Glyph> {
        self.tokens.iter().map(|t| t.glyph).collect()
    }

    pub fn keys(&self) -> Vec<&'t str> {
        self.tokens.iter().map(|t| t.key).collect()
    }
}

/// Greedy longest-match segmentation of `text` against the font's value map.
///
/// Characters that start no known key are skipped and collected in
/// [`Tokenized::unresolved`]; they never make the whole call fail.
pub fn tokenize<'t, 'f>(text: &'t str, font: &'f Font) -> Tokenized<'t, 'f> {
    // Byte offset of every char boundary, end of text included
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;

    let mut result = Tokenized::default();
    let mut pos = 0;

    while pos < char_count {
        let longest = MAX_KEY_CHARS.min(char_count - pos);
        let matched = (1..=longest).rev().find_map(|len| {
            let key = &text[bounds[pos]..bounds[pos + len]];
            font.glyph_by_value(key).map(|glyph| (len, Token { key, glyph }))
        });

        match matched {
            Some((len, token)) => {
                log::trace!("token {:?} -> {}", token.key, token.glyph.name());
                result.tokens.push(token);
                pos += len;
            },
            None => {
                if let Some(ch) = text[bounds[pos]..].chars().next() {
                    result.unresolved.insert(ch);
                }
                pos += 1;
            },
        }
    }

    result
}
