//! The token value type shared by both tokenizer variants
//!
//! Tokens are produced fresh for each line of a witness and consumed
//! immediately by the aligner and the line collator. The `comparable` form
//! is used only for alignment; all emitted output uses the `surface` form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered attribute pairs (lemma, pos, msd, ...). The tokenizers emit them
/// in a fixed order, so grouping keys can compare them structurally.
pub type Attrs = Vec<(String, String)>;

/// Word or punctuation classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Word,
    Punctuation,
}

/// One token of one witness line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Original text as it appears in the witness.
    pub surface: String,
    /// Lower-cased normalized form used only for matching.
    pub comparable: String,
    pub kind: TokenKind,
    /// Linguistic attributes; empty for legacy tokens unless fixed by the
    /// tokenizer (the ampersand conjunction).
    pub attrs: Attrs,
}

impl Token {
    /// A word token with the default comparable form (lower-cased surface).
    pub fn word(surface: &str) -> Self {
        Self {
            surface: surface.to_string(),
            comparable: surface.to_lowercase(),
            kind: TokenKind::Word,
            attrs: Vec::new(),
        }
    }

    /// A punctuation token. Punctuation never carries attributes.
    pub fn punctuation(surface: &str) -> Self {
        Self {
            surface: surface.to_string(),
            comparable: surface.to_lowercase(),
            kind: TokenKind::Punctuation,
            attrs: Vec::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Override the comparable form (e.g. "&" compares as "e").
    pub fn with_comparable(mut self, comparable: &str) -> Self {
        self.comparable = comparable.to_string();
        self
    }

    pub fn is_punctuation(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Word => write!(f, "w({})", self.surface),
            TokenKind::Punctuation => write!(f, "pc({})", self.surface),
        }
    }
}
