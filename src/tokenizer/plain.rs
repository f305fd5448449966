//! Tokenizer for legacy, plain-text lines
//!
//! Historical transcription lines arrive as text pieces separated by break
//! markers. "No break" markers splice their trailing text mid-word; soft
//! markers splice with a single space unless the preceding character already
//! joins (whitespace, hyphen, or punctuation). The flattened text is then
//! lexed into word runs and single punctuation characters.
//!
//! The ampersand is special: the transcriptions abbreviate the conjunction
//! "e" as "&", so it tokenizes as a word with comparable form "e" and fixed
//! conjunction attributes, letting it align against modern editions that
//! spell it out.

use crate::document::{LineBreak, LinePiece};
use crate::token::Token;
use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters after which a soft break needs no inserted space.
static TRAILING_JOIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-.,:;?!&]$").expect("trailing-join pattern is valid"));

/// Raw lexemes of a flattened plain line. The punctuation set is fixed;
/// everything else that is not whitespace is a word run.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
enum RawToken {
    #[regex(r"[.,:;?!&]")]
    Punctuation,

    #[regex(r"[^\s.,:;?!&]+")]
    Word,
}

/// Tokenize one plain line. Never fails; an empty line yields no tokens.
pub fn tokenize(pieces: &[LinePiece]) -> Vec<Token> {
    let text = flatten(pieces);
    tokenize_text(&text)
}

/// Join line pieces into one string, applying the break-marker rules.
fn flatten(pieces: &[LinePiece]) -> String {
    let mut out = String::new();
    for piece in pieces {
        if matches!(piece.break_before, Some(LineBreak::Soft))
            && !out.is_empty()
            && !TRAILING_JOIN.is_match(&out)
        {
            out.push(' ');
        }
        out.push_str(&piece.text);
    }
    out.trim().to_string()
}

/// Lex flattened line text into tokens.
fn tokenize_text(text: &str) -> Vec<Token> {
    let mut lexer = RawToken::lexer(text);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(RawToken::Word) => tokens.push(Token::word(slice)),
            Ok(RawToken::Punctuation) => tokens.push(classify_punctuation(slice)),
            // The word rule matches any non-space, non-punctuation run, so
            // the lexer cannot reject input; nothing to recover.
            Err(()) => {}
        }
    }

    tokens
}

fn classify_punctuation(slice: &str) -> Token {
    if slice == "&" {
        Token::word("&").with_comparable("e").with_attrs(vec![
            ("lemma".to_string(), "e".to_string()),
            ("pos".to_string(), "CCONJ".to_string()),
        ])
    } else {
        Token::punctuation(slice)
    }
}
