//! Tokenizer for modern, pre-tagged lines
//!
//! The external tagging service segments each modern line into word and
//! punctuation units carrying lemma, part-of-speech and morphology. Each
//! unit maps 1:1 to one token; the comparable form is the lower-cased
//! surface.

use crate::document::TaggedUnit;
use crate::token::{Attrs, Token};

/// Convert one line of tagged units into tokens.
pub fn tokenize(units: &[TaggedUnit]) -> Vec<Token> {
    units.iter().map(token_for_unit).collect()
}

fn token_for_unit(unit: &TaggedUnit) -> Token {
    let mut attrs: Attrs = Vec::new();
    if let Some(lemma) = &unit.lemma {
        attrs.push(("lemma".to_string(), lemma.clone()));
    }
    if let Some(pos) = &unit.pos {
        attrs.push(("pos".to_string(), pos.clone()));
    }
    if let Some(msd) = &unit.msd {
        attrs.push(("msd".to_string(), msd.clone()));
    }
    Token {
        surface: unit.text.clone(),
        comparable: unit.text.to_lowercase(),
        kind: unit.kind,
        attrs,
    }
}
