//! Tokenizers for the two witness line shapes
//!
//! Both variants share one output contract: an ordered sequence of
//! [`Token`](crate::token::Token)s per line. The modern/tagged variant maps
//! the external tagger's units 1:1; the legacy/plain variant flattens break
//! markers and lexes the raw text.
//!
//! Dispatch lives here so line-shape anomalies are recovered in one place:
//! a line of the wrong shape is logged and treated as absent. No line is
//! allowed to abort a document collation.

pub mod plain;
pub mod tagged;

use crate::document::Line;
use crate::token::Token;
use crate::witness::Witness;
use tracing::warn;

/// Tokenize the base witness's line. Expects a tagged line; a plain line
/// here means the tagging service's output is missing, which is recovered
/// as an empty line.
pub fn tokenize_modern(line: Option<&Line>) -> Vec<Token> {
    match line {
        None => Vec::new(),
        Some(Line::Tagged { units }) => tagged::tokenize(units),
        Some(Line::Plain { .. }) => {
            warn!(
                witness = %Witness::Modern,
                "expected a tagged line, found plain text; treating line as absent"
            );
            Vec::new()
        }
    }
}

/// Tokenize a historical transcription's line. Expects a plain line.
pub fn tokenize_legacy(witness: Witness, line: Option<&Line>) -> Vec<Token> {
    match line {
        None => Vec::new(),
        Some(Line::Plain { pieces }) => plain::tokenize(pieces),
        Some(Line::Tagged { .. }) => {
            warn!(
                witness = %witness,
                "expected a plain line, found tagged units; treating line as absent"
            );
            Vec::new()
        }
    }
}
