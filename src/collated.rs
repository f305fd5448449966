//! Collated document model
//!
//! The output of a collation run: a single merged canto → stanza → line
//! hierarchy where each line is a sequence of verbatim tokens (all three
//! witnesses agree) and apparatus nodes (points of divergence, grouping
//! witnesses by identical reading).
//!
//! Readings keep the full token structure (text, kind, attributes) so that
//! downstream renderers can choose between a nested and a flat apparatus
//! shape; the model itself does not commit to either.

use crate::token::{Attrs, TokenKind};
use crate::witness::Witness;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The single long-lived artifact of a collation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollatedDocument {
    pub title: String,
    /// Short provenance note.
    pub provenance: String,
    pub witnesses: Vec<WitnessRecord>,
    pub cantos: Vec<CollatedCanto>,
}

/// One participant record per witness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessRecord {
    pub id: String,
    pub label: String,
}

impl WitnessRecord {
    pub fn for_witness(witness: Witness) -> Self {
        Self {
            id: witness.siglum().to_string(),
            label: witness.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollatedCanto {
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub stanzas: Vec<CollatedStanza>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollatedStanza {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub lines: Vec<CollatedLine>,
}

/// One collated line: verbatim tokens and apparatus nodes in base order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollatedLine {
    pub nodes: Vec<LineNode>,
}

impl CollatedLine {
    pub fn new(nodes: Vec<LineNode>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn apparatus_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, LineNode::Apparatus(_)))
            .count()
    }

    pub fn verbatim_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, LineNode::Verbatim(_)))
            .count()
    }
}

/// One node of a collated line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum LineNode {
    /// All three witnesses agree; carries the base witness's token.
    Verbatim(ReadingToken),
    /// A point of textual divergence.
    Apparatus(AppNode),
}

/// A point of divergence: one reading per distinct text+kind+attribute set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppNode {
    pub readings: Vec<Reading>,
}

/// One distinct variant at a divergence point with its contributing
/// witnesses. An empty token list means the witnesses have no token at this
/// position; such a reading is always emitted, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Contributing witness sigla, sorted lexicographically.
    pub witnesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<ReadingToken>,
}

impl Reading {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The reading's surface text: token surfaces joined by single spaces,
    /// or `None` for an empty reading.
    pub fn text(&self) -> Option<String> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(
                self.tokens
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        }
    }

    pub fn names_witness(&self, witness: Witness) -> bool {
        self.witnesses.iter().any(|w| w == witness.siglum())
    }
}

/// One token of a reading or a verbatim node: surface text plus structural
/// classification and attributes. Comparable forms never appear in output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingToken {
    pub text: String,
    pub kind: TokenKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Attrs,
}

impl ReadingToken {
    pub fn new(text: &str, kind: TokenKind, attrs: Attrs) -> Self {
        Self {
            text: text.to_string(),
            kind,
            attrs,
        }
    }
}

impl fmt::Display for CollatedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CollatedDocument('{}', {} witnesses, {} cantos)",
            self.title,
            self.witnesses.len(),
            self.cantos.len()
        )
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => write!(f, "[{}] {}", self.witnesses.join(" "), text),
            None => write!(f, "[{}] (absent)", self.witnesses.join(" ")),
        }
    }
}
