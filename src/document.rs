//! Source document model
//!
//! A witness document is a canto → stanza → line hierarchy. Lines of the
//! modernized edition are already segmented into tagged word/punctuation
//! units by the external tagging service; lines of the historical
//! transcriptions are raw text pieces with optional soft line-break markers.
//!
//! Documents are interchanged as JSON via serde; the collation core only
//! ever sees the deserialized trees.

use crate::token::TokenKind;
use serde::{Deserialize, Serialize};

/// One witness document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub cantos: Vec<Canto>,
}

impl Document {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            cantos: Vec::new(),
        }
    }

    pub fn with_cantos(title: &str, cantos: Vec<Canto>) -> Self {
        Self {
            title: title.to_string(),
            cantos,
        }
    }

    /// Look up a canto by its declared sequence number.
    pub fn canto(&self, number: u32) -> Option<&Canto> {
        self.cantos.iter().find(|c| c.number == number)
    }
}

/// One canto: a numbered division holding headings and stanzas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canto {
    pub number: u32,
    /// Canto headings in source order; the last one is the canto title
    /// proper (earlier ones are running titles).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headings: Vec<String>,
    pub stanzas: Vec<Stanza>,
}

impl Canto {
    pub fn new(number: u32, stanzas: Vec<Stanza>) -> Self {
        Self {
            number,
            headings: Vec::new(),
            stanzas,
        }
    }

    pub fn with_headings(mut self, headings: Vec<String>) -> Self {
        self.headings = headings;
        self
    }

    /// The heading used for collated output.
    pub fn title_heading(&self) -> Option<&str> {
        self.headings.last().map(String::as_str)
    }
}

/// One stanza: an ordered group of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stanza {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub lines: Vec<Line>,
}

impl Stanza {
    pub fn new(number: &str, lines: Vec<Line>) -> Self {
        Self {
            number: Some(number.to_string()),
            lines,
        }
    }

    pub fn unnumbered(lines: Vec<Line>) -> Self {
        Self {
            number: None,
            lines,
        }
    }
}

/// One poetic line of one witness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Line {
    /// Modern edition: pre-segmented tagged units (external tagger output).
    Tagged { units: Vec<TaggedUnit> },
    /// Historical transcription: raw text with optional break markers.
    Plain { pieces: Vec<LinePiece> },
}

impl Line {
    pub fn tagged(units: Vec<TaggedUnit>) -> Self {
        Line::Tagged { units }
    }

    /// A plain line from a single unbroken run of text.
    pub fn plain(text: &str) -> Self {
        Line::Plain {
            pieces: vec![LinePiece::text(text)],
        }
    }

    pub fn plain_pieces(pieces: Vec<LinePiece>) -> Self {
        Line::Plain { pieces }
    }
}

/// One tagged unit of a modern line: a word or punctuation mark with the
/// linguistic attributes supplied by the tagging service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedUnit {
    pub kind: TokenKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msd: Option<String>,
}

impl TaggedUnit {
    pub fn word(text: &str, lemma: &str, pos: &str) -> Self {
        Self {
            kind: TokenKind::Word,
            text: text.to_string(),
            lemma: Some(lemma.to_string()),
            pos: Some(pos.to_string()),
            msd: None,
        }
    }

    pub fn punctuation(text: &str) -> Self {
        Self {
            kind: TokenKind::Punctuation,
            text: text.to_string(),
            lemma: None,
            pos: Some("PUNCT".to_string()),
            msd: None,
        }
    }

    pub fn with_msd(mut self, msd: &str) -> Self {
        self.msd = Some(msd.to_string());
        self
    }
}

/// A break marker preceding a piece of plain-line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBreak {
    /// Normal marker: the trailing text continues after a word boundary.
    Soft,
    /// "No break" marker: the trailing text continues mid-word.
    NoBreak,
}

/// One text piece of a plain line. The first piece of a line has no break
/// marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePiece {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_before: Option<LineBreak>,
    pub text: String,
}

impl LinePiece {
    pub fn text(text: &str) -> Self {
        Self {
            break_before: None,
            text: text.to_string(),
        }
    }

    pub fn after_soft_break(text: &str) -> Self {
        Self {
            break_before: Some(LineBreak::Soft),
            text: text.to_string(),
        }
    }

    pub fn after_no_break(text: &str) -> Self {
        Self {
            break_before: Some(LineBreak::NoBreak),
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canto_lookup_by_number() {
        let doc = Document::with_cantos(
            "Os Lusíadas",
            vec![Canto::new(1, Vec::new()), Canto::new(3, Vec::new())],
        );
        assert_eq!(doc.canto(1).map(|c| c.number), Some(1));
        assert_eq!(doc.canto(3).map(|c| c.number), Some(3));
        assert!(doc.canto(2).is_none());
    }

    #[test]
    fn test_title_heading_is_last() {
        let canto = Canto::new(1, Vec::new()).with_headings(vec![
            "OS LVSIADAS de Luis de Camões.".to_string(),
            "Canto Primeiro.".to_string(),
        ]);
        assert_eq!(canto.title_heading(), Some("Canto Primeiro."));
    }

    #[test]
    fn test_line_json_round_trip() {
        let line = Line::plain_pieces(vec![
            LinePiece::text("As armas, & os ba"),
            LinePiece::after_no_break("rões assinalados"),
        ]);
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"kind\":\"plain\""));
        assert!(json.contains("\"break_before\":\"no_break\""));
        let back: Line = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }

    #[test]
    fn test_tagged_unit_json_shape() {
        let unit = TaggedUnit::word("armas", "arma", "NOUN").with_msd("Gender=Fem|Number=Plur");
        let json = serde_json::to_string(&unit).unwrap();
        assert!(json.contains("\"kind\":\"word\""));
        assert!(json.contains("\"lemma\":\"arma\""));
        assert!(json.contains("\"msd\":\"Gender=Fem|Number=Plur\""));
    }

    #[test]
    fn test_punctuation_unit_has_no_lemma() {
        let unit = TaggedUnit::punctuation(",");
        assert_eq!(unit.kind, TokenKind::Punctuation);
        assert!(unit.lemma.is_none());
        assert_eq!(unit.pos.as_deref(), Some("PUNCT"));
    }
}
