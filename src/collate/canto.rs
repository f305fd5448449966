//! The document collator
//!
//! Walks three witness documents structurally and collates one canto. The
//! canto is located by its declared number in each document (a missing
//! canto aborts the run); stanzas and lines are enumerated positionally up
//! to the longest witness, padding the shorter ones with absent units.

use crate::collate::error::CollationError;
use crate::collate::line::collate_line;
use crate::collated::{
    CollatedCanto, CollatedDocument, CollatedStanza, WitnessRecord,
};
use crate::document::{Canto, Document, Line, Stanza};
use crate::witness::Witness;

/// Collate one canto of three witness documents into a critical-apparatus
/// document. Pure over the three in-memory trees; all file I/O lives with
/// the caller.
pub fn collate_canto(
    modern: &Document,
    left: &Document,
    right: &Document,
    number: u32,
) -> Result<CollatedDocument, CollationError> {
    let canto_mod = find_canto(modern, Witness::Modern, number)?;
    let canto_left = find_canto(left, Witness::Left, number)?;
    let canto_right = find_canto(right, Witness::Right, number)?;

    let stanza_count = canto_mod
        .stanzas
        .len()
        .max(canto_left.stanzas.len())
        .max(canto_right.stanzas.len());

    let mut stanzas = Vec::with_capacity(stanza_count);
    for i in 0..stanza_count {
        let stanza_mod = canto_mod.stanzas.get(i);
        let stanza_left = canto_left.stanzas.get(i);
        let stanza_right = canto_right.stanzas.get(i);
        stanzas.push(collate_stanza(stanza_mod, stanza_left, stanza_right));
    }

    Ok(CollatedDocument {
        title: format!("{} (collated)", modern.title),
        provenance: "Automated three-way collation.".to_string(),
        witnesses: Witness::ALL.iter().map(|w| WitnessRecord::for_witness(*w)).collect(),
        cantos: vec![CollatedCanto {
            number,
            heading: canto_mod.title_heading().map(str::to_string),
            stanzas,
        }],
    })
}

fn find_canto(document: &Document, witness: Witness, number: u32) -> Result<&Canto, CollationError> {
    document
        .canto(number)
        .ok_or(CollationError::CantoNotFound { witness, number })
}

/// Collate one positional stanza slot. Every slot produces a stanza, even
/// when all three witnesses are absent there.
fn collate_stanza(
    stanza_mod: Option<&Stanza>,
    stanza_left: Option<&Stanza>,
    stanza_right: Option<&Stanza>,
) -> CollatedStanza {
    let number = stanza_mod
        .and_then(|s| s.number.clone())
        .or_else(|| stanza_left.and_then(|s| s.number.clone()))
        .or_else(|| stanza_right.and_then(|s| s.number.clone()));

    let line_count = lines(stanza_mod)
        .len()
        .max(lines(stanza_left).len())
        .max(lines(stanza_right).len());

    let mut collated_lines = Vec::with_capacity(line_count);
    for j in 0..line_count {
        collated_lines.push(collate_line(
            line_at(stanza_mod, j),
            line_at(stanza_left, j),
            line_at(stanza_right, j),
        ));
    }

    CollatedStanza {
        number,
        lines: collated_lines,
    }
}

fn lines(stanza: Option<&Stanza>) -> &[Line] {
    stanza.map(|s| s.lines.as_slice()).unwrap_or(&[])
}

fn line_at(stanza: Option<&Stanza>, index: usize) -> Option<&Line> {
    stanza.and_then(|s| s.lines.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Canto, LinePiece, Stanza, TaggedUnit};

    fn modern_doc() -> Document {
        let line = Line::tagged(vec![
            TaggedUnit::word("o", "o", "DET"),
            TaggedUnit::word("mar", "mar", "NOUN"),
        ]);
        Document::with_cantos(
            "Os Lusíadas",
            vec![Canto::new(1, vec![Stanza::new("1", vec![line])])
                .with_headings(vec!["OS LVSIADAS".to_string(), "Canto Primeiro.".to_string()])],
        )
    }

    fn legacy_doc(text: &str) -> Document {
        let line = Line::plain_pieces(vec![LinePiece::text(text)]);
        Document::with_cantos(
            "Os Lusíadas",
            vec![Canto::new(1, vec![Stanza::new("1", vec![line])])],
        )
    }

    #[test]
    fn test_missing_canto_is_fatal_and_names_the_witness() {
        let modern = modern_doc();
        let left = legacy_doc("o mar");
        let right = Document::new("Os Lusíadas");
        let err = collate_canto(&modern, &left, &right, 1).unwrap_err();
        assert_eq!(
            err,
            CollationError::CantoNotFound {
                witness: Witness::Right,
                number: 1
            }
        );
    }

    #[test]
    fn test_collates_and_attaches_metadata() {
        let modern = modern_doc();
        let left = legacy_doc("o mar");
        let right = legacy_doc("o mar");
        let doc = collate_canto(&modern, &left, &right, 1).unwrap();

        assert_eq!(doc.title, "Os Lusíadas (collated)");
        assert_eq!(doc.witnesses.len(), 3);
        assert_eq!(doc.witnesses[0].id, "VMod");
        assert_eq!(doc.cantos.len(), 1);
        assert_eq!(doc.cantos[0].heading.as_deref(), Some("Canto Primeiro."));
        assert_eq!(doc.cantos[0].stanzas.len(), 1);
        assert_eq!(doc.cantos[0].stanzas[0].number.as_deref(), Some("1"));
        assert_eq!(doc.cantos[0].stanzas[0].lines[0].verbatim_count(), 2);
    }

    #[test]
    fn test_stanza_padding_uses_longest_witness() {
        let modern = modern_doc();
        let mut left = legacy_doc("o mar");
        left.cantos[0].stanzas.push(Stanza::new(
            "2",
            vec![Line::plain("e mais"), Line::plain("ainda")],
        ));
        let right = legacy_doc("o mar");

        let doc = collate_canto(&modern, &left, &right, 1).unwrap();
        let stanzas = &doc.cantos[0].stanzas;
        assert_eq!(stanzas.len(), 2);
        // Padded stanza takes its number from the only witness that has it
        // and still yields one collated line per positional slot.
        assert_eq!(stanzas[1].number.as_deref(), Some("2"));
        assert_eq!(stanzas[1].lines.len(), 2);
        assert!(!stanzas[1].lines[0].is_empty());
    }

    #[test]
    fn test_line_padding_within_stanza() {
        let modern = modern_doc();
        let mut left = legacy_doc("o mar");
        left.cantos[0].stanzas[0]
            .lines
            .push(Line::plain("verso a mais"));
        let right = legacy_doc("o mar");

        let doc = collate_canto(&modern, &left, &right, 1).unwrap();
        let lines = &doc.cantos[0].stanzas[0].lines;
        assert_eq!(lines.len(), 2);
        // The padded slot becomes a single insertion apparatus.
        assert_eq!(lines[1].apparatus_count(), 1);
        assert_eq!(lines[1].verbatim_count(), 0);
    }

    #[test]
    fn test_collation_is_deterministic() {
        let modern = modern_doc();
        let left = legacy_doc("o grande mar");
        let right = legacy_doc("o mar alto");
        let first = collate_canto(&modern, &left, &right, 1).unwrap();
        let second = collate_canto(&modern, &left, &right, 1).unwrap();
        assert_eq!(first, second);
    }
}
