//! Property tests for the aligner and the line collator
//!
//! Randomized inputs over a small vocabulary, so matches, replacements,
//! insertions, and deletions all occur often.

use apparatus::align::{align, opcodes, OpTag};
use apparatus::collate::collate_line;
use apparatus::collated::LineNode;
use apparatus::document::{Line, TaggedUnit};
use apparatus::token::Token;
use apparatus::witness::Witness;
use proptest::prelude::*;

fn vocab_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "as".to_string(),
        "armas".to_string(),
        "e".to_string(),
        "os".to_string(),
        "barões".to_string(),
        "mar".to_string(),
        "grande".to_string(),
    ])
}

fn word_seq() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(vocab_word(), 0..8)
}

proptest! {
    /// The edit script is a deterministic function of its inputs.
    #[test]
    fn opcodes_are_deterministic(base in word_seq(), target in word_seq()) {
        let base_refs: Vec<&str> = base.iter().map(String::as_str).collect();
        let target_refs: Vec<&str> = target.iter().map(String::as_str).collect();
        prop_assert_eq!(
            opcodes(&base_refs, &target_refs),
            opcodes(&base_refs, &target_refs)
        );
    }

    /// Opcode ranges tile both sequences without gaps or overlaps.
    #[test]
    fn opcodes_cover_both_sequences(base in word_seq(), target in word_seq()) {
        let base_refs: Vec<&str> = base.iter().map(String::as_str).collect();
        let target_refs: Vec<&str> = target.iter().map(String::as_str).collect();
        let ops = opcodes(&base_refs, &target_refs);

        let mut i = 0;
        let mut j = 0;
        for op in &ops {
            prop_assert_eq!(op.base_start, i);
            prop_assert_eq!(op.target_start, j);
            prop_assert!(op.base_end >= op.base_start);
            prop_assert!(op.target_end >= op.target_start);
            i = op.base_end;
            j = op.target_end;
        }
        prop_assert_eq!(i, base.len());
        prop_assert_eq!(j, target.len());
    }

    /// Equal opcodes really are equal, position for position.
    #[test]
    fn equal_opcodes_match_token_for_token(base in word_seq(), target in word_seq()) {
        let base_refs: Vec<&str> = base.iter().map(String::as_str).collect();
        let target_refs: Vec<&str> = target.iter().map(String::as_str).collect();
        for op in opcodes(&base_refs, &target_refs) {
            if op.tag == OpTag::Equal {
                prop_assert_eq!(
                    op.base_end - op.base_start,
                    op.target_end - op.target_start
                );
                for k in 0..(op.base_end - op.base_start) {
                    prop_assert_eq!(base_refs[op.base_start + k], target_refs[op.target_start + k]);
                }
            }
        }
    }

    /// Every target token lands exactly once: in a slot or in an insertion.
    #[test]
    fn alignment_accounts_for_every_target_token(base in word_seq(), target in word_seq()) {
        let base_tokens: Vec<Token> = base.iter().map(|w| Token::word(w)).collect();
        let target_tokens: Vec<Token> = target.iter().map(|w| Token::word(w)).collect();
        let alignment = align(&base_tokens, &target_tokens);

        prop_assert_eq!(alignment.slots.len(), base.len());
        let placed = alignment.slots.iter().filter(|s| s.is_some()).count();
        let inserted: usize = alignment.insertions.iter().map(|b| b.tokens.len()).sum();
        prop_assert_eq!(placed + inserted, target.len());

        let mut last_anchor = 0;
        for block in &alignment.insertions {
            prop_assert!(block.anchor >= last_anchor);
            prop_assert!(block.anchor <= base.len());
            prop_assert!(!block.tokens.is_empty());
            last_anchor = block.anchor;
        }
    }

    /// Every apparatus node produced by line collation partitions the
    /// witness set, and readings never repeat within a node.
    #[test]
    fn line_collation_partitions_witnesses(
        base in word_seq(),
        left in word_seq(),
        right in word_seq(),
    ) {
        let modern = Line::tagged(
            base.iter().map(|w| TaggedUnit::word(w, w, "NOUN")).collect(),
        );
        let left_line = Line::plain(&left.join(" "));
        let right_line = Line::plain(&right.join(" "));
        let line = collate_line(Some(&modern), Some(&left_line), Some(&right_line));

        for node in &line.nodes {
            if let LineNode::Apparatus(app) = node {
                prop_assert!(app.readings.len() >= 2);
                for witness in Witness::ALL {
                    let count = app
                        .readings
                        .iter()
                        .filter(|r| r.names_witness(witness))
                        .count();
                    prop_assert_eq!(count, 1);
                }
            }
        }
    }

    /// Line collation is deterministic end to end.
    #[test]
    fn line_collation_is_deterministic(
        base in word_seq(),
        left in word_seq(),
        right in word_seq(),
    ) {
        let modern = Line::tagged(
            base.iter().map(|w| TaggedUnit::word(w, w, "NOUN")).collect(),
        );
        let left_line = Line::plain(&left.join(" "));
        let right_line = Line::plain(&right.join(" "));
        prop_assert_eq!(
            collate_line(Some(&modern), Some(&left_line), Some(&right_line)),
            collate_line(Some(&modern), Some(&left_line), Some(&right_line))
        );
    }

    /// Collating a witness against itself yields only verbatim nodes when
    /// the third witness agrees too.
    #[test]
    fn identical_witnesses_never_diverge(base in word_seq()) {
        let modern = Line::tagged(
            base.iter().map(|w| TaggedUnit::word(w, w, "NOUN")).collect(),
        );
        let text = base.join(" ");
        let left_line = Line::plain(&text);
        let right_line = Line::plain(&text);
        let line = collate_line(Some(&modern), Some(&left_line), Some(&right_line));
        prop_assert_eq!(line.apparatus_count(), 0);
        prop_assert_eq!(line.verbatim_count(), base.len());
    }
}
