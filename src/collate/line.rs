//! The line collator
//!
//! Merges three parallel witness lines into one collated line. The modern
//! line is the base: both historical lines are aligned against it, runs of
//! agreement become verbatim tokens, and every point of divergence becomes
//! an apparatus node grouping witnesses by identical reading.

use crate::align::{align, InsertionBlock};
use crate::collated::{AppNode, CollatedLine, LineNode, Reading, ReadingToken};
use crate::document::Line;
use crate::token::{Token, TokenKind};
use crate::tokenizer;
use crate::witness::Witness;

/// Collate one positional line slot. Absent lines are empty sequences; the
/// result is a pure function of the three inputs.
pub fn collate_line(
    modern: Option<&Line>,
    left: Option<&Line>,
    right: Option<&Line>,
) -> CollatedLine {
    let base = tokenizer::tokenize_modern(modern);
    let left_tokens = tokenizer::tokenize_legacy(Witness::Left, left);
    let right_tokens = tokenizer::tokenize_legacy(Witness::Right, right);

    let left_alignment = align(&base, &left_tokens);
    let right_alignment = align(&base, &right_tokens);

    let mut insertions: Vec<(Witness, InsertionBlock)> = Vec::new();
    insertions.extend(
        left_alignment
            .insertions
            .iter()
            .map(|block| (Witness::Left, block.clone())),
    );
    insertions.extend(
        right_alignment
            .insertions
            .iter()
            .map(|block| (Witness::Right, block.clone())),
    );
    // Stable ascending sort keeps the left witness first at shared anchors.
    insertions.sort_by_key(|(_, block)| block.anchor);

    let mut nodes = Vec::new();
    let mut insert_ptr = 0;

    for base_idx in 0..=base.len() {
        let mut anchored: Vec<&(Witness, InsertionBlock)> = Vec::new();
        while insert_ptr < insertions.len() && insertions[insert_ptr].1.anchor == base_idx {
            anchored.push(&insertions[insert_ptr]);
            insert_ptr += 1;
        }
        if !anchored.is_empty() {
            nodes.push(LineNode::Apparatus(insertion_app(&anchored)));
        }

        if base_idx < base.len() {
            let base_token = &base[base_idx];
            let left_slot = left_alignment.slots[base_idx].as_ref();
            let right_slot = right_alignment.slots[base_idx].as_ref();
            nodes.push(position_node(base_token, left_slot, right_slot));
        }
    }

    CollatedLine::new(nodes)
}

/// Apparatus node for insertion blocks sharing one anchor. The base witness
/// contributes an explicit empty reading, joined by any witness with no
/// insertion at this anchor.
fn insertion_app(anchored: &[&(Witness, InsertionBlock)]) -> AppNode {
    let mut groups: ReadingGroups = Vec::new();
    for (witness, block) in anchored {
        let tokens: Vec<ReadingToken> = block.tokens.iter().map(reading_token).collect();
        push_group(&mut groups, tokens, *witness);
    }

    let mut empty_witnesses = vec![Witness::Modern];
    for witness in [Witness::Left, Witness::Right] {
        if !anchored.iter().any(|(w, _)| *w == witness) {
            empty_witnesses.push(witness);
        }
    }
    for witness in empty_witnesses {
        push_group(&mut groups, Vec::new(), witness);
    }

    finish_app(groups)
}

/// Node for one base position: a verbatim token when all three witnesses
/// agree on surface text and kind, an apparatus node otherwise.
fn position_node(
    base_token: &Token,
    left_slot: Option<&Token>,
    right_slot: Option<&Token>,
) -> LineNode {
    if let (Some(left_token), Some(right_token)) = (left_slot, right_slot) {
        let texts_agree =
            base_token.surface == left_token.surface && base_token.surface == right_token.surface;
        let kinds_agree =
            base_token.kind == left_token.kind && base_token.kind == right_token.kind;
        if texts_agree && kinds_agree {
            return LineNode::Verbatim(reading_token(base_token));
        }
    }

    let mut groups: ReadingGroups = Vec::new();
    push_group(&mut groups, vec![reading_token(base_token)], Witness::Modern);
    for (witness, slot) in [(Witness::Left, left_slot), (Witness::Right, right_slot)] {
        let key = match slot {
            Some(token) => vec![aligned_reading_token(base_token, token)],
            None => Vec::new(),
        };
        push_group(&mut groups, key, witness);
    }

    LineNode::Apparatus(finish_app(groups))
}

fn reading_token(token: &Token) -> ReadingToken {
    ReadingToken::new(&token.surface, token.kind, token.attrs.clone())
}

/// Reading token for a legacy token aligned to a base position. A word
/// adopts the base token's attributes (its own are empty, and adopting lets
/// identical readings merge with the base); punctuation never borrows.
fn aligned_reading_token(base_token: &Token, token: &Token) -> ReadingToken {
    let attrs = if token.kind == TokenKind::Word {
        base_token.attrs.clone()
    } else {
        token.attrs.clone()
    };
    ReadingToken::new(&token.surface, token.kind, attrs)
}

/// Ordered accumulator from reading content to contributing witnesses.
/// Built in one pass; converted to a sorted reading list at the end.
type ReadingGroups = Vec<(Vec<ReadingToken>, Vec<Witness>)>;

fn push_group(groups: &mut ReadingGroups, key: Vec<ReadingToken>, witness: Witness) {
    for (existing, witnesses) in groups.iter_mut() {
        if *existing == key {
            witnesses.push(witness);
            return;
        }
    }
    groups.push((key, vec![witness]));
}

fn finish_app(groups: ReadingGroups) -> AppNode {
    let mut readings: Vec<Reading> = groups
        .into_iter()
        .map(|(tokens, witnesses)| {
            let mut sigla: Vec<String> =
                witnesses.iter().map(|w| w.siglum().to_string()).collect();
            sigla.sort();
            Reading {
                witnesses: sigla,
                tokens,
            }
        })
        .collect();

    // Base-witness reading first, then by text, empty readings last.
    readings.sort_by(|a, b| {
        reading_rank(a)
            .cmp(&reading_rank(b))
            .then_with(|| a.text().cmp(&b.text()))
    });

    AppNode { readings }
}

fn reading_rank(reading: &Reading) -> u8 {
    if reading.names_witness(Witness::Modern) {
        0
    } else if !reading.is_empty() {
        1
    } else {
        2
    }
}
