//! Edit-script alignment of a witness line against the base line
//!
//! Implements the classic longest-matching-blocks diff over comparable
//! forms: find the longest common contiguous run, recurse on the unmatched
//! flanks, then read the block list back as opcodes. Tie-breaks always pick
//! the earliest base position, then the earliest target position, so the
//! edit script is a deterministic function of the two input sequences.
//!
//! From the opcodes the aligner derives the position-indexed mapping of
//! target tokens onto base positions and the target-only insertion blocks.
//! Base-only runs (the "delete" case) leave their base slots absent and
//! produce no insertion.

use crate::token::Token;
use std::collections::HashMap;

/// Kind of one edit-script opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    /// A contiguous run matches 1:1.
    Equal,
    /// A base run and a target run of possibly different lengths correspond.
    Replace,
    /// A base-only run with no target counterpart.
    Delete,
    /// A target-only run with no base counterpart.
    Insert,
}

/// One opcode over half-open index ranges into the base and target
/// sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub base_start: usize,
    pub base_end: usize,
    pub target_start: usize,
    pub target_end: usize,
}

/// A maximal common contiguous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    base: usize,
    target: usize,
    len: usize,
}

/// A run of target tokens with no base counterpart, anchored immediately
/// before base position `anchor` (`anchor == base_len` means line end).
#[derive(Debug, Clone, PartialEq)]
pub struct InsertionBlock {
    pub anchor: usize,
    pub tokens: Vec<Token>,
}

/// The result of aligning one target sequence against the base.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    /// Slot `i` holds the target token aligned to base position `i`, or
    /// `None` when the base token has no counterpart.
    pub slots: Vec<Option<Token>>,
    /// Target-only runs, in ascending anchor order.
    pub insertions: Vec<InsertionBlock>,
}

/// Align `target` against `base` using the tokens' comparable forms.
pub fn align(base: &[Token], target: &[Token]) -> Alignment {
    let base_forms: Vec<&str> = base.iter().map(|t| t.comparable.as_str()).collect();
    let target_forms: Vec<&str> = target.iter().map(|t| t.comparable.as_str()).collect();
    let ops = opcodes(&base_forms, &target_forms);

    let mut slots: Vec<Option<Token>> = vec![None; base.len()];
    let mut insertions = Vec::new();

    for op in ops {
        match op.tag {
            OpTag::Equal => {
                for k in 0..(op.base_end - op.base_start) {
                    slots[op.base_start + k] = Some(target[op.target_start + k].clone());
                }
            }
            OpTag::Replace => {
                let base_len = op.base_end - op.base_start;
                let target_len = op.target_end - op.target_start;
                let paired = base_len.min(target_len);
                for k in 0..paired {
                    slots[op.base_start + k] = Some(target[op.target_start + k].clone());
                }
                if target_len > base_len {
                    insertions.push(InsertionBlock {
                        anchor: op.base_end,
                        tokens: target[op.target_start + paired..op.target_end].to_vec(),
                    });
                }
            }
            OpTag::Insert => {
                insertions.push(InsertionBlock {
                    anchor: op.base_start,
                    tokens: target[op.target_start..op.target_end].to_vec(),
                });
            }
            OpTag::Delete => {}
        }
    }

    Alignment { slots, insertions }
}

/// Compute the full edit script between two comparable-form sequences.
pub fn opcodes(base: &[&str], target: &[&str]) -> Vec<Opcode> {
    let blocks = matching_blocks(base, target);
    let mut ops = Vec::new();
    let (mut i, mut j) = (0, 0);

    for block in blocks {
        let tag = if i < block.base && j < block.target {
            Some(OpTag::Replace)
        } else if i < block.base {
            Some(OpTag::Delete)
        } else if j < block.target {
            Some(OpTag::Insert)
        } else {
            None
        };
        if let Some(tag) = tag {
            ops.push(Opcode {
                tag,
                base_start: i,
                base_end: block.base,
                target_start: j,
                target_end: block.target,
            });
        }
        i = block.base + block.len;
        j = block.target + block.len;
        if block.len > 0 {
            ops.push(Opcode {
                tag: OpTag::Equal,
                base_start: block.base,
                base_end: i,
                target_start: block.target,
                target_end: j,
            });
        }
    }

    ops
}

/// Maximal matching runs in ascending order, adjacent runs merged, plus a
/// zero-length terminal block.
fn matching_blocks(base: &[&str], target: &[&str]) -> Vec<Block> {
    // Index of each target form's positions, ascending.
    let mut target_index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (j, form) in target.iter().enumerate() {
        target_index.entry(*form).or_default().push(j);
    }

    let mut queue = vec![(0, base.len(), 0, target.len())];
    let mut found = Vec::new();

    while let Some((base_lo, base_hi, target_lo, target_hi)) = queue.pop() {
        let block = longest_match(base, &target_index, base_lo, base_hi, target_lo, target_hi);
        if block.len == 0 {
            continue;
        }
        if base_lo < block.base && target_lo < block.target {
            queue.push((base_lo, block.base, target_lo, block.target));
        }
        if block.base + block.len < base_hi && block.target + block.len < target_hi {
            queue.push((block.base + block.len, base_hi, block.target + block.len, target_hi));
        }
        found.push(block);
    }

    found.sort_by_key(|b| (b.base, b.target));

    let mut blocks: Vec<Block> = Vec::new();
    for block in found {
        if let Some(last) = blocks.last_mut() {
            if last.base + last.len == block.base && last.target + last.len == block.target {
                last.len += block.len;
                continue;
            }
        }
        blocks.push(block);
    }
    blocks.push(Block {
        base: base.len(),
        target: target.len(),
        len: 0,
    });

    blocks
}

/// The longest run matching within the given windows; ties resolve to the
/// earliest base position, then the earliest target position.
fn longest_match(
    base: &[&str],
    target_index: &HashMap<&str, Vec<usize>>,
    base_lo: usize,
    base_hi: usize,
    target_lo: usize,
    target_hi: usize,
) -> Block {
    let mut best = Block {
        base: base_lo,
        target: target_lo,
        len: 0,
    };
    // Length of the run ending at each target position on the previous row.
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();

    for i in base_lo..base_hi {
        let mut next_run_lengths = HashMap::new();
        if let Some(positions) = target_index.get(base[i]) {
            for &j in positions {
                if j < target_lo {
                    continue;
                }
                if j >= target_hi {
                    break;
                }
                let len = if j == 0 {
                    1
                } else {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_run_lengths.insert(j, len);
                if len > best.len {
                    best = Block {
                        base: i + 1 - len,
                        target: j + 1 - len,
                        len,
                    };
                }
            }
        }
        run_lengths = next_run_lengths;
    }

    best
}
