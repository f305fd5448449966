//! # apparatus
//!
//! A three-way collation engine: merges three parallel witnesses of a poem
//! (a modernized, lemmatized edition and two historical transcriptions)
//! into a single critical-apparatus document that records every point of
//! textual divergence as an explicit variant structure.
//!
//! The pipeline runs leaves-first:
//!
//! - [`tokenizer`] turns one witness line into tokens (tagged and plain
//!   variants share the output contract);
//! - [`align`] computes a deterministic edit-script alignment of a witness
//!   line against the base line;
//! - [`collate::line`] merges the three token sequences of one line into
//!   verbatim tokens and apparatus nodes;
//! - [`collate::canto`] walks the three documents structurally, pads
//!   missing units positionally, and assembles the output document.
//!
//! The core entry point is [`collate::collate_canto`], a pure function over
//! three in-memory [`document::Document`] trees. File I/O and output
//! formatting live in [`processor`].

pub mod align;
pub mod collate;
pub mod collated;
pub mod document;
pub mod processor;
pub mod token;
pub mod tokenizer;
pub mod witness;
