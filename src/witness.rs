//! Witness identity
//!
//! A collation run merges exactly three witnesses: the modernized/lemmatized
//! edition (the base of every alignment) and two historical transcriptions.
//! Each witness has a fixed siglum used in apparatus readings and document
//! metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three source versions of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Witness {
    /// The modernized, tagged edition. Base witness of every alignment.
    Modern,
    /// The left historical transcription.
    Left,
    /// The right historical transcription.
    Right,
}

impl Witness {
    /// All witnesses, in base-first order.
    pub const ALL: [Witness; 3] = [Witness::Modern, Witness::Left, Witness::Right];

    /// The witness siglum used in readings and metadata.
    pub fn siglum(&self) -> &'static str {
        match self {
            Witness::Modern => "VMod",
            Witness::Left => "VEsq",
            Witness::Right => "VDir",
        }
    }

    /// Human-readable label for document metadata.
    pub fn label(&self) -> &'static str {
        match self {
            Witness::Modern => "Modernized edition (VMod)",
            Witness::Left => "Left transcription (VEsq)",
            Witness::Right => "Right transcription (VDir)",
        }
    }

    pub fn is_base(&self) -> bool {
        matches!(self, Witness::Modern)
    }
}

impl fmt::Display for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.siglum())
    }
}
