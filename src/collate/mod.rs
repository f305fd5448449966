//! Three-way collation
//!
//! The line collator merges one base line and two witness lines into a
//! collated line; the canto collator walks three documents structurally and
//! assembles the output document around it.

pub mod canto;
pub mod error;
pub mod line;

pub use canto::collate_canto;
pub use error::CollationError;
pub use line::collate_line;
