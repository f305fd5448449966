//! File processing API for collation runs
//!
//! Thin glue between the pure collation core and the filesystem: loads the
//! three witness documents from JSON, runs the canto collator, and formats
//! the result. The core never touches files; handles are scoped to the load
//! functions and released when they return.

use crate::collate::{collate_canto, CollationError};
use crate::collated::{CollatedDocument, LineNode, ReadingToken};
use crate::document::Document;
use crate::token::TokenKind;
use std::fmt;
use std::fs;
use std::path::Path;

/// Output format of a collation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The full collated document as pretty-printed JSON.
    Json,
    /// The simplified linear reading view (base text only).
    Text,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Result<Self, ProcessingError> {
        match format {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }
}

/// Errors that can occur while processing files.
#[derive(Debug)]
pub enum ProcessingError {
    Io { path: String, message: String },
    Parse { path: String, message: String },
    InvalidFormat(String),
    Collation(CollationError),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::Io { path, message } => {
                write!(f, "failed to read {}: {}", path, message)
            }
            ProcessingError::Parse { path, message } => {
                write!(f, "failed to parse {}: {}", path, message)
            }
            ProcessingError::InvalidFormat(format) => write!(f, "invalid format: {}", format),
            ProcessingError::Collation(err) => write!(f, "collation failed: {}", err),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<CollationError> for ProcessingError {
    fn from(err: CollationError) -> Self {
        ProcessingError::Collation(err)
    }
}

/// Load one witness document from a JSON file.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document, ProcessingError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ProcessingError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| ProcessingError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load one collated document from a JSON file.
pub fn load_collated<P: AsRef<Path>>(path: P) -> Result<CollatedDocument, ProcessingError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ProcessingError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| ProcessingError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Collate one canto of three witness files and format the result.
pub fn collate_files<P: AsRef<Path>>(
    modern_path: P,
    left_path: P,
    right_path: P,
    canto: u32,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    let modern = load_document(modern_path)?;
    let left = load_document(left_path)?;
    let right = load_document(right_path)?;

    let collated = collate_canto(&modern, &left, &right, canto)?;
    format_collated(&collated, format)
}

/// Format a collated document according to the output format.
pub fn format_collated(
    document: &CollatedDocument,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(document).map_err(|e| ProcessingError::Parse {
                path: "<collated document>".to_string(),
                message: e.to_string(),
            })
        }
        OutputFormat::Text => Ok(render_text(document)),
    }
}

/// Render the linear reading view: verbatim tokens plus the base reading of
/// every apparatus node, one line of text per collated line. Punctuation
/// attaches to the preceding word without a space.
pub fn render_text(document: &CollatedDocument) -> String {
    let mut out = String::new();
    out.push_str(&document.title);
    out.push('\n');

    for canto in &document.cantos {
        if let Some(heading) = &canto.heading {
            out.push('\n');
            out.push_str(heading);
            out.push('\n');
        }
        for stanza in &canto.stanzas {
            out.push('\n');
            if let Some(number) = &stanza.number {
                out.push_str(number);
                out.push('\n');
            }
            for line in &stanza.lines {
                out.push_str(&render_line_text(&line.nodes));
                out.push('\n');
            }
        }
    }

    out
}

fn render_line_text(nodes: &[LineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            LineNode::Verbatim(token) => push_token(&mut out, token),
            LineNode::Apparatus(app) => {
                // Readings are ordered base-first; an empty base reading
                // (insertion point) contributes nothing to the linear view.
                if let Some(reading) = app.readings.first() {
                    for token in &reading.tokens {
                        push_token(&mut out, token);
                    }
                }
            }
        }
    }
    out
}

fn push_token(out: &mut String, token: &ReadingToken) {
    if !out.is_empty() && token.kind != TokenKind::Punctuation {
        out.push(' ');
    }
    out.push_str(&token.text);
}
