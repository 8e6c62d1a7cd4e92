//! Error types for name classification, ingestion and export.
//!
//! Nothing in the classifier or in per-record ingestion is fatal: malformed
//! name fields degrade to empty output and phonetic failures degrade to empty
//! codes. The errors below are raised only at the edges of the crate, when
//! reading feeds, writing tables, or building a misconfigured classifier.

use std::path::PathBuf;
use thiserror::Error;

/// Input feed formats understood by the [`feed`](crate::feed) readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    /// Author XML (training-data files or PubMed efetch responses).
    Xml,
    /// MEDLINE / `.nbib` text.
    Medline,
}

impl FeedFormat {
    /// Convert the format to a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedFormat::Xml => "XML",
            FeedFormat::Medline => "MEDLINE",
        }
    }
}

impl std::fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error type for corpus operations.
#[derive(Error, Debug)]
pub enum NameDictError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Feed error with optional line information.
#[derive(Error, Debug)]
#[error("Error in {format} feed{}: {message}",
    match line {
        Some(l) => format!(" at line {}", l),
        None => String::new(),
    }
)]
pub struct FeedError {
    /// Line number where the error occurred (1-based, None if not available)
    pub line: Option<usize>,
    /// The feed format being read
    pub format: FeedFormat,
    /// What went wrong
    pub message: String,
}

impl FeedError {
    /// Create a FeedError with line information.
    pub fn at_line(line: usize, format: FeedFormat, message: impl Into<String>) -> Self {
        Self {
            line: Some(line),
            format,
            message: message.into(),
        }
    }

    /// Create a FeedError without position information.
    pub fn without_position(format: FeedFormat, message: impl Into<String>) -> Self {
        Self {
            line: None,
            format,
            message: message.into(),
        }
    }
}

#[cfg(feature = "xml")]
impl From<quick_xml::Error> for FeedError {
    fn from(err: quick_xml::Error) -> Self {
        FeedError::without_position(FeedFormat::Xml, err.to_string())
    }
}

/// Errors raised while writing a name table.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{format} export failed: {message}")]
    Serialize {
        format: &'static str,
        message: String,
    },

    #[error("Export write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export format {0} is not enabled in this build")]
    Unsupported(&'static str),
}

// Conversion implementations for external error types

#[cfg(feature = "csv")]
impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Serialize {
            format: "CSV",
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialize {
            format: "JSON",
            message: err.to_string(),
        }
    }
}

/// Misconfiguration of the classifier's word lists.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Empty entry at position {index} of the {list} list")]
    EmptyEntry { list: &'static str, index: usize },
}

/// A phonetic code could not be computed for a name.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhoneticError {
    #[error("{algorithm} cannot encode \"{name}\"")]
    Unencodable { algorithm: &'static str, name: String },
}
