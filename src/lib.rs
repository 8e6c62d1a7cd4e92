//! Author-name token classification and name-frequency dictionaries.
//!
//! `pumedoro` takes author names as they appear in bibliographic records
//! (a "given name" field and a "family name" field, filled in inconsistently
//! across naming traditions), decides which tokens are usable given names and
//! what the family name is, and counts how often each name appears in either
//! role across a corpus. Every dictionary entry carries soundex and metaphone
//! codes for fuzzy matching.
//!
//! # Features
//!
//! - `xml` - Read author XML feeds (training-data files and PubMed efetch responses) (enabled by default)
//! - `pubmed` - Read `FAU` author lines from MEDLINE `.nbib` text (enabled by default)
//! - `corpus` - Ingest XML files and folders into a dictionary (enabled by default)
//! - `csv` - Export name tables as CSV (enabled by default)
//! - `json` - Export name tables as JSON and JSON lines (enabled by default)
//! - `lite` - Use `regex-lite` instead of `regex` (disable default features)
//!
//! # Basic Usage
//!
//! ```rust
//! use pumedoro::{NameFrequencyDictionary, RawNamePair, SortBy};
//!
//! let mut dictionary = NameFrequencyDictionary::new();
//! dictionary.ingest(&RawNamePair::new("Anne-Els van de", "Silva"));
//! dictionary.ingest(&RawNamePair::new("Anne-Els", "Silva"));
//!
//! let anne = dictionary.get("Anne-Els").unwrap();
//! assert_eq!(anne.occ_given, 2);
//! assert_eq!(dictionary.get("Silva").unwrap().occ_family, 2);
//! assert!(dictionary.get("van").is_none());
//!
//! let table = dictionary.as_table(SortBy::GivenFrequency);
//! assert_eq!(table[0].name, "Anne-Els");
//! ```
//!
//! # Classification only
//!
//! ```rust
//! use pumedoro::{classify_family_name_field, classify_given_name_field};
//!
//! assert_eq!(classify_given_name_field("John Meinhard Xavier P"), vec!["John", "Meinhard", "Xavier"]);
//! assert_eq!(classify_family_name_field("Leite Júnior"), "Leite");
//! ```
//!
//! # Error Handling
//!
//! Classification and ingestion of single records never fail. Feed reading,
//! export and classifier construction return errors from the [`error`] module.

use serde::{Deserialize, Serialize};

pub mod classifier;
#[cfg(feature = "corpus")]
pub mod corpus;
pub mod dictionary;
pub mod error;
#[cfg(any(feature = "csv", feature = "json"))]
pub mod export;
#[cfg(any(feature = "xml", feature = "pubmed"))]
pub mod feed;
pub mod phonetic;

// Reexports
pub use classifier::{
    ClassifierConfig, NameClassifier, classify_family_name_field, classify_given_name_field,
};
#[cfg(feature = "corpus")]
pub use corpus::{CorpusSummary, FolderScan};
pub use dictionary::{IngestStats, NameFrequencyDictionary, NameRecord, SortBy};
pub use error::{ConfigError, ExportError, FeedError, FeedFormat, NameDictError, PhoneticError};
#[cfg(any(feature = "csv", feature = "json"))]
pub use export::ExportFormat;
pub use phonetic::{PhoneticCodes, PhoneticEncoder, RPhoneticEncoder};
pub use utils::title_case;

mod regex;
mod utils;

/// One author entry as delivered by a feed: the raw given-name and
/// family-name fields, either of which may be missing or malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNamePair {
    /// Raw text of the given-name field (`ForeName` / `GivenName`).
    pub given_name_raw: Option<String>,
    /// Raw text of the family-name field (`LastName` / `FamilyName`).
    pub family_name_raw: Option<String>,
}

impl RawNamePair {
    /// Create a pair with both fields present.
    pub fn new(given_name_raw: impl Into<String>, family_name_raw: impl Into<String>) -> Self {
        Self {
            given_name_raw: Some(given_name_raw.into()),
            family_name_raw: Some(family_name_raw.into()),
        }
    }

    /// Whether neither field holds any non-whitespace text.
    pub fn is_blank(&self) -> bool {
        let blank = |field: &Option<String>| field.as_deref().is_none_or(|s| s.trim().is_empty());
        blank(&self.given_name_raw) && blank(&self.family_name_raw)
    }
}

/// The role a classified token plays in a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenRole {
    GivenNameCandidate,
    FamilyName,
}

/// A token produced by the classifier, not yet case-normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedToken {
    pub text: String,
    pub role: TokenRole,
}

impl ClassifiedToken {
    /// Create a new classified token.
    pub fn new(text: String, role: TokenRole) -> Self {
        Self { text, role }
    }
}
