//! Accumulating dictionary of name tokens and their roles.
//!
//! A [`NameFrequencyDictionary`] consumes [`RawNamePair`] records, runs the
//! [`NameClassifier`] on them, and counts how often each normalized name was
//! seen as a given name and as a family name. Entries are keyed by the
//! title-cased name and keep their insertion order. Phonetic codes are
//! computed once, when a name is first inserted.
//!
//! The dictionary is owned by the caller; nothing is shared between
//! instances. Parallel ingestion is done by sharding the corpus over several
//! dictionaries and combining them with [`NameFrequencyDictionary::merge`].
//!
//! # Example
//!
//! ```
//! use pumedoro::{NameFrequencyDictionary, RawNamePair, SortBy};
//!
//! let mut dictionary = NameFrequencyDictionary::new();
//! let stats = dictionary.ingest_all(vec![
//!     RawNamePair::new("Jean-Pierre", "Martin"),
//!     RawNamePair::new("Martin", "Dupont"),
//! ]);
//! assert_eq!(stats.records, 2);
//!
//! let martin = dictionary.get("martin").unwrap();
//! assert_eq!((martin.occ_given, martin.occ_family), (1, 1));
//!
//! let names: Vec<_> = dictionary
//!     .as_table(SortBy::Name)
//!     .into_iter()
//!     .map(|row| row.name)
//!     .collect();
//! assert_eq!(names, ["Dupont", "Jean-Pierre", "Martin"]);
//! ```

mod structure;

pub use structure::{IngestStats, NameRecord, SortBy};

use crate::classifier::NameClassifier;
use crate::phonetic::{PhoneticEncoder, RPhoneticEncoder, encode_lossy};
use crate::utils::title_case;
use crate::{RawNamePair, TokenRole};
use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

/// Name-frequency dictionary over one corpus.
pub struct NameFrequencyDictionary<E = RPhoneticEncoder> {
    records: IndexMap<String, NameRecord>,
    classifier: NameClassifier,
    encoder: E,
}

impl Default for NameFrequencyDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl NameFrequencyDictionary {
    /// Creates an empty dictionary with the default classifier and `rphonetic` codes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_encoder(RPhoneticEncoder::new())
    }
}

impl<E> std::fmt::Debug for NameFrequencyDictionary<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameFrequencyDictionary")
            .field("records", &self.records)
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

impl<E: PhoneticEncoder> NameFrequencyDictionary<E> {
    /// Creates an empty dictionary computing phonetic codes with `encoder`.
    #[must_use]
    pub fn with_encoder(encoder: E) -> Self {
        Self {
            records: IndexMap::new(),
            classifier: NameClassifier::new(),
            encoder,
        }
    }

    /// Replaces the classifier used for subsequent ingestion.
    #[must_use]
    pub fn with_classifier(mut self, classifier: NameClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Gets a reference to the classifier
    pub fn classifier(&self) -> &NameClassifier {
        &self.classifier
    }

    /// Classifies one record and counts its tokens.
    ///
    /// Every given-name candidate increments `occ_given` of its entry and the
    /// family name, if any, increments `occ_family`. Never fails: a record
    /// without usable text counts nothing, and names that cannot be
    /// phonetically encoded are stored with empty codes.
    pub fn ingest(&mut self, record: &RawNamePair) -> IngestStats {
        let mut stats = IngestStats {
            records: 1,
            ..Default::default()
        };
        if record.is_blank() {
            debug!("Skipping author entry without name text");
            stats.empty_records = 1;
            return stats;
        }

        for token in self.classifier.classify(record) {
            self.count(&token.text, token.role, &mut stats);
        }
        stats
    }

    /// Ingests every record of a feed, in order.
    pub fn ingest_all<I>(&mut self, records: I) -> IngestStats
    where
        I: IntoIterator<Item = RawNamePair>,
    {
        let mut stats = IngestStats::default();
        for record in records {
            stats += self.ingest(&record);
        }
        stats
    }

    fn count(&mut self, text: &str, role: TokenRole, stats: &mut IngestStats) {
        let encoder = &self.encoder;
        let record = self
            .records
            .entry(title_case(text))
            .or_insert_with_key(|name| {
                let (codes, failures) = encode_lossy(encoder, name);
                stats.phonetic_failures += failures;
                NameRecord::new(name.clone(), codes)
            });
        match role {
            TokenRole::GivenNameCandidate => {
                record.occ_given += 1;
                stats.given_names += 1;
            }
            TokenRole::FamilyName => {
                record.occ_family += 1;
                stats.family_names += 1;
            }
        }
    }

    /// Removes every entry. Used between independent corpora.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Adds the counts of `other` into this dictionary.
    ///
    /// Counts are summed per name. Names new to this dictionary are appended
    /// in `other`'s order with `other`'s phonetic codes; existing entries keep
    /// their own codes.
    pub fn merge<F>(&mut self, other: NameFrequencyDictionary<F>) {
        for (name, incoming) in other.records {
            match self.records.entry(name) {
                Entry::Occupied(mut entry) => {
                    let record = entry.get_mut();
                    record.occ_given += incoming.occ_given;
                    record.occ_family += incoming.occ_family;
                }
                Entry::Vacant(entry) => {
                    entry.insert(incoming);
                }
            }
        }
    }

    /// Snapshot of all entries as table rows.
    ///
    /// Sorting by frequency is descending, sorting by name ascending; ties
    /// keep insertion order.
    pub fn as_table(&self, sort_by: SortBy) -> Vec<NameRecord> {
        let mut rows: Vec<NameRecord> = self.records.values().cloned().collect();
        match sort_by {
            SortBy::None => {}
            SortBy::Name => rows.sort_by(|a, b| a.name.cmp(&b.name)),
            SortBy::GivenFrequency => rows.sort_by(|a, b| b.occ_given.cmp(&a.occ_given)),
            SortBy::FamilyFrequency => rows.sort_by(|a, b| b.occ_family.cmp(&a.occ_family)),
        }
        rows
    }

    /// Looks up a name, normalizing it the same way keys are normalized.
    pub fn get(&self, name: &str) -> Option<&NameRecord> {
        self.records.get(&title_case(name))
    }

    /// Share of sightings of `name` as a given name and as a family name.
    pub fn frequencies(&self, name: &str) -> Option<(f64, f64)> {
        self.get(name).map(NameRecord::frequencies)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dictionary holds no names.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &NameRecord> {
        self.records.values()
    }

    /// Writes the table in `format` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`](crate::ExportError) if serialization or writing fails.
    #[cfg(any(feature = "csv", feature = "json"))]
    pub fn serialize<W: std::io::Write>(
        &self,
        format: crate::export::ExportFormat,
        sort_by: SortBy,
        writer: W,
    ) -> Result<(), crate::error::ExportError> {
        crate::export::write_table(&self.as_table(sort_by), format, writer)
    }
}

impl<E: PhoneticEncoder> Extend<RawNamePair> for NameFrequencyDictionary<E> {
    fn extend<I: IntoIterator<Item = RawNamePair>>(&mut self, iter: I) {
        self.ingest_all(iter);
    }
}
