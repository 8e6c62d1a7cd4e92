use crate::phonetic::PhoneticCodes;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// One row of the name-frequency dictionary.
///
/// Field order is the exported row shape:
/// `name, occ_given, occ_family, soundex, metaphone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// The normalized (title-cased) name
    pub name: String,
    /// Number of sightings as a given name
    pub occ_given: u64,
    /// Number of sightings as a family name
    pub occ_family: u64,
    /// Soundex code of the name, empty if it could not be computed
    pub soundex: String,
    /// Primary double-metaphone code of the name, empty if it could not be computed
    pub metaphone: String,
}

impl NameRecord {
    pub(crate) fn new(name: String, codes: PhoneticCodes) -> Self {
        Self {
            name,
            occ_given: 0,
            occ_family: 0,
            soundex: codes.soundex,
            metaphone: codes.metaphone,
        }
    }

    /// Total number of sightings in either role.
    pub fn total(&self) -> u64 {
        self.occ_given + self.occ_family
    }

    /// Share of sightings as a given name and as a family name.
    ///
    /// ```
    /// use pumedoro::{NameFrequencyDictionary, RawNamePair};
    ///
    /// let mut dictionary = NameFrequencyDictionary::new();
    /// dictionary.ingest(&RawNamePair::new("Martin", "Martin"));
    /// dictionary.ingest(&RawNamePair::new("Anna", "Martin"));
    /// let martin = dictionary.get("Martin").unwrap();
    /// assert_eq!(martin.frequencies().0, 1.0 / 3.0);
    /// ```
    pub fn frequencies(&self) -> (f64, f64) {
        let total = self.total();
        if total == 0 {
            return (0.0, 0.0);
        }
        let total = total as f64;
        (self.occ_given as f64 / total, self.occ_family as f64 / total)
    }
}

/// Row order of [`NameFrequencyDictionary::as_table`](crate::NameFrequencyDictionary::as_table).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Insertion order
    #[default]
    None,
    /// Ascending by name
    Name,
    /// Descending by given-name sightings
    GivenFrequency,
    /// Descending by family-name sightings
    FamilyFrequency,
}

/// Counters describing what an ingestion did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Records seen
    pub records: usize,
    /// Records with no name text in either field
    pub empty_records: usize,
    /// Given-name tokens counted
    pub given_names: usize,
    /// Family names counted
    pub family_names: usize,
    /// Phonetic codes that could not be computed and were stored empty
    pub phonetic_failures: usize,
}

impl AddAssign for IngestStats {
    fn add_assign(&mut self, other: Self) {
        self.records += other.records;
        self.empty_records += other.empty_records;
        self.given_names += other.given_names;
        self.family_names += other.family_names;
        self.phonetic_failures += other.phonetic_failures;
    }
}
