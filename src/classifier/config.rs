//! Word lists driving the name-token classifier.
//!
//! This module defines the default generational suffixes, nobiliary
//! particles and two-letter exceptions, and the configuration structure that
//! lets callers extend or replace them.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Generational suffixes removed from both name fields (compared case-insensitively).
pub(crate) const DEFAULT_GENERATIONAL_SUFFIXES: &[&str] = &[
    "jr", "jr.", "jun.", "junior", "júnior", "sr", "sr.", "sen.", "senior", "iii", "iv",
];

/// Nobiliary and prepositional particles that end the given-name part of a field.
pub(crate) const DEFAULT_NOBILIARY_PARTICLES: &[&str] = &[
    "aan", "af", "auf", "da", "dai", "dal", "dalla", "das", "de la", "de", "degli", "dei", "del",
    "della", "dem", "den", "der", "des", "di", "dos", "du", "het", "van", "vom", "von", "zu",
    "zur",
];

/// Two-letter tokens kept even though they fail the capital-plus-vowel shape.
pub(crate) const DEFAULT_TWO_LETTER_EXCEPTIONS: &[&str] = &["Ng"];

/// Configuration of the classifier's word lists.
///
/// Suffixes and particles are stored lowercased and trimmed, and matched
/// case-insensitively. Two-letter exceptions are matched exactly.
///
/// # Examples
///
/// ```
/// use pumedoro::ClassifierConfig;
///
/// let mut config = ClassifierConfig::new();
/// config.add_suffixes(vec!["II".to_string()]);
/// config.add_particles(vec!["ter".to_string()]);
/// assert!(config.is_suffix("ii"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub(crate) suffixes: Vec<String>,
    pub(crate) particles: Vec<String>,
    pub(crate) two_letter_exceptions: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierConfig {
    /// Creates a configuration holding the default word lists
    #[must_use]
    pub fn new() -> Self {
        Self {
            suffixes: normalize_all(DEFAULT_GENERATIONAL_SUFFIXES.iter().copied()),
            particles: normalize_all(DEFAULT_NOBILIARY_PARTICLES.iter().copied()),
            two_letter_exceptions: DEFAULT_TWO_LETTER_EXCEPTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replaces the generational-suffix list
    pub fn set_suffixes(&mut self, suffixes: Vec<String>) -> &mut Self {
        self.suffixes = normalize_all(suffixes.iter().map(String::as_str));
        self
    }

    /// Adds generational suffixes to the current list
    pub fn add_suffixes(&mut self, suffixes: Vec<String>) -> &mut Self {
        self.suffixes
            .extend(normalize_all(suffixes.iter().map(String::as_str)));
        self
    }

    /// Replaces the nobiliary-particle list
    pub fn set_particles(&mut self, particles: Vec<String>) -> &mut Self {
        self.particles = normalize_all(particles.iter().map(String::as_str));
        self
    }

    /// Adds nobiliary particles to the current list
    pub fn add_particles(&mut self, particles: Vec<String>) -> &mut Self {
        self.particles
            .extend(normalize_all(particles.iter().map(String::as_str)));
        self
    }

    /// Adds two-letter tokens that are always accepted as given names
    pub fn add_two_letter_exceptions(&mut self, exceptions: Vec<String>) -> &mut Self {
        self.two_letter_exceptions
            .extend(exceptions.into_iter().map(|s| s.trim().to_string()));
        self
    }

    /// The generational suffixes, lowercased
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// The nobiliary particles, lowercased
    pub fn particles(&self) -> &[String] {
        &self.particles
    }

    /// The two-letter exceptions
    pub fn two_letter_exceptions(&self) -> &[String] {
        &self.two_letter_exceptions
    }

    /// Whether `token` is a generational suffix, ignoring case
    pub fn is_suffix(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.suffixes.iter().any(|s| *s == lower)
    }

    /// Whether `token` is a single-word nobiliary particle, ignoring case
    pub fn is_particle(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.particles.iter().any(|p| *p == lower)
    }

    /// Checks that no list holds an empty entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEntry`] naming the first offending list and position.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_no_empty("suffix", &self.suffixes)?;
        check_no_empty("particle", &self.particles)?;
        check_no_empty("two-letter exception", &self.two_letter_exceptions)?;
        Ok(())
    }
}

fn normalize_all<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<String> {
    entries.map(|s| s.trim().to_lowercase()).collect()
}

fn check_no_empty(list: &'static str, entries: &[String]) -> Result<(), ConfigError> {
    match entries.iter().position(|e| e.is_empty()) {
        Some(index) => Err(ConfigError::EmptyEntry { list, index }),
        None => Ok(()),
    }
}
