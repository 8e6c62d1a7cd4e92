//! Rule-based classification of raw author-name fields.
//!
//! Bibliographic metadata splits an author's name into a "given name" field
//! and a "family name" field, but does so inconsistently across naming
//! traditions. The classifier decides which tokens of the given-name field
//! are usable given names, and cleans the family-name field.
//!
//! # Given-name field
//!
//! Applied in order, each step working on what the previous one kept:
//!
//! 1. split on ASCII space
//! 2. drop generational suffixes (`Jr.`, `Senior`, `III`, ...)
//! 3. drop bare initials and empty pieces
//! 4. drop abbreviations (`A.`, `J.R.`, `A.-B.`)
//! 5. drop two-letter tokens unless they are `Ng`, a capital plus a
//!    lowercase vowel (`Yu`, `Bo`), or a nobiliary particle
//! 6. cut the sequence at the first nobiliary particle (`von`, `van`, `de la`, ...)
//!
//! # Family-name field
//!
//! Generational suffixes are dropped and the remaining tokens are rejoined
//! with single spaces. Particles stay: `von Hardenberg` is a family name.
//!
//! # Example
//!
//! ```
//! use pumedoro::NameClassifier;
//!
//! let classifier = NameClassifier::new();
//! assert_eq!(
//!     classifier.classify_given_name_field("John Meinhard Xavier P"),
//!     vec!["John", "Meinhard", "Xavier"]
//! );
//! assert_eq!(classifier.classify_family_name_field("Leite Júnior"), "Leite");
//! ```

mod config;
mod rules;

pub use config::ClassifierConfig;

use crate::error::ConfigError;
use crate::{ClassifiedToken, RawNamePair, TokenRole};
use rules::CompiledRules;
use std::sync::LazyLock;

static DEFAULT_CLASSIFIER: LazyLock<NameClassifier> = LazyLock::new(NameClassifier::new);

/// Classifies raw name fields into given-name candidates and a family name.
///
/// The classifier is stateless between calls and never fails on input:
/// empty or malformed fields produce no tokens.
#[derive(Debug, Clone)]
pub struct NameClassifier {
    config: ClassifierConfig,
    rules: CompiledRules,
}

impl Default for NameClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NameClassifier {
    /// Creates a classifier with the default word lists.
    #[must_use]
    pub fn new() -> Self {
        let config = ClassifierConfig::new();
        let rules = CompiledRules::new(&config);
        Self { config, rules }
    }

    /// Creates a classifier with custom word lists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a word list holds an empty entry.
    pub fn with_config(config: ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rules = CompiledRules::new(&config);
        Ok(Self { config, rules })
    }

    /// Gets a reference to the current configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Extracts the given-name candidates of a raw given-name field.
    pub fn classify_given_name_field(&self, raw: &str) -> Vec<String> {
        self.rules.given_name_tokens(raw)
    }

    /// Extracts the cleaned family name of a raw family-name field.
    ///
    /// Returns an empty string when nothing usable remains.
    pub fn classify_family_name_field(&self, raw: &str) -> String {
        self.rules.family_name(raw)
    }

    /// Classifies both fields of a record: given-name candidates first, in
    /// order, then the family name if one remains.
    pub fn classify(&self, record: &RawNamePair) -> Vec<ClassifiedToken> {
        let mut tokens: Vec<ClassifiedToken> = record
            .given_name_raw
            .as_deref()
            .map(|raw| self.classify_given_name_field(raw))
            .unwrap_or_default()
            .into_iter()
            .map(|text| ClassifiedToken::new(text, TokenRole::GivenNameCandidate))
            .collect();

        if let Some(raw) = record.family_name_raw.as_deref() {
            let family = self.classify_family_name_field(raw);
            if !family.is_empty() {
                tokens.push(ClassifiedToken::new(family, TokenRole::FamilyName));
            }
        }
        tokens
    }
}

/// Extracts given-name candidates using the default word lists.
///
/// ```
/// assert_eq!(pumedoro::classify_given_name_field("Maxi von"), vec!["Maxi"]);
/// ```
pub fn classify_given_name_field(raw: &str) -> Vec<String> {
    DEFAULT_CLASSIFIER.classify_given_name_field(raw)
}

/// Extracts the family name using the default word lists.
///
/// ```
/// assert_eq!(pumedoro::classify_family_name_field("von Hardenberg"), "von Hardenberg");
/// ```
pub fn classify_family_name_field(raw: &str) -> String {
    DEFAULT_CLASSIFIER.classify_family_name_field(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("     ")]
    fn test_blank_given_name_field(#[case] raw: &str) {
        assert!(classify_given_name_field(raw).is_empty());
    }

    #[rstest]
    #[case("John Meinhard Xavier P", &["John", "Meinhard", "Xavier"])]
    #[case("Maxi von", &["Maxi"])]
    #[case("Xu", &["Xu"])]
    #[case("Lv", &[])]
    #[case("Yu", &["Yu"])]
    #[case("Ng", &["Ng"])]
    #[case("Bo Anna", &["Bo", "Anna"])]
    #[case("Anne-Els van de", &["Anne-Els"])]
    #[case("Jean-Pierre", &["Jean-Pierre"])]
    #[case("James D", &["James"])]
    #[case("J. R. R.", &[])]
    #[case("J.R.R. Tolkien", &["Tolkien"])]
    #[case("A.-B. Martin", &["Martin"])]
    #[case("Robert Jr.", &["Robert"])]
    #[case("Robert JR", &["Robert"])]
    #[case("Paulo Júnior", &["Paulo"])]
    #[case("John III", &["John"])]
    #[case("Maria de Souza", &["Maria"])]
    #[case("Maria De Souza", &["Maria"])]
    #[case("Karl Theodor zu Guttenberg", &["Karl", "Theodor"])]
    #[case("Ludwig van Beethoven", &["Ludwig"])]
    #[case("von Otto", &[])]
    #[case("Marie  Claire", &["Marie", "Claire"])]
    #[case("Jun Li", &["Jun", "Li"])]
    fn test_classify_given_name_field(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(classify_given_name_field(raw), expected);
    }

    #[rstest]
    #[case("Leite Júnior", "Leite")]
    #[case("Langhi Júnior", "Langhi")]
    #[case("von Hardenberg", "von Hardenberg")]
    #[case("Pogge von Strandmann", "Pogge von Strandmann")]
    #[case("von dem Knesebeck", "von dem Knesebeck")]
    #[case("Del Grande", "Del Grande")]
    // hyphen-attached suffixes are not split off
    #[case("Leite-Júnior", "Leite-Júnior")]
    #[case("Smith Jr.", "Smith")]
    #[case("King  III", "King")]
    #[case("", "")]
    #[case("   ", "")]
    #[case("Jr.", "")]
    fn test_classify_family_name_field(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(classify_family_name_field(raw), expected);
    }

    #[test]
    fn test_classify_record() {
        let classifier = NameClassifier::new();
        let record = RawNamePair::new("Anne-Els van de", "Silva");
        assert_eq!(
            classifier.classify(&record),
            vec![
                ClassifiedToken::new("Anne-Els".to_string(), TokenRole::GivenNameCandidate),
                ClassifiedToken::new("Silva".to_string(), TokenRole::FamilyName),
            ]
        );
    }

    #[test]
    fn test_classify_record_with_missing_fields() {
        let classifier = NameClassifier::new();
        let record = RawNamePair {
            given_name_raw: None,
            family_name_raw: Some("Jr.".to_string()),
        };
        assert!(classifier.classify(&record).is_empty());

        let record = RawNamePair {
            given_name_raw: Some("Wei".to_string()),
            family_name_raw: None,
        };
        assert_eq!(
            classifier.classify(&record),
            vec![ClassifiedToken::new(
                "Wei".to_string(),
                TokenRole::GivenNameCandidate
            )]
        );
    }

    #[test]
    fn test_custom_config() {
        let mut config = ClassifierConfig::new();
        config
            .add_suffixes(vec!["II".to_string()])
            .add_two_letter_exceptions(vec!["Lv".to_string()]);
        let classifier = NameClassifier::with_config(config).unwrap();
        assert_eq!(
            classifier.classify_given_name_field("Lv Henry II"),
            vec!["Lv", "Henry"]
        );
        assert_eq!(classifier.classify_family_name_field("Ford II"), "Ford");
    }

    #[test]
    fn test_misconfigured_classifier_is_rejected() {
        let mut config = ClassifierConfig::new();
        config.add_suffixes(vec![String::new()]);
        let result = NameClassifier::with_config(config);
        assert!(matches!(
            result,
            Err(ConfigError::EmptyEntry { list: "suffix", .. })
        ));
    }
}
