//! Phonetic codes attached to dictionary entries.
//!
//! The dictionary only needs something that maps a name to a soundex and a
//! metaphone code, and that may refuse a name it cannot encode. The
//! [`PhoneticEncoder`] trait is that seam; [`RPhoneticEncoder`] implements it
//! with the `rphonetic` crate.

use crate::error::PhoneticError;
use rphonetic::{DoubleMetaphone, Encoder, Soundex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The pair of phonetic codes stored with a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticCodes {
    pub soundex: String,
    pub metaphone: String,
}

/// Computes phonetic codes for a name.
pub trait PhoneticEncoder {
    /// Soundex code of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneticError`] if the name cannot be encoded.
    fn soundex(&self, name: &str) -> Result<String, PhoneticError>;

    /// Primary double-metaphone code of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneticError`] if the name cannot be encoded.
    fn metaphone(&self, name: &str) -> Result<String, PhoneticError>;
}

/// Encodes both codes, storing an empty string for each one that fails.
///
/// Returns the codes and the number of failed encodings.
pub(crate) fn encode_lossy<E: PhoneticEncoder + ?Sized>(
    encoder: &E,
    name: &str,
) -> (PhoneticCodes, usize) {
    let mut failures = 0;
    let mut or_empty = |result: Result<String, PhoneticError>| {
        result.unwrap_or_else(|err| {
            debug!("{err}; storing an empty code");
            failures += 1;
            String::new()
        })
    };
    let codes = PhoneticCodes {
        soundex: or_empty(encoder.soundex(name)),
        metaphone: or_empty(encoder.metaphone(name)),
    };
    (codes, failures)
}

/// [`PhoneticEncoder`] backed by `rphonetic`'s Soundex and Double Metaphone.
///
/// Both algorithms only map ASCII letters, so other characters are dropped
/// before encoding (`Müller` is encoded as `Mller`). A name with no ASCII
/// letter at all is refused.
pub struct RPhoneticEncoder {
    soundex: Soundex,
    metaphone: DoubleMetaphone,
}

impl Default for RPhoneticEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RPhoneticEncoder {
    /// Creates an encoder with US-English soundex and four-character metaphone codes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            soundex: Soundex::default(),
            metaphone: DoubleMetaphone::default(),
        }
    }
}

impl std::fmt::Debug for RPhoneticEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RPhoneticEncoder").finish_non_exhaustive()
    }
}

impl PhoneticEncoder for RPhoneticEncoder {
    fn soundex(&self, name: &str) -> Result<String, PhoneticError> {
        let letters: String = name.chars().filter(char::is_ascii_alphabetic).collect();
        non_empty("soundex", name, || self.soundex.encode(&letters))
    }

    fn metaphone(&self, name: &str) -> Result<String, PhoneticError> {
        let letters: String = name.chars().filter(char::is_ascii_alphabetic).collect();
        non_empty("metaphone", name, || self.metaphone.encode(&letters))
    }
}

fn non_empty(
    algorithm: &'static str,
    name: &str,
    encode: impl FnOnce() -> String,
) -> Result<String, PhoneticError> {
    let unencodable = || PhoneticError::Unencodable {
        algorithm,
        name: name.to_string(),
    };
    if !name.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(unencodable());
    }
    let code = encode();
    if code.is_empty() {
        Err(unencodable())
    } else {
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct HalfBroken;

    impl PhoneticEncoder for HalfBroken {
        fn soundex(&self, name: &str) -> Result<String, PhoneticError> {
            Ok(name.to_uppercase())
        }

        fn metaphone(&self, name: &str) -> Result<String, PhoneticError> {
            Err(PhoneticError::Unencodable {
                algorithm: "metaphone",
                name: name.to_string(),
            })
        }
    }

    #[test]
    fn test_encode_lossy_keeps_successful_code() {
        let (codes, failures) = encode_lossy(&HalfBroken, "Anna");
        assert_eq!(codes.soundex, "ANNA");
        assert_eq!(codes.metaphone, "");
        assert_eq!(failures, 1);
    }

    #[test]
    fn test_soundex_classic_code() {
        let encoder = RPhoneticEncoder::new();
        assert_eq!(encoder.soundex("Robert").unwrap(), "R163");
        assert_eq!(encoder.soundex("Rupert").unwrap(), "R163");
    }

    #[test]
    fn test_similar_names_share_codes() {
        let encoder = RPhoneticEncoder::new();
        assert_eq!(
            encoder.soundex("Smith").unwrap(),
            encoder.soundex("Smyth").unwrap()
        );
        assert_eq!(
            encoder.metaphone("Smith").unwrap(),
            encoder.metaphone("Smyth").unwrap()
        );
    }

    #[test]
    fn test_soundex_ignores_non_ascii_letters() {
        let encoder = RPhoneticEncoder::new();
        assert_eq!(
            encoder.soundex("Müller").unwrap(),
            encoder.soundex("Mller").unwrap()
        );
    }

    #[test]
    fn test_unencodable_names_are_refused() {
        let encoder = RPhoneticEncoder::new();
        assert!(matches!(
            encoder.soundex("李"),
            Err(PhoneticError::Unencodable {
                algorithm: "soundex",
                ..
            })
        ));
        assert!(encoder.metaphone("---").is_err());
        let (codes, failures) = encode_lossy(&encoder, "李");
        assert_eq!(codes, PhoneticCodes::default());
        assert_eq!(failures, 2);
    }
}
