//! Ordered token rules for the given-name and family-name fields.
//!
//! Every rule is a fresh pass over the surviving tokens of the previous one;
//! nothing is removed from a sequence while that sequence is being walked.

use crate::classifier::config::ClassifierConfig;
use crate::regex::Regex;
use crate::utils::{char_len, split_on_space};
use itertools::Itertools;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviated initials: `A.`, `J.R.R.`, or a hyphenated pair such as `A.-B.`.
static ABBREVIATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]\.)+$|^[A-Z]\.?-[A-Z]\.?$").unwrap());

/// A two-letter given name: a capital followed by one lowercase vowel.
static TWO_LETTER_GIVEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][aeiouy]$").unwrap());

/// Word lists from a [ClassifierConfig], prepared for lookup.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRules {
    suffixes: HashSet<String>,
    /// Each particle split into its lowercase words (`de la` -> `["de", "la"]`).
    particles: Vec<Vec<String>>,
    two_letter_exceptions: HashSet<String>,
}

impl CompiledRules {
    pub(crate) fn new(config: &ClassifierConfig) -> Self {
        Self {
            suffixes: config.suffixes.iter().cloned().collect(),
            particles: config
                .particles
                .iter()
                .map(|p| p.split_whitespace().map(str::to_string).collect_vec())
                .filter(|words| !words.is_empty())
                .collect(),
            two_letter_exceptions: config.two_letter_exceptions.iter().cloned().collect(),
        }
    }

    fn is_suffix(&self, token: &str) -> bool {
        self.suffixes.contains(&token.to_lowercase())
    }

    fn is_single_word_particle(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.particles
            .iter()
            .any(|words| words.len() == 1 && words[0] == lower)
    }

    /// A two-letter token survives if it is an exception, looks like a short
    /// given name, or is a particle left for the truncation step.
    fn keeps_two_letter_token(&self, token: &str) -> bool {
        self.two_letter_exceptions.contains(token)
            || TWO_LETTER_GIVEN_REGEX.is_match(token)
            || self.is_single_word_particle(token)
    }

    /// Index of the first token starting a particle, in a single pass over the tokens.
    fn first_particle_index(&self, tokens: &[&str]) -> Option<usize> {
        let lowered = tokens.iter().map(|t| t.to_lowercase()).collect_vec();
        (0..lowered.len()).find(|&start| {
            self.particles
                .iter()
                .any(|words| particle_matches_at(&lowered, start, words))
        })
    }

    /// Given-name candidates of a raw given-name field, in their original order.
    pub(crate) fn given_name_tokens(&self, raw: &str) -> Vec<String> {
        let tokens = split_on_space(raw)
            .filter(|t| !self.is_suffix(t))
            .filter(|t| char_len(t) > 1)
            .filter(|t| !ABBREVIATION_REGEX.is_match(t))
            .filter(|t| char_len(t) != 2 || self.keeps_two_letter_token(t))
            .collect_vec();

        let end = self.first_particle_index(&tokens).unwrap_or(tokens.len());
        tokens[..end].iter().map(|t| t.to_string()).collect()
    }

    /// The family name of a raw family-name field with suffix tokens removed.
    pub(crate) fn family_name(&self, raw: &str) -> String {
        split_on_space(raw).filter(|t| !self.is_suffix(t)).join(" ")
    }
}

fn particle_matches_at(lowered: &[String], start: usize, words: &[String]) -> bool {
    lowered.len() - start >= words.len()
        && lowered[start..]
            .iter()
            .zip(words)
            .all(|(token, word)| token == word)
}
