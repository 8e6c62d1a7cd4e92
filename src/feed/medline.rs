//! Author names from MEDLINE formatted `.nbib` text.
//!
//! Only `FAU` (full author name) lines are read. Their value is
//! `Family, Given`, for example `FAU - van der Kouwe, André J W`. `AU` lines
//! carry initials only and give no usable given names.

use crate::RawNamePair;
use either::{Either, Left, Right};
use itertools::Itertools;
use tracing::debug;

const FULL_AUTHOR_TAG: &str = "FAU";

/// Read every `FAU` line of `text` as a raw name pair, in order.
///
/// ```
/// use pumedoro::feed::medline::parse_medline_authors;
///
/// let input = "PMID- 28230838\nFAU - Lerch, Jason P\nAU  - Lerch JP\nFAU - Fischl, Bruce\n";
/// let authors = parse_medline_authors(input);
/// assert_eq!(authors.len(), 2);
/// assert_eq!(authors[0].given_name_raw.as_deref(), Some("Jason P"));
/// ```
pub fn parse_medline_authors(text: &str) -> Vec<RawNamePair> {
    let (skipped, authors): (Vec<&str>, Vec<RawNamePair>) =
        text.lines().partition_map(parse_line);
    debug!(
        authors = authors.len(),
        skipped = skipped.len(),
        "Read MEDLINE author lines"
    );
    authors
}

/// A `FAU` line becomes a name pair; every other line is passed through.
fn parse_line(line: &str) -> Either<&str, RawNamePair> {
    match split_on_dash(line) {
        Some((FULL_AUTHOR_TAG, value)) => Right(full_author_name(value)),
        _ => Left(line),
    }
}

/// Split a `FAU` value into family and given name. A value without a comma
/// is a mononym and fills the family name only.
fn full_author_name(value: &str) -> RawNamePair {
    match value.split_once(", ") {
        Some((family, given)) => RawNamePair::new(given.trim(), family.trim()),
        None => RawNamePair {
            given_name_raw: None,
            family_name_raw: Some(value.trim().to_string()),
        },
    }
}

/// Split on the first `-` character and remove the whitespace surrounding the removed `-`.
fn split_on_dash(line: &str) -> Option<(&str, &str)> {
    line.split_once('-')
        .map(|(l, r)| (l.trim_end(), r.trim_start()))
}
