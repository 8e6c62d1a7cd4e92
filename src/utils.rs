/// Title-cases a name the way dictionary keys are normalized.
///
/// A character is uppercased when the preceding character is not alphabetic
/// (start of string, hyphen, apostrophe, space), otherwise lowercased.
///
/// # Arguments
///
/// * `name` - The name to normalize
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut after_letter = false;
    for c in name.chars() {
        if after_letter {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    result
}

/// Splits a raw name field on ASCII space, dropping the empty pieces left by
/// leading, trailing or repeated spaces.
pub(crate) fn split_on_space(raw: &str) -> impl Iterator<Item = &str> {
    raw.trim().split(' ').filter(|s| !s.is_empty())
}

/// Length of a token in characters.
pub(crate) fn char_len(token: &str) -> usize {
    token.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("john", "John")]
    #[case("JOHN", "John")]
    #[case("anne-els", "Anne-Els")]
    #[case("o'brien", "O'Brien")]
    #[case("von Hardenberg", "Von Hardenberg")]
    #[case("McDonald", "Mcdonald")]
    #[case("ÉMILE", "Émile")]
    #[case("leite-júnior", "Leite-Júnior")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }

    #[test]
    fn test_split_on_space() {
        let parts: Vec<_> = split_on_space("  John  Meinhard ").collect();
        assert_eq!(parts, vec!["John", "Meinhard"]);
        assert_eq!(split_on_space("   ").count(), 0);
        assert_eq!(split_on_space("").count(), 0);
    }

    #[test]
    fn test_split_on_space_keeps_tabs_inside_tokens() {
        let parts: Vec<_> = split_on_space("Jean\tPierre Paul").collect();
        assert_eq!(parts, vec!["Jean\tPierre", "Paul"]);
    }

    #[test]
    fn test_char_len() {
        assert_eq!(char_len("Yu"), 2);
        assert_eq!(char_len("Jó"), 2);
        assert_eq!(char_len(""), 0);
    }
}
