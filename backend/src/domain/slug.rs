//! Slug normalisation and slug-shape validation.
//!
//! Recipe identity is the slug of its name: lookups, removals, and search all
//! compare slugs rather than raw names.

use std::sync::OnceLock;

use regex::Regex;

/// Characters dropped before tokenisation.
const REMOVED: &[char] = &['*', '+', '~', '.', '(', ')', '\'', '"', '!', ':', '@'];

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_regex() -> &'static Regex {
    SLUG_RE.get_or_init(|| {
        Regex::new("^[a-z0-9]+(-[a-z0-9]+)*$")
            .unwrap_or_else(|error| panic!("slug regex failed to compile: {error}"))
    })
}

/// Convert free text into a lowercase, hyphen-separated token.
///
/// The input is lowercased first. Characters in `* + ~ . ( ) ' " ! : @` are
/// then removed, a handful of symbols and accented Latin letters are spelled
/// out in ASCII, and every run of whitespace or hyphens collapses into a
/// single `-`.
///
/// # Examples
/// ```
/// use cookbook::domain::slugify;
///
/// assert_eq!(slugify("Chicken Curry!"), "chicken-curry");
/// assert_eq!(slugify("Mac & Cheese"), "mac-and-cheese");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut expanded = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        if REMOVED.contains(&ch) {
            continue;
        }
        match transliterate(ch) {
            Some(replacement) => expanded.push_str(replacement),
            None if ch == '-' => expanded.push(' '),
            None => expanded.push(ch),
        }
    }

    expanded.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Return `true` when `value` matches `^[a-z0-9]+(-[a-z0-9]+)*$`.
pub fn is_slug(value: &str) -> bool {
    slug_regex().is_match(value)
}

fn transliterate(ch: char) -> Option<&'static str> {
    let replacement = match ch {
        '&' => "and",
        '%' => "percent",
        '$' => "dollar",
        '€' => "euro",
        '£' => "pound",
        '<' => "less",
        '>' => "greater",
        '|' => "or",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ß' => "ss",
        _ => return None,
    };
    Some(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Chicken Curry!", "chicken-curry")]
    #[case("  Spaghetti (Carbonara)  ", "spaghetti-carbonara")]
    #[case("Grandma's \"Famous\" Pie", "grandmas-famous-pie")]
    #[case("Soup: 3 Ways @ Home", "soup-3-ways-home")]
    #[case("Slow-Cooked   Beef -- Stew", "slow-cooked-beef-stew")]
    #[case("Crème Brûlée", "creme-brulee")]
    #[case("Fish & Chips", "fish-and-chips")]
    #[case("ÉCLAIRS", "eclairs")]
    #[case("Ÿogurt Bowl", "yogurt-bowl")]
    #[case("GROẞE Torte", "grosse-torte")]
    #[case("", "")]
    #[case("!!!", "")]
    fn normalises_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[rstest]
    #[case("Chicken Curry!")]
    #[case("Crème Brûlée")]
    #[case("-- Leading and trailing --")]
    #[case("already-a-slug")]
    #[case("Ÿogurt Bowl")]
    #[case("GROẞE Torte")]
    fn normalisation_is_idempotent(#[case] input: &str) {
        let once = slugify(input);
        assert_eq!(slugify(&once), once);
    }

    #[rstest]
    #[case("chicken-curry", true)]
    #[case("soup", true)]
    #[case("pad-thai-2", true)]
    #[case("", false)]
    #[case("Chicken-Curry", false)]
    #[case("chicken--curry", false)]
    #[case("-soup", false)]
    #[case("soup-", false)]
    #[case("fish-&-chips", false)]
    fn recognises_slug_shape(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_slug(value), expected);
    }
}
