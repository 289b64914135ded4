//! Locale-aware title comparison.
//!
//! Orders strings the way a reader expects rather than by raw code point:
//!
//! 1. **Primary**: case-insensitive, with diacritics on Latin letters ignored
//!    (`"Émile"` sorts with `"emile"`, before `"Fable"`).
//! 2. **Tertiary**: on a primary tie, lowercase sorts before uppercase at the first
//!    differing position.
//! 3. **Final**: code point order, so the comparison is total and deterministic.

use std::cmp::Ordering;

/// Compares two titles with collation semantics.
///
/// # Examples
///
/// ```
/// use podshelf::catalog::collate::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("Émile", "Fable"), Ordering::Less);
/// assert_eq!(locale_compare("abc", "ABC"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn primary_key(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase).map(strip_diacritic)
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

const fn strip_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ś' | 'š' => 's',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_primary() {
        assert_eq!(locale_compare("zebra", "Apple"), Ordering::Greater);
        assert_eq!(locale_compare("Apple", "apricot"), Ordering::Less);
    }

    #[test]
    fn lowercase_first_on_tie() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("A", "a"), Ordering::Greater);
    }

    #[test]
    fn accents_collate_with_base_letter() {
        assert_eq!(locale_compare("café", "cafe z"), Ordering::Less);
        assert_eq!(locale_compare("Über", "Zulu"), Ordering::Less);
    }

    #[test]
    fn identical_strings_are_equal() {
        assert_eq!(locale_compare("Same", "Same"), Ordering::Equal);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_compare("The", "The Daily"), Ordering::Less);
    }
}
