//! Script tables for the two supported Cyrillic variants.
//!
//! Most Cyrillic letters are shared between the Russian and Ukrainian
//! alphabets, so script detection keys off the four letters that exist
//! only in Ukrainian (і, ї, є, ґ). Absence of a marker does not prove a
//! fragment is Russian; it only means Russian is the safe default.

use std::sync::LazyLock;

use regex::Regex;

/// Letters unique to the Ukrainian alphabet.
static UKRAINIAN_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[іїєґ]").expect("valid marker pattern")
});

/// Russian alphabet, 33 letters in dictionary order.
const RUSSIAN_LETTERS: &[char] = &[
    'а', 'б', 'в', 'г', 'д', 'е', 'ё', 'ж', 'з', 'и', 'й', 'к', 'л', 'м', 'н',
    'о', 'п', 'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь',
    'э', 'ю', 'я',
];

/// Ukrainian alphabet, 33 letters in dictionary order.
const UKRAINIAN_LETTERS: &[char] = &[
    'а', 'б', 'в', 'г', 'ґ', 'д', 'е', 'є', 'ж', 'з', 'и', 'і', 'ї', 'й', 'к',
    'л', 'м', 'н', 'о', 'п', 'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ',
    'ь', 'ю', 'я',
];

/// One of the two supported Cyrillic scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Russian,
    Ukrainian,
}

impl Language {
    /// The letter set used to mutate words into edit-distance-1 candidates.
    pub fn alphabet(self) -> &'static [char] {
        match self {
            Self::Russian => RUSSIAN_LETTERS,
            Self::Ukrainian => UKRAINIAN_LETTERS,
        }
    }

    /// Classify a lower-cased fragment by script.
    ///
    /// Returns `Ukrainian` if the fragment contains any Ukrainian-only
    /// letter, `Russian` otherwise. A fragment without markers may still
    /// be Ukrainian text; callers treating `Russian` as "ambiguous" must
    /// search both scripts themselves.
    pub fn detect(fragment: &str) -> Self {
        if UKRAINIAN_MARKERS.is_match(fragment) {
            Self::Ukrainian
        } else {
            Self::Russian
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Russian => write!(f, "ru"),
            Self::Ukrainian => write!(f, "uk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn alphabets_have_33_unique_letters() {
        for language in [Language::Russian, Language::Ukrainian] {
            let letters = language.alphabet();
            assert_eq!(letters.len(), 33, "{language}");
            let unique: HashSet<char> = letters.iter().copied().collect();
            assert_eq!(unique.len(), letters.len(), "{language}");
        }
    }

    #[test]
    fn detects_ukrainian_markers() {
        assert_eq!(Language::detect("дніпро"), Language::Ukrainian);
        assert_eq!(Language::detect("миколаїв"), Language::Ukrainian);
        assert_eq!(Language::detect("єнакієве"), Language::Ukrainian);
        assert_eq!(Language::detect("ґанок"), Language::Ukrainian);
    }

    #[test]
    fn defaults_to_russian_without_markers() {
        assert_eq!(Language::detect("киев"), Language::Russian);
        // Shared-letter Ukrainian spelling falls through to the default.
        assert_eq!(Language::detect("одеса"), Language::Russian);
        assert_eq!(Language::detect(""), Language::Russian);
    }
}
