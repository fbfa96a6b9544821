//! Title location extractor: `"[Украина, Киев] ..."` → canonical city.
//!
//! Forum topic titles open with a bracketed, free-text location phrase.
//! This module isolates the phrase, trims it down to a single city
//! candidate with a handful of separator heuristics, and hands the
//! candidate to the [`Resolver`]. The un-reduced phrase is kept as a raw
//! side output so the calling pipeline can persist it next to the
//! canonical name.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{TitleError, ToponymResult};
use crate::resolve::Resolver;

/// Matches country-name forms like "Украина"/"україна" via the bare
/// infix `ук.*на`. Deliberately loose: it also fires on unrelated words
/// containing the infix, an accepted approximation carried over from the
/// production heuristic.
static COUNTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ук.*на").expect("valid country pattern"));

/// Space-bounded conjunction joining alternative cities ("Одесса и Стамбул").
const CONJUNCTION: &str = " и ";

/// A processed topic title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    /// Canonical city name, if any path resolved one.
    pub location: Option<String>,
    /// The full bracket content, un-reduced, for audit/persistence.
    pub location_raw: String,
    /// The title text after the bracket, trimmed.
    pub title: String,
}

/// Rule-based parser for bracketed title prefixes.
#[derive(Debug, Clone)]
pub struct TitleParser {
    resolver: Resolver,
}

impl TitleParser {
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    /// Extract the location phrase from a title and resolve it.
    ///
    /// A title without a closing bracket violates the caller contract and
    /// fails loudly; a title whose phrase names no recognizable city is
    /// `Ok` with `location: None`.
    pub fn parse(&self, title: &str) -> ToponymResult<ParsedTitle> {
        let parts = split_title(title)?;
        let location = match parts.candidate {
            Some(candidate) => self.resolver.resolve(&candidate)?,
            None => None,
        };

        Ok(ParsedTitle {
            location,
            location_raw: parts.content.to_string(),
            title: parts.rest.trim().to_string(),
        })
    }
}

/// Isolate the raw, pre-trimmed city candidate from a bracketed title,
/// without resolving it.
///
/// Returns `Ok(None)` when the bracket names only a country. The result
/// is what [`TitleParser::parse`] hands to the [`Resolver`].
pub fn extract(title: &str) -> Result<Option<String>, TitleError> {
    Ok(split_title(title)?.candidate)
}

struct TitleParts<'a> {
    /// Reduced city candidate, ready for resolution.
    candidate: Option<String>,
    /// Full bracket content, un-reduced.
    content: &'a str,
    /// Text after the closing bracket.
    rest: &'a str,
}

fn split_title(title: &str) -> Result<TitleParts<'_>, TitleError> {
    let title = title.trim();
    let Some((bracket, rest)) = title.split_once(']') else {
        return Err(TitleError::MalformedTitle {
            title: title.to_string(),
        });
    };
    let content = bracket.trim_start().trim_start_matches('[');

    let tokens: Vec<&str> = content.split(',').map(str::trim).collect();
    let candidate = if tokens.len() == 1 {
        // A lone country name carries no city at all.
        if COUNTRY_PATTERN.is_match(tokens[0]) {
            None
        } else {
            Some(tokens[0].to_string())
        }
    } else if COUNTRY_PATTERN.is_match(tokens[0]) {
        // "Украина, Киев" — the city follows the country.
        Some(tokens[1].to_string())
    } else {
        // "Покровск, Донецкая область" — the first token is already
        // the city and the rest is a qualifier, not a country.
        Some(tokens.join(","))
    };

    Ok(TitleParts {
        candidate: candidate.map(|c| reduce(&c)),
        content,
        rest,
    })
}

/// Trim a multi-part city candidate down to a single token.
///
/// Exactly one rule applies, in fixed priority order: region qualifier
/// after a comma, alternative names joined by a slash, joint listings
/// with the conjunction, and spaced compound names around hyphens.
fn reduce(candidate: &str) -> String {
    if let Some((city, _qualifier)) = candidate.split_once(',') {
        city.to_string()
    } else if let Some((city, _alternative)) = candidate.split_once('/') {
        city.to_string()
    } else if candidate.contains(CONJUNCTION) {
        candidate
            .split_whitespace()
            .next()
            .unwrap_or(candidate)
            .to_string()
    } else if candidate.contains('-') {
        // "Ивано - Франковск" → "Ивано-Франковск", kept as one token.
        candidate.split_whitespace().collect()
    } else {
        candidate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dictionary::Gazetteer;
    use crate::error::ToponymError;

    fn parser() -> TitleParser {
        TitleParser::new(Resolver::new(Arc::new(Gazetteer::embedded())))
    }

    #[test]
    fn country_and_city() {
        let parsed = parser().parse("[Украина, Киев] Продам видеокарту").unwrap();
        assert_eq!(parsed.location.as_deref(), Some("киев"));
        assert_eq!(parsed.location_raw, "Украина, Киев");
        assert_eq!(parsed.title, "Продам видеокарту");
    }

    #[test]
    fn single_token_city() {
        let parsed = parser().parse("[Днипро] text").unwrap();
        assert_eq!(parsed.location.as_deref(), Some("днипро"));
        assert_eq!(parsed.location_raw, "Днипро");
    }

    #[test]
    fn country_only_has_no_city() {
        let parsed = parser().parse("[Украина] text").unwrap();
        assert_eq!(parsed.location, None);
        assert_eq!(parsed.location_raw, "Украина");
    }

    #[test]
    fn city_with_region_qualifier() {
        let parsed = parser()
            .parse("[Покровск, Донецкая область] text")
            .unwrap();
        assert_eq!(parsed.location.as_deref(), Some("покровск"));
        assert_eq!(parsed.location_raw, "Покровск, Донецкая область");
    }

    #[test]
    fn slash_keeps_first_alternative() {
        let parsed = parser().parse("[Украина, Киев/Бровары] text").unwrap();
        assert_eq!(parsed.location.as_deref(), Some("киев"));
    }

    #[test]
    fn conjunction_keeps_first_city() {
        let parsed = parser().parse("[Украина, Одесса и Стамбул] text").unwrap();
        assert_eq!(parsed.location.as_deref(), Some("одесса"));
    }

    #[test]
    fn hyphenated_compound_stays_whole() {
        let parsed = parser().parse("[Украина, Ивано-Франковск] text").unwrap();
        assert_eq!(parsed.location.as_deref(), Some("ивано-франковск"));
    }

    #[test]
    fn spaced_hyphen_is_normalized_and_resolved_cross_script() {
        // Single token, no country, hyphen with spaces, Ukrainian script:
        // reduction yields "Івано-Франківськ", mapped to the Russian
        // canonical compound.
        let parsed = parser().parse("[Івано - Франківськ] text").unwrap();
        assert_eq!(parsed.location.as_deref(), Some("ивано-франковск"));

        // With a typo on top, the Ukrainian fuzzy path still recovers it.
        let parsed = parser().parse("[Івано - Франківск] text").unwrap();
        assert_eq!(parsed.location.as_deref(), Some("ивано-франковск"));
    }

    #[test]
    fn missing_bracket_fails_loudly() {
        let err = parser().parse("Продам видеокарту").unwrap_err();
        assert!(matches!(
            err,
            ToponymError::Title(TitleError::MalformedTitle { .. })
        ));
    }

    #[test]
    fn unrecognizable_location_is_unresolved() {
        let parsed = parser().parse("[Атлантида] text").unwrap();
        assert_eq!(parsed.location, None);
        assert_eq!(parsed.location_raw, "Атлантида");
    }

    #[test]
    fn country_pattern_false_positive_is_preserved() {
        // The loose infix also fires inside unrelated words; the behavior
        // is documented and kept, not fixed.
        assert!(COUNTRY_PATTERN.is_match("сукна"));
        assert!(COUNTRY_PATTERN.is_match("указана"));
        assert!(COUNTRY_PATTERN.is_match("УКРАЇНА"));
    }

    #[test]
    fn extract_returns_raw_candidate_without_resolving() {
        assert_eq!(
            extract("[Украина, Киев] Title").unwrap().as_deref(),
            Some("Киев")
        );
        assert_eq!(
            extract("[Украина, Киев/Бровары] Title").unwrap().as_deref(),
            Some("Киев")
        );
        assert_eq!(extract("[Украина] Title").unwrap(), None);
        // Unknown cities still come back raw; resolution is a separate step.
        assert_eq!(
            extract("[Атлантида] Title").unwrap().as_deref(),
            Some("Атлантида")
        );
        assert!(extract("no bracket").is_err());
    }

    #[test]
    fn reduce_rules_apply_in_priority_order() {
        assert_eq!(reduce("Верховцево, Днепропетровская область"), "Верховцево");
        assert_eq!(reduce("Киев/Бровары"), "Киев");
        assert_eq!(reduce("Одесса и Стамбул"), "Одесса");
        assert_eq!(reduce("Ивано - Франковск"), "Ивано-Франковск");
        assert_eq!(reduce("Харьков"), "Харьков");
        // Comma wins over every later rule.
        assert_eq!(reduce("Киев, Бровары/Ирпень"), "Киев");
    }
}
