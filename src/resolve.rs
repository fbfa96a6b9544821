//! Location normalizer: raw fragment → canonical city name.
//!
//! Resolution runs a fixed ladder, each rung short-circuiting on success:
//! alias table → script detection → exact dictionary lookup → fuzzy
//! lookup over the edit-distance-1 neighborhood. The canonical output is
//! always the lower-case Russian-script spelling.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::dictionary::Gazetteer;
use crate::error::ToponymResult;
use crate::fuzzy::{edit_distance, misspellings};
use crate::language::Language;

/// Known non-dictionary spellings and historical names, already mapped to
/// their canonical target. Consulted before any dictionary or fuzzy work
/// and never recursed into.
const ALIASES: &[(&str, &str)] = &[
    ("днепр", "днипро"),
    ("днепропетровск", "днипро"),
    ("дніпропетровськ", "днипро"),
    ("дніпропетрівськ", "днипро"),
    ("днепродзержинск", "каменское"),
    ("виница", "винница"),
    ("волынь", "волынь"),
    ("рівне", "ровно"),
];

static ALIAS_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

/// Resolves raw location fragments to canonical city names.
///
/// Holds a shared [`Gazetteer`]; cheap to clone and safe to share across
/// threads. The first resolution triggers the one-time dictionary build.
#[derive(Debug, Clone)]
pub struct Resolver {
    gazetteer: Arc<Gazetteer>,
}

impl Resolver {
    pub fn new(gazetteer: Arc<Gazetteer>) -> Self {
        Self { gazetteer }
    }

    /// Resolve a raw location fragment to its canonical name.
    ///
    /// `Ok(None)` means no alias, exact or single-edit fuzzy path matched;
    /// it is an expected outcome, not a failure. Errors only surface from
    /// the dictionary build.
    pub fn resolve(&self, raw: &str) -> ToponymResult<Option<String>> {
        let location = raw.trim().to_lowercase();
        if location.is_empty() {
            return Ok(None);
        }

        if let Some(&canonical) = ALIAS_TABLE.get(location.as_str()) {
            tracing::debug!(%location, %canonical, "alias hit");
            return Ok(Some(canonical.to_string()));
        }

        let dict = self.gazetteer.dictionary()?;

        match Language::detect(&location) {
            Language::Ukrainian => {
                if let Some(ru) = dict.ua_to_ru().get(&location) {
                    return Ok(Some(ru.clone()));
                }
                // First dictionary hit in the neighborhood wins here; only
                // the ambiguous branch below ranks candidates by distance.
                for candidate in misspellings(&location, Language::Ukrainian) {
                    if let Some(ru) = dict.ua_to_ru().get(&candidate) {
                        tracing::debug!(%location, %candidate, %ru, "ukrainian fuzzy hit");
                        return Ok(Some(ru.clone()));
                    }
                }
                Ok(None)
            }
            Language::Russian => {
                // No marker letters proves nothing, so the fragment is
                // treated as Russian first and searched in both scripts
                // on the fuzzy path.
                if dict.ru_to_ua().contains_key(&location) {
                    return Ok(Some(location));
                }

                let mut matched: Vec<String> = Vec::new();
                for candidate in misspellings(&location, Language::Russian) {
                    if dict.ru_to_ua().contains_key(&candidate) {
                        matched.push(candidate);
                    }
                }
                for candidate in misspellings(&location, Language::Ukrainian) {
                    if let Some(ru) = dict.ua_to_ru().get(&candidate) {
                        matched.push(ru.clone());
                    }
                }

                let mut best: Option<(String, usize)> = None;
                for name in matched {
                    let distance = edit_distance(&location, &name);
                    let closer = match &best {
                        Some((_, current)) => distance < *current,
                        None => true,
                    };
                    if closer {
                        best = Some((name, distance));
                    }
                }
                if let Some((ref name, distance)) = best {
                    tracing::debug!(%location, %name, distance, "fuzzy match selected");
                }
                Ok(best.map(|(name, _)| name))
            }
        }
    }
}
