//! Canonical dictionary store: bidirectional Russian/Ukrainian name maps.
//!
//! The dictionary is built at most once per [`Gazetteer`] from a list of
//! location records and then shared immutably. Concurrent first callers
//! are serialized by an init mutex so exactly one build executes; a build
//! that fails leaves the cell empty and the next call retries, rather
//! than poisoning the cache as an empty-but-loaded dictionary.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use serde::{Deserialize, Serialize};

use crate::error::DictionaryError;

/// The embedded reference data set.
const EMBEDDED_LOCATIONS: &str = include_str!("../resources/locations.json");

/// A location name expressed in both supported scripts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationName {
    pub ru: String,
    pub uk: String,
}

/// One entry of the reference data set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Stable identifier of the location in the reference set.
    pub id: u32,
    pub name: LocationName,
}

/// Immutable bidirectional mapping between Russian-spelled and
/// Ukrainian-spelled canonical city names. Keys and values are
/// lower-cased; the structure is never mutated after construction.
#[derive(Debug, Default)]
pub struct CanonicalDictionary {
    ru_to_ua: HashMap<String, String>,
    ua_to_ru: HashMap<String, String>,
}

impl CanonicalDictionary {
    /// Build both directions from the reference records.
    ///
    /// Every record contributes exactly one entry per direction. Records
    /// with an empty name in either script abort the build.
    pub fn from_records(records: &[LocationRecord]) -> Result<Self, DictionaryError> {
        let mut ru_to_ua = HashMap::with_capacity(records.len());
        let mut ua_to_ru = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let ru = record.name.ru.trim().to_lowercase();
            let uk = record.name.uk.trim().to_lowercase();
            if ru.is_empty() || uk.is_empty() {
                return Err(DictionaryError::MalformedRecord {
                    index,
                    message: format!("record {} is missing a name", record.id),
                });
            }
            if let Some(previous) = ru_to_ua.insert(ru.clone(), uk.clone()) {
                tracing::warn!(name = %ru, %previous, "duplicate russian name, keeping the later record");
            }
            if let Some(previous) = ua_to_ru.insert(uk, ru) {
                tracing::warn!(%previous, "duplicate ukrainian name, keeping the later record");
            }
        }

        Ok(Self { ru_to_ua, ua_to_ru })
    }

    /// Russian canonical name → Ukrainian spelling.
    pub fn ru_to_ua(&self) -> &HashMap<String, String> {
        &self.ru_to_ua
    }

    /// Ukrainian spelling → Russian canonical name.
    pub fn ua_to_ru(&self) -> &HashMap<String, String> {
        &self.ua_to_ru
    }

    /// Number of reference pairs.
    pub fn len(&self) -> usize {
        self.ru_to_ua.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ru_to_ua.is_empty()
    }
}

/// Where the gazetteer gets its reference records from.
#[derive(Debug)]
enum Source {
    Embedded,
    File(PathBuf),
    Records(Vec<LocationRecord>),
}

/// Lazily-built, process-lifetime store for the canonical dictionary.
///
/// Construction is cheap; the dictionary itself is built on first call to
/// [`Gazetteer::dictionary`] and cached for the lifetime of the store.
/// After the first successful build all reads are lock-free.
#[derive(Debug)]
pub struct Gazetteer {
    source: Source,
    cell: OnceLock<Arc<CanonicalDictionary>>,
    init: Mutex<()>,
}

impl Gazetteer {
    fn with_source(source: Source) -> Self {
        Self {
            source,
            cell: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Gazetteer over the embedded reference data set.
    pub fn embedded() -> Self {
        Self::with_source(Source::Embedded)
    }

    /// Gazetteer over an external locations JSON file.
    ///
    /// The file is not touched until the first [`Gazetteer::dictionary`]
    /// call.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::with_source(Source::File(path.into()))
    }

    /// Gazetteer over an in-memory record list.
    pub fn from_records(records: Vec<LocationRecord>) -> Self {
        Self::with_source(Source::Records(records))
    }

    /// The canonical dictionary, building it on first call.
    ///
    /// Exactly one build runs even under concurrent first access; every
    /// caller observes either the complete dictionary or the build error.
    pub fn dictionary(&self) -> Result<Arc<CanonicalDictionary>, DictionaryError> {
        if let Some(dict) = self.cell.get() {
            return Ok(Arc::clone(dict));
        }

        let _guard = self.init.lock().unwrap_or_else(|e| e.into_inner());
        // A racing caller may have completed the build while we waited.
        if let Some(dict) = self.cell.get() {
            return Ok(Arc::clone(dict));
        }

        let records = self.load_records()?;
        let dict = Arc::new(CanonicalDictionary::from_records(&records)?);
        tracing::info!(pairs = dict.len(), "canonical dictionary built");
        let _ = self.cell.set(Arc::clone(&dict));
        Ok(dict)
    }

    fn load_records(&self) -> Result<Vec<LocationRecord>, DictionaryError> {
        let content = match &self.source {
            Source::Embedded => EMBEDDED_LOCATIONS.to_string(),
            Source::File(path) => {
                std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
                    path: path.clone(),
                    source,
                })?
            }
            Source::Records(records) => return Ok(records.clone()),
        };
        parse_records(&content)
    }
}

/// Parse a locations JSON document into reference records.
pub fn parse_records(content: &str) -> Result<Vec<LocationRecord>, DictionaryError> {
    serde_json::from_str(content).map_err(|e| DictionaryError::Parse {
        message: e.to_string(),
    })
}
