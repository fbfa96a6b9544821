//! # toponym
//!
//! Resolution of free-text, human-entered city names found in forum topic
//! titles (e.g. `[Украина, Киев] Продам видеокарту`) to a single canonical
//! lower-case spelling, tolerant of misspellings, mixed Russian/Ukrainian
//! Cyrillic and inconsistent separator phrasing.
//!
//! ## Architecture
//!
//! - **Script tables** (`language`): per-script alphabets and marker-letter
//!   detection for the two Cyrillic variants
//! - **Canonical dictionary** (`dictionary`): lazily-built, immutable
//!   bidirectional ru↔uk name maps behind a thread-safe gazetteer
//! - **Candidate generator** (`fuzzy`): the edit-distance-1 neighborhood of
//!   a word, plus Levenshtein distance with transpositions
//! - **Normalizer** (`resolve`): alias → exact → fuzzy resolution ladder
//! - **Title extractor** (`title`): bracket-prefix parsing and separator
//!   heuristics feeding the normalizer
//!
//! ## Library usage
//!
//! ```
//! use std::sync::Arc;
//! use toponym::{Gazetteer, Resolver, TitleParser};
//!
//! let resolver = Resolver::new(Arc::new(Gazetteer::embedded()));
//! let parser = TitleParser::new(resolver);
//! let parsed = parser.parse("[Украина, Киев] Продам видеокарту").unwrap();
//! assert_eq!(parsed.location.as_deref(), Some("киев"));
//! ```

pub mod dictionary;
pub mod error;
pub mod fuzzy;
pub mod language;
pub mod resolve;
pub mod title;

pub use dictionary::{CanonicalDictionary, Gazetteer, LocationName, LocationRecord};
pub use error::{DictionaryError, TitleError, ToponymError, ToponymResult};
pub use fuzzy::{edit_distance, misspellings};
pub use language::Language;
pub use resolve::Resolver;
pub use title::{extract, ParsedTitle, TitleParser};
