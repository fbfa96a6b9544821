//! Diagnostic error types for the toponym engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text. An unresolved location is
//! NOT an error: `resolve` and `parse` report it as `Ok(None)`.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Convenience alias for engine results.
pub type ToponymResult<T> = Result<T, ToponymError>;

/// Top-level error type for the toponym engine.
#[derive(Debug, Error, Diagnostic)]
pub enum ToponymError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Title(#[from] TitleError),
}

/// Errors from building the canonical dictionary.
///
/// All of these surface on first access to the gazetteer. A failed build
/// is returned to the caller and never cached, so a later access retries
/// instead of silently resolving nothing forever.
#[derive(Debug, Error, Diagnostic)]
pub enum DictionaryError {
    #[error("failed to read location reference data from {}", path.display())]
    #[diagnostic(
        code(toponym::dictionary::io),
        help(
            "Check that the locations file exists and is readable. \
             The engine ships an embedded data set; use `Gazetteer::embedded()` \
             if you do not need a custom one."
        )
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("location reference data is not valid JSON: {message}")]
    #[diagnostic(
        code(toponym::dictionary::parse),
        help(
            "The locations file must be a JSON array of records shaped like \
             {{\"id\": 1, \"name\": {{\"ru\": \"Киев\", \"uk\": \"Київ\"}}}}."
        )
    )]
    Parse { message: String },

    #[error("malformed location record #{index}: {message}")]
    #[diagnostic(
        code(toponym::dictionary::malformed_record),
        help(
            "Every record must carry a non-empty name in both scripts. \
             Fix or remove the offending record."
        )
    )]
    MalformedRecord { index: usize, message: String },
}

/// Errors from title parsing.
#[derive(Debug, Error, Diagnostic)]
pub enum TitleError {
    #[error("malformed title, no closing bracket: \"{title}\"")]
    #[diagnostic(
        code(toponym::title::malformed),
        help(
            "Topic titles are expected in the form \"[<location>] <text>\". \
             A title without \"]\" violates the caller contract; skip or \
             re-fetch the record instead of guessing."
        )
    )]
    MalformedTitle { title: String },
}
