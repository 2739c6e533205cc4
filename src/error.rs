use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    /// The booking record is missing something the document can't do without
    InvalidInput(String),

    #[error("Invalid input: {0}")]
    /// The booking record or config file wasn't valid JSON for its schema
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("couldn't write {}: {source}", path.display())]
    /// The finished document couldn't be persisted
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("the document has no pages")]
    /// Nothing was drawn, so there is nothing to write
    EmptyDocument,

    #[error("font error: {0}")]
    /// The font parsed but can't be used to show text
    Font(String),
}

pub type Result<T> = std::result::Result<T, Error>;
