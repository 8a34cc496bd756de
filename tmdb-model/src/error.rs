/// Errors produced by decoding and date parsing routines.
///
/// Image URL resolution never produces one of these; an unsatisfiable size
/// request resolves to the original variant instead.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid date {input:?}: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[cfg(feature = "serde")]
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
