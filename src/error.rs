use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeveltreeError {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Decoration failed: {message}")]
    Decoration { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LeveltreeError>;
