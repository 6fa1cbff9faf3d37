use thiserror::Error;

#[derive(Error, Debug)]
pub enum SectionError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("Failed to parse race data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
