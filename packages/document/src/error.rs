use thiserror::Error;

/// Errors raised while reading or writing serialized documents.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing root node \"{}\"", crate::ROOT_ID)]
    MissingRoot,
}
