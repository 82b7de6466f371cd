use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("{entity} '{id}' already exists")]
    DuplicateKey { entity: &'static str, id: String },

    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Corrupt data in {path}: {source}")]
    CorruptData {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{entity} '{id}' is still referenced by {reservations} reservation(s)")]
    StillReferenced {
        entity: &'static str,
        id: String,
        reservations: usize,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeskError>;
