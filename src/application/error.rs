use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing or invalid fields: {}", .fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("Ledger is empty, nothing to export")]
    EmptyLedger,

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AppError::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}
