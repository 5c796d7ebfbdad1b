use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LabrefError {
    #[error("file '{path}' not found")]
    FileNotFound { path: PathBuf },

    #[error("could not read {path} with any of the tried encodings: {}", .encodings.join(", "))]
    EncodingExhausted {
        path: PathBuf,
        encodings: Vec<String>,
    },

    #[error("column '{column}' not found in {path} under any tried encoding")]
    MissingColumn { path: PathBuf, column: String },

    #[error("failed to read workbook: {0}")]
    Workbook(String),

    #[error("failed to load layout from {path}: {reason}")]
    LayoutLoad { path: PathBuf, reason: String },

    #[error("invalid layout: {0}")]
    LayoutInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LabrefError {
    /// True for the failures that come from locating or decoding an input
    /// table, as opposed to layout or output problems.
    pub fn is_table_load(&self) -> bool {
        matches!(
            self,
            LabrefError::FileNotFound { .. }
                | LabrefError::EncodingExhausted { .. }
                | LabrefError::MissingColumn { .. }
                | LabrefError::Workbook(_)
        )
    }
}
