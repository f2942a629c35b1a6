use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CupomError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("PDF has no extractable text layer (scanned image without OCR?)")]
    EmptyText,

    #[error("no items found in the extracted text. First lines were:\n{preview}")]
    NoItems { preview: String },

    #[error("invalid number '{value}': {reason}")]
    InvalidNumber { value: String, reason: String },

    #[error("failed to write CSV to {path}: {reason}")]
    Export { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
