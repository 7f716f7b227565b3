use thiserror::Error;

// Everything here is fatal: the run either completes or terminates with one of
// these, and files already flushed to disk are left as-is.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("expected a whole number for {what}, got {text:?}")]
    Input { what: &'static str, text: String },

    #[error("{what} must be at least 1")]
    TooSmall { what: &'static str },

    #[error("{path}:{line}: expected a number, got {text:?}")]
    BadValue {
        path: String,
        line: usize,
        text: String,
    },

    #[error("test nodes have {test} dimensions but the training nodes have {train}")]
    DimensionMismatch { train: usize, test: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset file error: {0}")]
    Csv(#[from] csv::Error),
}
