use thiserror::Error;

/// Boundary validation errors. Once validation passes, the engine has no
/// failure path: encoding and multiplication are total over well-formed
/// inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("dense buffer has length {len}, expected {nrows}x{ncols}")]
    BufferSizeMismatch {
        nrows: usize,
        ncols: usize,
        len: usize,
    },
    #[error("inner dimension mismatch: A is {a_rows}x{a_cols}, B is {b_rows}x{b_cols}")]
    DimensionMismatch {
        a_rows: usize,
        a_cols: usize,
        b_rows: usize,
        b_cols: usize,
    },
    #[error("output buffer has length {got}, expected {expected}")]
    OutputSizeMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
