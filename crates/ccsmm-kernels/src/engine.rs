//! Boundary validation, orchestration, and result emission

use crate::encode::encode_ccs_f64_i64;
use crate::matmul::{matmul_ccs_f64_i64, matmul_ccs_par_f64_i64};
use ccsmm_core::{DenseView, EngineError};

/// Execution strategy for the multiplication loop. Validation, encoding,
/// and emission are shared; this is the only variation point between the
/// sequential and parallel entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Parallel,
}

/// Multiply two dense row-major matrices through the compressed-column
/// engine, writing the dense product into `out`.
///
/// All validation runs before any encoding or allocation, in this order:
/// buffer lengths against the declared dimensions, inner dimensions
/// (a_cols == b_rows), output capacity (a_rows * b_cols). On error `out`
/// is left untouched; on success it is fully overwritten.
#[allow(clippy::too_many_arguments)]
pub fn multiply_sparse_f64(
    a: &[f64],
    a_rows: usize,
    a_cols: usize,
    b: &[f64],
    b_rows: usize,
    b_cols: usize,
    out: &mut [f64],
    strategy: Strategy,
) -> Result<(), EngineError> {
    let a = DenseView::new(a, a_rows, a_cols)?;
    let b = DenseView::new(b, b_rows, b_cols)?;
    if a.ncols() != b.nrows() {
        return Err(EngineError::DimensionMismatch {
            a_rows,
            a_cols,
            b_rows,
            b_cols,
        });
    }
    let expected = a_rows.saturating_mul(b_cols);
    if out.len() != expected {
        return Err(EngineError::OutputSizeMismatch {
            expected,
            got: out.len(),
        });
    }

    let ca = encode_ccs_f64_i64(&a);
    let cb = encode_ccs_f64_i64(&b);
    let acc = match strategy {
        Strategy::Sequential => matmul_ccs_f64_i64(&ca, &cb),
        Strategy::Parallel => matmul_ccs_par_f64_i64(&ca, &cb),
    };
    emit_f64(&acc, out);
    Ok(())
}

/// Sequential entry point; see [`multiply_sparse_f64`].
#[allow(clippy::too_many_arguments)]
pub fn multiply_sparse_seq_f64(
    a: &[f64],
    a_rows: usize,
    a_cols: usize,
    b: &[f64],
    b_rows: usize,
    b_cols: usize,
    out: &mut [f64],
) -> Result<(), EngineError> {
    multiply_sparse_f64(
        a,
        a_rows,
        a_cols,
        b,
        b_rows,
        b_cols,
        out,
        Strategy::Sequential,
    )
}

/// Parallel entry point; see [`multiply_sparse_f64`].
#[allow(clippy::too_many_arguments)]
pub fn multiply_sparse_par_f64(
    a: &[f64],
    a_rows: usize,
    a_cols: usize,
    b: &[f64],
    b_rows: usize,
    b_cols: usize,
    out: &mut [f64],
) -> Result<(), EngineError> {
    multiply_sparse_f64(
        a,
        a_rows,
        a_cols,
        b,
        b_rows,
        b_cols,
        out,
        Strategy::Parallel,
    )
}

/// Copy the accumulated dense result into the caller-owned buffer,
/// row-major, verbatim.
#[inline]
fn emit_f64(acc: &[f64], out: &mut [f64]) {
    debug_assert_eq!(acc.len(), out.len());
    out.copy_from_slice(acc);
}
