#![allow(
    clippy::many_single_char_names,
    reason = "Math kernels conventionally use i/j/k/p for indices"
)]
use crate::util::i64_to_usize;
use ccsmm_core::Ccs;
use rayon::prelude::*;

/// Scatter the contributions of destination column `j` into `y`.
///
/// Walks the stored entries (val2 @ row2) of column j of B; each selects
/// column row2 of A, whose stored entries (val1 @ row1) accumulate
/// val1 * val2 into y[row1 * b.ncols + j]. Per-cell accumulation order is
/// the natural scan order and is shared by the sequential and parallel
/// entry points.
///
/// # Safety
/// `y` must point to a buffer of at least a.nrows * b.ncols elements, and
/// no other thread may write destination column j concurrently.
#[inline]
unsafe fn scatter_column_f64_i64(a: &Ccs<f64, i64>, b: &Ccs<f64, i64>, j: usize, y: *mut f64) {
    let ncols = b.ncols;
    let s = i64_to_usize(b.col_offsets[j]);
    let e = i64_to_usize(b.col_offsets[j + 1]);
    for p in s..e {
        let row2 = i64_to_usize(b.row_indices[p]);
        let val2 = b.values[p];
        let s2 = i64_to_usize(a.col_offsets[row2]);
        let e2 = i64_to_usize(a.col_offsets[row2 + 1]);
        for q in s2..e2 {
            let row1 = i64_to_usize(a.row_indices[q]);
            unsafe {
                *y.add(row1 * ncols + j) += a.values[q] * val2;
            }
        }
    }
}

/// C = A @ B for compressed-column operands; returns C as
/// (a.nrows, b.ncols) row-major.
///
/// Visits only structural non-zero match triples, so the cost is
/// proportional to their count rather than nrows * ncols * inner.
///
/// # Panics
/// - If a.ncols != b.nrows
#[must_use]
pub fn matmul_ccs_f64_i64(a: &Ccs<f64, i64>, b: &Ccs<f64, i64>) -> Vec<f64> {
    assert_eq!(a.ncols, b.nrows, "inner dimensions must agree");
    let mut y = vec![0.0f64; a.nrows * b.ncols];
    let y_ptr = y.as_mut_ptr();
    for j in 0..b.ncols {
        // Exclusive ownership of y; within bounds by construction.
        unsafe { scatter_column_f64_i64(a, b, j, y_ptr) };
    }
    y
}

/// C = A @ B, partitioning destination columns of B across the rayon pool.
///
/// Ranges are contiguous and balanced by B's per-column nnz. A destination
/// column is written only while processing its own outer-loop index, so
/// ranges never alias and the hot path needs no locks. Values equal the
/// sequential kernel's output: per-column accumulation order does not
/// depend on the partitioning.
///
/// # Panics
/// - If a.ncols != b.nrows
#[must_use]
pub fn matmul_ccs_par_f64_i64(a: &Ccs<f64, i64>, b: &Ccs<f64, i64>) -> Vec<f64> {
    assert_eq!(a.ncols, b.nrows, "inner dimensions must agree");
    let nrows = a.nrows;
    let ncols = b.ncols;
    let mut y = vec![0.0f64; nrows * ncols];
    if nrows == 0 || ncols == 0 {
        return y;
    }

    let nnz = b.nnz();
    let nthreads = rayon::current_num_threads().max(1);
    let target = (nnz / (nthreads * 4)).max(1);
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut acc = 0usize;
    let mut c0 = 0usize;
    for j in 0..ncols {
        let s = i64_to_usize(b.col_offsets[j]);
        let e = i64_to_usize(b.col_offsets[j + 1]);
        if acc == 0 {
            c0 = j;
        }
        acc += e - s;
        if acc >= target {
            ranges.push((c0, j + 1));
            acc = 0;
        }
    }
    if acc > 0 {
        ranges.push((c0, ncols));
    }

    let y_addr = y.as_mut_ptr() as usize;
    ranges.into_par_iter().for_each(|(c0, c1)| {
        let y_ptr = y_addr as *mut f64;
        for j in c0..c1 {
            unsafe { scatter_column_f64_i64(a, b, j, y_ptr) };
        }
    });
    y
}
