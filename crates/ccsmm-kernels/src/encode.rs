//! Dense to compressed-column encoding

use crate::util::usize_to_i64;
use ccsmm_core::{Ccs, DenseView};

/// Encode a dense view in compressed-column form.
///
/// Columns are scanned left to right and rows top to bottom, so row indices
/// within each column come out strictly increasing. Only exact zeros are
/// treated as structurally absent: sparsity is structural, not a tolerance,
/// and an epsilon test here would change the contract.
///
/// Total over well-formed views; an all-zero input yields empty values and
/// all-zero offsets.
#[must_use]
pub fn encode_ccs_f64_i64(dense: &DenseView<'_>) -> Ccs<f64, i64> {
    let (nrows, ncols) = dense.shape();
    let mut values: Vec<f64> = Vec::new();
    let mut row_indices: Vec<i64> = Vec::new();
    let mut col_offsets: Vec<i64> = Vec::with_capacity(ncols + 1);
    for j in 0..ncols {
        col_offsets.push(usize_to_i64(values.len()));
        for i in 0..nrows {
            let v = dense.at(i, j);
            if v != 0.0 {
                values.push(v);
                row_indices.push(usize_to_i64(i));
            }
        }
    }
    col_offsets.push(usize_to_i64(values.len()));
    Ccs::from_parts_unchecked(nrows, ncols, col_offsets, row_indices, values)
}
