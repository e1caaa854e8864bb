//! Compressed-column (CCS) format definitions and constructors

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Ccs<T, I> {
    pub values: Vec<T>,
    pub row_indices: Vec<I>, // row indices per column, length nnz
    pub col_offsets: Vec<I>, // column pointer, length ncols + 1
    pub nrows: usize,
    pub ncols: usize,
}

impl<T, I> Ccs<T, I> {
    #[inline]
    #[must_use]
    pub const fn nnz(&self) -> usize {
        self.values.len()
    }
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
}

impl Ccs<f64, i64> {
    #[inline]
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        col_offsets: Vec<i64>,
        row_indices: Vec<i64>,
        values: Vec<f64>,
        check: bool,
    ) -> Result<Self, String> {
        let Some(expected_len) = ncols.checked_add(1) else {
            return Err("ncols overflow when adding 1".into());
        };
        if col_offsets.len() != expected_len {
            return Err("col_offsets length must be ncols + 1".into());
        }
        if row_indices.len() != values.len() {
            return Err("row_indices and values must have equal length".into());
        }
        let nnz = row_indices.len();
        if usize::try_from(col_offsets.last().copied().unwrap_or(0)).ok() != Some(nnz) {
            return Err("col_offsets last element must equal nnz".into());
        }
        if col_offsets.first().copied().unwrap_or(0) != 0 {
            return Err("col_offsets first element must be 0".into());
        }
        if check {
            for (prev_ptr, next_ptr) in col_offsets.iter().zip(col_offsets.iter().skip(1)) {
                if prev_ptr > next_ptr {
                    return Err("col_offsets must be non-decreasing".into());
                }
                if *prev_ptr < 0 || *next_ptr < 0 {
                    return Err("col_offsets must be non-negative".into());
                }
            }
            for (&start_i, &end_i) in col_offsets.iter().zip(col_offsets.iter().skip(1)) {
                let Ok(start) = usize::try_from(start_i) else {
                    return Err("col_offsets elements must be within [0, nnz]".into());
                };
                let Ok(end) = usize::try_from(end_i) else {
                    return Err("col_offsets elements must be within [0, nnz]".into());
                };
                if start > nnz || end > nnz {
                    return Err("col_offsets elements must be within [0, nnz]".into());
                }
                let mut prev_row = -1_i64;
                let Some(col_rows) = row_indices.get(start..end) else {
                    return Err("col_offsets elements must be within [0, nnz]".into());
                };
                for &i in col_rows {
                    let out_of_bounds = usize::try_from(i).map_or(true, |row| row >= nrows);
                    if i < 0 || out_of_bounds {
                        return Err("row index out of bounds".into());
                    }
                    if i <= prev_row {
                        return Err(
                            "row indices must be strictly increasing within each column".into()
                        );
                    }
                    prev_row = i;
                }
            }
        }
        Ok(Self {
            values,
            row_indices,
            col_offsets,
            nrows,
            ncols,
        })
    }

    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        col_offsets: Vec<i64>,
        row_indices: Vec<i64>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            values,
            row_indices,
            col_offsets,
            nrows,
            ncols,
        }
    }
}
