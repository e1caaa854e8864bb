//! Read-only typed view over a caller-owned dense row-major buffer

use crate::error::EngineError;

/// Dense matrix view: row-major, explicit dimensions, validated once at
/// construction and never re-interpreted afterwards.
#[derive(Debug, Clone, Copy)]
pub struct DenseView<'a> {
    data: &'a [f64],
    nrows: usize,
    ncols: usize,
}

impl<'a> DenseView<'a> {
    /// Wrap a caller-owned buffer. Requires `nrows * ncols == data.len()`;
    /// all-zero and zero-dimension matrices are valid.
    #[inline]
    pub fn new(data: &'a [f64], nrows: usize, ncols: usize) -> Result<Self, EngineError> {
        let expected = nrows.checked_mul(ncols);
        if expected != Some(data.len()) {
            return Err(EngineError::BufferSizeMismatch {
                nrows,
                ncols,
                len: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    #[inline]
    #[must_use]
    pub const fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    #[must_use]
    pub const fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'a [f64] {
        self.data
    }

    /// Element at row `i`, column `j`. Bounds were established by `new`.
    #[inline]
    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nrows && j < self.ncols);
        self.data[i * self.ncols + j]
    }
}
