//! Index conversions shared by the kernels

/// Convert i64 to usize, asserting non-negativity.
#[inline]
#[must_use]
pub fn i64_to_usize(x: i64) -> usize {
    debug_assert!(x >= 0);
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    {
        x as usize
    }
}

/// Convert usize to i64 with debug assertions for range validity.
#[inline]
#[must_use]
pub fn usize_to_i64(x: usize) -> i64 {
    debug_assert!(i64::try_from(x).is_ok());
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    {
        x as i64
    }
}
