//! Sequential and parallel compressed-column multiplication kernels (pure Rust)

pub mod encode;
pub mod engine;
pub mod matmul;
pub mod util;

pub use encode::encode_ccs_f64_i64;
pub use engine::{
    Strategy, multiply_sparse_f64, multiply_sparse_par_f64, multiply_sparse_seq_f64,
};
pub use matmul::{matmul_ccs_f64_i64, matmul_ccs_par_f64_i64};
