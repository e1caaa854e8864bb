//! Core data structures for the ccsmm sparse multiplication engine (pure Rust)

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod ccs;
pub mod dense;
pub mod error;

pub use ccs::Ccs;
pub use dense::DenseView;
pub use error::EngineError;
