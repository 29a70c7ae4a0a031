//! Fixed-length numeric buffers with statistics and a chunked parallel sum
//!
//! This crate fronts the parvec workspace:
//!
//! - [`parvec_core`] - error taxonomy, numeric traits, compute primitives,
//!   execution engines, and chunk partitioning
//! - [`parvec_buffer`] - the `NumericBuffer` type, its statistics, and the
//!   parallel reduction kernel
//!
//! # Example
//!
//! ```rust
//! use parvec::{parallel_sum, NumericBuffer};
//!
//! let mut buffer = NumericBuffer::<f64>::new(1_000_000);
//! buffer.fill_uniform(-10.0, 10.0, 42).unwrap();
//!
//! let min = buffer.min().unwrap();
//! let max = buffer.max().unwrap();
//! assert!(min < max);
//!
//! // Sequential and parallel sums agree up to accumulation order
//! let total = parallel_sum(&buffer, 4).unwrap();
//! let expected = buffer.sum().unwrap();
//! assert!((total - expected).abs() <= 1e-6 * (1.0 + expected.abs()));
//! ```

pub use parvec_buffer::{parallel_sum, parallel_sum_auto, NumericBuffer, ParallelSum};
pub use parvec_core::{
    auto_engine, default_workers, scalar_backend, scalar_parallel, scalar_parallel_with_workers,
    scalar_sequential, ChunkPlan, ComputePrimitives, Error, ExecutionEngine, ExecutionStrategy,
    Numeric, ParallelEngine, ReductionKernel, Result, ScalarBackend, SequentialEngine,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use parvec_buffer::{parallel_sum, parallel_sum_auto, NumericBuffer, ParallelSum};
    pub use parvec_core::prelude::*;
}
