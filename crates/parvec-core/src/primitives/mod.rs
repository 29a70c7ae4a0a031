//! Computational primitives with compile-time dispatch
//!
//! This module provides the primitive slice operations that buffer
//! statistics and reduction kernels are built from.
//!
//! # Architecture
//!
//! - Single unified `ComputePrimitives<T>` trait for all operations
//! - Concrete backend type: `ScalarBackend`
//! - Zero-cost abstractions - no heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust
//! use parvec_core::primitives::{scalar_backend, ComputePrimitives};
//!
//! let backend = scalar_backend();
//! let sum = backend.sum(&[1.0, 2.0, 3.0]);
//! assert_eq!(sum, 6.0);
//! ```

mod scalar;
pub mod traits;

pub use scalar::ScalarBackend;
pub use traits::ComputePrimitives;

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}
