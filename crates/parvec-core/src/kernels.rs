//! Kernel trait definitions
//!
//! Kernels use the primitive operations to implement their computational
//! patterns over buffers. This module only defines the trait; concrete
//! kernels live in the crates that own the data types they reduce.

use crate::{primitives::ComputePrimitives, Numeric};

/// Base trait for all reduction kernels
///
/// This trait provides common functionality that all kernels share.
pub trait ReductionKernel<T: Numeric = f64>: Clone + Send + Sync {
    /// The type of primitives used by this kernel
    type Primitives: ComputePrimitives<T>;

    /// Get the primitives used by this kernel
    fn primitives(&self) -> &Self::Primitives;

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
