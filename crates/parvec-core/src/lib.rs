//! Core traits and types for chunked parallel reduction
//!
//! This crate provides the foundation the buffer and kernel crates build on.
//!
//! # Architecture Overview
//!
//! The library is organized into three layers:
//!
//! 1. **Primitives** - slice-level operations behind `ComputePrimitives`
//! 2. **Execution Engines** - sequential vs parallel control
//! 3. **Partitioning** - contiguous chunk plans for reduction workers
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: All strategy decisions resolved at compile time
//! - **Composable**: Small, focused components that combine efficiently
//! - **No Hidden Allocations**: Explicit memory management throughout
//!
//! # Example
//!
//! ```rust
//! use parvec_core::{
//!     execution::{scalar_sequential, ExecutionEngine},
//!     partition::ChunkPlan,
//!     ComputePrimitives,
//! };
//!
//! let engine = scalar_sequential();
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//! let sum = engine.primitives().sum(&data);
//! assert_eq!(sum, 28.0);
//!
//! // A plan tiles the index range exactly
//! let plan = ChunkPlan::new(data.len(), 3).unwrap();
//! assert_eq!(plan.chunk_sizes(), vec![3, 2, 2]);
//! ```

pub mod error;
pub mod execution;
pub mod kernels;
pub mod numeric;
pub mod partition;
pub mod primitives;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{
    auto_engine, default_workers, scalar_sequential, ExecutionEngine, ExecutionStrategy,
    SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{scalar_parallel, scalar_parallel_with_workers, ParallelEngine};

pub use kernels::ReductionKernel;
pub use partition::ChunkPlan;
pub use primitives::{scalar_backend, ComputePrimitives, ScalarBackend};

// Numeric traits
pub use numeric::Numeric;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ChunkPlan,
        ComputePrimitives,
        ExecutionEngine,
        // Generic numeric traits
        Numeric,
        ReductionKernel,
        Result,
        // Backend types
        ScalarBackend,
    };

    pub use crate::error::Error;

    // Common engine configurations
    #[cfg(feature = "parallel")]
    pub use crate::execution::{scalar_parallel, scalar_parallel_with_workers};
    pub use crate::execution::{scalar_sequential, ExecutionStrategy, SequentialEngine};
}
