//! Generic numeric trait hierarchy for type-safe buffer computing
//!
//! This module provides the type foundation for generic numeric buffers
//! across different element types (f64, f32, i32) without imposing any
//! computational infrastructure.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: Defines relationships between numeric types
//! - **No computational layer**: All computation happens through `ComputePrimitives`
//! - **Type safety**: Can't accidentally mix numeric types

use bytemuck::Pod;
use num_traits::{Float, Num};
use std::fmt::Debug;

/// Base trait for numeric types that can be stored in a buffer
pub trait Numeric: Pod + Num + Copy + PartialOrd + Debug + Send + Sync {
    /// Type used for aggregate operations (sum, dot product)
    /// This allows integer types to use f64 for aggregates to prevent overflow
    type Aggregate: Float + From<Self> + Into<f64> + Send + Sync + std::ops::AddAssign;

    /// Type used for floating-point operations (mean, norms)
    type Float: Float
        + From<Self>
        + Into<f64>
        + num_traits::Zero
        + num_traits::NumCast
        + Send
        + Sync
        + std::ops::AddAssign;

    /// Convert to floating point for statistical operations
    fn to_float(self) -> Self::Float;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;

    /// Get the zero value
    fn zero() -> Self;

    /// Get the one value
    fn one() -> Self;

    /// Convert from f64 (for creating constants)
    fn from_f64(val: f64) -> Self;

    /// Convert to f64 (for operations that need f64)
    fn to_f64(&self) -> f64;
}

// =============================================================================
// Numeric implementations for concrete types
// =============================================================================

impl Numeric for f64 {
    type Aggregate = f64;
    type Float = f64;

    fn to_float(self) -> f64 {
        self
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(val: f64) -> Self {
        val
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl Numeric for f32 {
    type Aggregate = f64; // Use f64 for better precision in aggregates
    type Float = f32;

    fn to_float(self) -> f32 {
        self
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(val: f64) -> Self {
        val as f32
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl Numeric for i32 {
    type Aggregate = f64; // Use f64 to prevent overflow
    type Float = f64;

    fn to_float(self) -> f64 {
        self as f64
    }

    fn is_finite(&self) -> bool {
        true // Integers are always finite
    }

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn from_f64(val: f64) -> Self {
        val as i32
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

// =============================================================================
// Tests
// =============================================================================
