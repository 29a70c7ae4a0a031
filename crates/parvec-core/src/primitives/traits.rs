//! Unified generic compute primitives trait

use crate::numeric::Numeric;
use num_traits::{Float, Zero};

/// Unified trait for computational primitives with generic numeric support
///
/// This trait provides the low-level slice operations that buffer-level
/// statistics and reduction kernels are built from. Backends may override
/// any default with a specialized implementation.
pub trait ComputePrimitives<T: Numeric = f64>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Sum all elements in a slice
    fn sum(&self, data: &[T]) -> T::Aggregate {
        data.iter()
            .map(|&x| <T::Aggregate as From<T>>::from(x))
            .fold(<T::Aggregate as Zero>::zero(), |acc, x| acc + x)
    }

    /// Sum of absolute values
    fn abs_sum(&self, data: &[T]) -> T::Aggregate {
        data.iter()
            .map(|&x| <T::Aggregate as From<T>>::from(x).abs())
            .fold(<T::Aggregate as Zero>::zero(), |acc, x| acc + x)
    }

    /// Compute sum of squares
    fn sum_of_squares(&self, data: &[T]) -> T::Float {
        data.iter()
            .map(|&x| {
                let f = <T::Float as From<T>>::from(x);
                f * f
            })
            .fold(<T::Float as Zero>::zero(), |acc, x| acc + x)
    }

    /// Compute dot product of two vectors
    fn dot_product(&self, a: &[T], b: &[T]) -> T::Aggregate {
        debug_assert_eq!(a.len(), b.len(), "Operands must have same length");

        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| <T::Aggregate as From<T>>::from(x) * <T::Aggregate as From<T>>::from(y))
            .fold(<T::Aggregate as Zero>::zero(), |acc, x| acc + x)
    }

    /// Compute mean of a slice
    fn mean(&self, data: &[T]) -> T::Float {
        if data.is_empty() {
            return <T::Float as Zero>::zero();
        }
        let sum = self.sum(data);
        // Convert through f64 as intermediate step
        let sum_f64: f64 = sum.into();
        let len_f64 = data.len() as f64;
        let mean_f64 = sum_f64 / len_f64;
        // Now convert f64 to T::Float
        num_traits::NumCast::from(mean_f64).unwrap_or_else(<T::Float as Zero>::zero)
    }

    /// Find index of minimum value
    fn argmin(&self, data: &[T]) -> Option<usize> {
        data.iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
    }

    /// Find index of maximum value
    fn argmax(&self, data: &[T]) -> Option<usize> {
        data.iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
    }
}
