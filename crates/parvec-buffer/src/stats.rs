//! Read-type statistics over initialized buffers
//!
//! Every operation here goes through `NumericBuffer::as_slice`, so all of
//! them fail with `UninitializedBuffer` until a fill has run. The slice
//! work itself is delegated to `ComputePrimitives` rather than re-looped
//! per operation.

use crate::buffer::NumericBuffer;
use num_traits::Float;
use parvec_core::{scalar_backend, ComputePrimitives, Error, Numeric, Result};

impl<T: Numeric> NumericBuffer<T> {
    /// Smallest element
    pub fn min(&self) -> Result<T> {
        let data = self.as_slice()?;
        let idx = scalar_backend()
            .argmin(data)
            .ok_or_else(|| Error::empty_input("min"))?;
        Ok(data[idx])
    }

    /// Largest element
    pub fn max(&self) -> Result<T> {
        let data = self.as_slice()?;
        let idx = scalar_backend()
            .argmax(data)
            .ok_or_else(|| Error::empty_input("max"))?;
        Ok(data[idx])
    }

    /// Index of the smallest element
    pub fn argmin(&self) -> Result<usize> {
        let data = self.as_slice()?;
        scalar_backend()
            .argmin(data)
            .ok_or_else(|| Error::empty_input("argmin"))
    }

    /// Index of the largest element
    pub fn argmax(&self) -> Result<usize> {
        let data = self.as_slice()?;
        scalar_backend()
            .argmax(data)
            .ok_or_else(|| Error::empty_input("argmax"))
    }

    /// Sequential sum of all elements
    pub fn sum(&self) -> Result<T::Aggregate> {
        Ok(scalar_backend().sum(self.as_slice()?))
    }

    /// Arithmetic mean
    pub fn mean(&self) -> Result<T::Float> {
        Ok(scalar_backend().mean(self.as_slice()?))
    }

    /// Euclidean (L2) norm
    pub fn euclidean_norm(&self) -> Result<T::Float> {
        Ok(scalar_backend().sum_of_squares(self.as_slice()?).sqrt())
    }

    /// Manhattan (L1) norm
    pub fn manhattan_norm(&self) -> Result<T::Aggregate> {
        Ok(scalar_backend().abs_sum(self.as_slice()?))
    }

    /// Dot product with another buffer of the same length
    pub fn dot(&self, other: &NumericBuffer<T>) -> Result<T::Aggregate> {
        let a = self.as_slice()?;
        let b = other.as_slice()?;
        if a.len() != b.len() {
            return Err(Error::size_mismatch(a.len(), b.len(), "dot product"));
        }
        Ok(scalar_backend().dot_product(a, b))
    }
}
