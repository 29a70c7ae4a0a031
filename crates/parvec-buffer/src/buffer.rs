//! Owned fixed-length numeric buffer
//!
//! A `NumericBuffer` owns a contiguous allocation of `len` elements whose
//! length never changes after construction. The buffer starts
//! uninitialized; the only transition is the one-way move to initialized
//! via a whole-buffer fill (`fill`, `fill_uniform`) or wholesale
//! construction (`from_slice`). There is no partial-initialization
//! tracking: until the flag flips, every read-type operation fails with
//! `UninitializedBuffer`, and per-index writes are rejected as well since
//! they are not an initialization path.

use parvec_core::{Error, Numeric, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

/// Owned, fixed-length sequence of numeric values
#[derive(Debug, Clone, PartialEq)]
pub struct NumericBuffer<T: Numeric = f64> {
    data: Vec<T>,
    initialized: bool,
}

impl<T: Numeric> NumericBuffer<T> {
    /// Allocate a buffer of `len` elements, uninitialized
    ///
    /// The backing store is zeroed but not considered data until one of
    /// the fill operations runs.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![<T as Numeric>::zero(); len],
            initialized: false,
        }
    }

    /// Construct an initialized buffer from existing values
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            data: values.to_vec(),
            initialized: true,
        }
    }

    /// Fill every element with `value` and mark the buffer initialized
    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|x| *x = value);
        self.initialized = true;
    }

    /// Fill with uniform-random values in `[min, max)` and mark initialized
    ///
    /// The seed is injected by the caller so fills are reproducible; equal
    /// seeds produce identical buffers.
    pub fn fill_uniform(&mut self, min: T, max: T, seed: u64) -> Result<()> {
        let lo = min.to_f64();
        let hi = max.to_f64();
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(Error::invalid_range(lo, hi));
        }

        let dist = Uniform::new(lo, hi);
        let mut rng = StdRng::seed_from_u64(seed);
        for x in self.data.iter_mut() {
            *x = T::from_f64(dist.sample(&mut rng));
        }
        self.initialized = true;
        Ok(())
    }

    /// Number of elements (immutable after construction)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for zero-length buffers
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether any fill has run yet
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Borrow the elements for read-only access
    ///
    /// This is the single gate every read-type operation goes through;
    /// it fails with `UninitializedBuffer` until a fill has run.
    pub fn as_slice(&self) -> Result<&[T]> {
        if !self.initialized {
            return Err(Error::UninitializedBuffer);
        }
        Ok(&self.data)
    }

    /// Read the element at `index`, bounds-checked
    pub fn get(&self, index: usize) -> Result<T> {
        let data = self.as_slice()?;
        data.get(index)
            .copied()
            .ok_or_else(|| Error::index_out_of_range(index, data.len()))
    }

    /// Write the element at `index`, bounds-checked
    ///
    /// Requires an initialized buffer: single-element writes do not count
    /// as initialization.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        if !self.initialized {
            return Err(Error::UninitializedBuffer);
        }
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::index_out_of_range(index, len)),
        }
    }
}
