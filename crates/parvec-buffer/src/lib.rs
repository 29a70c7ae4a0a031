//! Fixed-length numeric buffer with statistics and a chunked parallel sum
//!
//! This crate provides the `NumericBuffer` data type and the reduction
//! kernel that sums it across worker chunks.
//!
//! # Overview
//!
//! A buffer is created with a declared length and stays uninitialized
//! until a whole-buffer fill runs; every read-type operation on an
//! uninitialized buffer fails with a typed error. The parallel sum splits
//! the buffer into contiguous chunks (sizes differing by at most one),
//! sums each chunk with read-only access, and combines partial sums under
//! a mutex scoped to the accumulator update.
//!
//! # Examples
//!
//! ```rust
//! use parvec_buffer::NumericBuffer;
//!
//! let mut buffer = NumericBuffer::<f64>::new(1000);
//! buffer.fill_uniform(-10.0, 10.0, 42).unwrap();
//!
//! let mean = buffer.mean().unwrap();
//! assert!(mean.abs() < 1.0);
//! ```
//!
//! With the `parallel` feature, the sum runs on a dedicated pool of
//! exactly the requested number of worker threads:
//!
//! ```rust
//! # #[cfg(feature = "parallel")]
//! # {
//! use parvec_buffer::{parallel_sum, NumericBuffer};
//!
//! let mut buffer = NumericBuffer::<f64>::new(1_000_000);
//! buffer.fill(1.0);
//!
//! let total = parallel_sum(&buffer, 4).unwrap();
//! assert!((total - 1_000_000.0).abs() < 1e-3);
//! # }
//! ```

pub mod buffer;
pub mod reduce;
pub mod stats;

pub use buffer::NumericBuffer;
pub use reduce::ParallelSum;

#[cfg(feature = "parallel")]
pub use reduce::{parallel_sum, parallel_sum_auto};
