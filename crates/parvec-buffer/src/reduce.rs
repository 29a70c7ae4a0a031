//! Chunked parallel sum kernel
//!
//! The kernel splits an initialized buffer into contiguous chunks via a
//! `ChunkPlan`, computes a partial sum per chunk with read-only access to
//! the buffer, and combines the partials into a shared accumulator under a
//! mutex scoped to just the combination step. The engine's batch execution
//! joins every task before returning, so no worker can outlive the call.
//!
//! Accumulation order is unspecified: the result is deterministic only up
//! to floating-point reassociation. Compare results with a tolerance, not
//! bit-exactly.

use crate::buffer::NumericBuffer;
use num_traits::Zero;
use parvec_core::{
    ChunkPlan, ComputePrimitives, ExecutionEngine, Numeric, ReductionKernel, Result,
    ScalarBackend, SequentialEngine,
};
use std::ops::Range;
use std::sync::Mutex;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use parvec_core::{default_workers, Error, ParallelEngine};

/// Parallel sum kernel, generic over the execution engine
///
/// With a `SequentialEngine` the same code runs chunk-by-chunk on the
/// calling thread, which is the reference behavior the parallel result is
/// tested against.
#[derive(Debug, Clone)]
pub struct ParallelSum<T: Numeric = f64, E: ExecutionEngine<T> = SequentialEngine<T, ScalarBackend>>
{
    engine: E,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Numeric, E: ExecutionEngine<T>> ParallelSum<T, E> {
    /// Create a new kernel running on `engine`
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sum all elements of `buffer` across `workers` chunks
    ///
    /// Fails with `InvalidWorkerCount` for `workers == 0` and with
    /// `UninitializedBuffer` for a buffer that was never filled; both are
    /// checked before any task is spawned. Zero-width chunks (possible
    /// when `workers > buffer.len()`) spawn no task.
    #[instrument(skip(self, buffer), fields(len = buffer.len(), workers = workers))]
    pub fn sum(&self, buffer: &NumericBuffer<T>, workers: usize) -> Result<T::Aggregate> {
        let plan = ChunkPlan::new(buffer.len(), workers)?;
        let data = buffer.as_slice()?;

        let ranges: Vec<Range<usize>> = plan.ranges().filter(|r| !r.is_empty()).collect();
        debug!(
            "Summing {} elements across {} tasks ({} requested workers)",
            data.len(),
            ranges.len(),
            workers
        );

        let accumulator = Mutex::new(<T::Aggregate as Zero>::zero());
        let primitives = self.engine.primitives();

        self.engine.execute_batch(ranges.len(), |i| {
            let local = primitives.sum(&data[ranges[i].clone()]);
            let mut total = accumulator.lock().unwrap_or_else(|e| e.into_inner());
            *total += local;
        });

        let total = accumulator.into_inner().unwrap_or_else(|e| e.into_inner());
        Ok(total)
    }
}

impl<T: Numeric, E: ExecutionEngine<T>> ReductionKernel<T> for ParallelSum<T, E> {
    type Primitives = E::Primitives;

    fn primitives(&self) -> &Self::Primitives {
        self.engine.primitives()
    }

    fn name(&self) -> &'static str {
        "parallel-sum"
    }
}

/// Sum `buffer` across `workers` fresh threads and return the total
///
/// Builds a dedicated thread pool of exactly `workers` threads for this
/// call; the pool is not shared with or reused by other calls. The caller
/// decides what to do with the returned scalar.
#[cfg(feature = "parallel")]
pub fn parallel_sum<T: Numeric>(
    buffer: &NumericBuffer<T>,
    workers: usize,
) -> Result<T::Aggregate> {
    // Guarded here as well: a zero must never reach the pool builder,
    // which would interpret it as "use the default thread count".
    if workers == 0 {
        return Err(Error::InvalidWorkerCount(workers));
    }
    let engine = ParallelEngine::with_num_threads(ScalarBackend::new(), workers)?;
    ParallelSum::new(engine).sum(buffer, workers)
}

/// Sum `buffer` with one worker per available CPU
#[cfg(feature = "parallel")]
pub fn parallel_sum_auto<T: Numeric>(buffer: &NumericBuffer<T>) -> Result<T::Aggregate> {
    parallel_sum(buffer, default_workers())
}
