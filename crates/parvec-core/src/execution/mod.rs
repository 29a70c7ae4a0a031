//! Execution engines for controlling computation strategy
//!
//! This module provides the execution engine abstraction that unifies
//! primitive selection with execution strategy (sequential vs parallel).
//!
//! # Design Philosophy
//!
//! - **Unified Control**: Single type parameter controls primitives and parallelism
//! - **Zero-Cost**: All decisions made at compile time
//! - **Thread Pool Integration**: Works with Rayon's global pool or a dedicated pool
//! - **Composable**: Engines can be mixed and matched with kernels

use crate::numeric::Numeric;
use crate::primitives::ComputePrimitives;
#[cfg(feature = "parallel")]
use crate::Result;

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExecutionStrategy {
    /// Process items sequentially
    Sequential,
    /// Process items in parallel
    Parallel,
}

/// Trait for execution engines that control how computations are performed
///
/// An execution engine combines:
/// - Primitive operations (the slice-level backend)
/// - Execution strategy (sequential vs parallel)
/// - Thread pool selection (global Rayon pool vs dedicated pool)
pub trait ExecutionEngine<T: Numeric>: Clone + Send + Sync {
    /// The type of primitives used by this engine
    type Primitives: ComputePrimitives<T>;

    /// Get the primitives for low-level operations
    fn primitives(&self) -> &Self::Primitives;

    /// Execute a function in the engine's execution context
    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send;

    /// Map a function over chunks of data
    fn map_chunks<'a, U, F, R>(&self, data: &'a [U], chunk_size: usize, f: F) -> Vec<R>
    where
        U: Sync,
        F: Fn(&'a [U]) -> R + Sync + Send,
        R: Send;

    /// Execute an indexed batch of tasks, joining all of them before returning
    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send;

    /// Get the execution strategy
    fn strategy(&self) -> ExecutionStrategy;

    /// Check if parallel execution is available
    fn is_parallel(&self) -> bool {
        matches!(self.strategy(), ExecutionStrategy::Parallel)
    }

    /// Get the number of threads available
    fn num_threads(&self) -> usize;
}

/// Sequential execution engine
///
/// Executes all operations sequentially in the current thread.
#[derive(Clone, Debug)]
pub struct SequentialEngine<T: Numeric, P: ComputePrimitives<T>> {
    primitives: P,
    _phantom: std::marker::PhantomData<T>,
}

impl<T: Numeric, P: ComputePrimitives<T>> SequentialEngine<T, P> {
    /// Create a new sequential engine with the given primitives
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T: Numeric, P: ComputePrimitives<T>> ExecutionEngine<T> for SequentialEngine<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }

    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        f()
    }

    fn map_chunks<'a, U, F, R>(&self, data: &'a [U], chunk_size: usize, f: F) -> Vec<R>
    where
        U: Sync,
        F: Fn(&'a [U]) -> R + Sync + Send,
        R: Send,
    {
        data.chunks(chunk_size).map(f).collect()
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        (0..count).map(f).collect()
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Sequential
    }

    fn num_threads(&self) -> usize {
        1
    }
}

/// Parallel execution engine using Rayon
///
/// Executes operations in parallel using Rayon's thread pool. With a
/// dedicated pool the engine owns exactly that many worker threads;
/// otherwise it borrows the global pool.
#[cfg(feature = "parallel")]
#[derive(Clone, Debug)]
pub struct ParallelEngine<T: Numeric, P: ComputePrimitives<T>> {
    primitives: P,
    thread_pool: Option<std::sync::Arc<rayon::ThreadPool>>,
    _phantom: std::marker::PhantomData<T>,
}

#[cfg(feature = "parallel")]
impl<T: Numeric, P: ComputePrimitives<T>> ParallelEngine<T, P> {
    /// Create a new parallel engine with default thread pool
    pub fn new(primitives: P) -> Self {
        Self {
            primitives,
            thread_pool: None,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Create a new parallel engine with a custom thread pool
    pub fn with_thread_pool(primitives: P, pool: std::sync::Arc<rayon::ThreadPool>) -> Self {
        Self {
            primitives,
            thread_pool: Some(pool),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Create with a dedicated pool of exactly `num_threads` threads
    pub fn with_num_threads(primitives: P, num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| crate::Error::Execution(format!("Failed to create thread pool: {e}")))?;

        Ok(Self {
            primitives,
            thread_pool: Some(std::sync::Arc::new(pool)),
            _phantom: std::marker::PhantomData,
        })
    }
}

#[cfg(feature = "parallel")]
impl<T: Numeric, P: ComputePrimitives<T>> ExecutionEngine<T> for ParallelEngine<T, P> {
    type Primitives = P;

    fn primitives(&self) -> &Self::Primitives {
        &self.primitives
    }

    fn execute<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if let Some(pool) = &self.thread_pool {
            pool.install(f)
        } else {
            rayon::scope(|_| f())
        }
    }

    fn map_chunks<'a, U, F, R>(&self, data: &'a [U], chunk_size: usize, f: F) -> Vec<R>
    where
        U: Sync,
        F: Fn(&'a [U]) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        if let Some(pool) = &self.thread_pool {
            pool.install(|| data.par_chunks(chunk_size).map(f).collect())
        } else {
            data.par_chunks(chunk_size).map(f).collect()
        }
    }

    fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        use rayon::prelude::*;

        if let Some(pool) = &self.thread_pool {
            pool.install(|| (0..count).into_par_iter().map(f).collect())
        } else {
            (0..count).into_par_iter().map(f).collect()
        }
    }

    fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::Parallel
    }

    fn num_threads(&self) -> usize {
        if let Some(pool) = &self.thread_pool {
            pool.current_num_threads()
        } else {
            rayon::current_num_threads()
        }
    }
}

/// Number of workers to use when the caller does not specify one
pub fn default_workers() -> usize {
    num_cpus::get()
}

/// Create a sequential scalar engine for f64
pub fn scalar_sequential() -> SequentialEngine<f64, crate::primitives::ScalarBackend> {
    SequentialEngine::new(crate::primitives::ScalarBackend)
}

/// Create a parallel scalar engine on the global pool
#[cfg(feature = "parallel")]
pub fn scalar_parallel() -> ParallelEngine<f64, crate::primitives::ScalarBackend> {
    ParallelEngine::new(crate::primitives::ScalarBackend)
}

/// Create a parallel scalar engine with a dedicated pool of `workers` threads
///
/// The pool is created fresh for this engine and torn down when the last
/// clone of the engine is dropped.
#[cfg(feature = "parallel")]
pub fn scalar_parallel_with_workers(
    workers: usize,
) -> Result<ParallelEngine<f64, crate::primitives::ScalarBackend>> {
    ParallelEngine::with_num_threads(crate::primitives::ScalarBackend, workers)
}

/// Create an auto-selected engine based on available features
pub fn auto_engine() -> impl ExecutionEngine<f64> {
    #[cfg(feature = "parallel")]
    {
        scalar_parallel()
    }
    #[cfg(not(feature = "parallel"))]
    {
        scalar_sequential()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_engine() {
        let engine = scalar_sequential();

        // Test execute
        let result = engine.execute(|| 42);
        assert_eq!(result, 42);

        // Test map_chunks
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let sums = engine.map_chunks(&data, 2, |chunk| chunk.iter().sum::<f64>());
        assert_eq!(sums, vec![3.0, 7.0, 11.0]);

        // Test execute_batch
        let squares = engine.execute_batch(5, |i| i * i);
        assert_eq!(squares, vec![0, 1, 4, 9, 16]);

        assert_eq!(engine.strategy(), ExecutionStrategy::Sequential);
        assert_eq!(engine.num_threads(), 1);
        assert!(!engine.is_parallel());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_engine() {
        let engine = scalar_parallel();

        // Test parallel execution
        let data: Vec<i32> = (0..1000).collect();
        let sum = engine.execute(|| {
            use rayon::prelude::*;
            data.par_iter().sum::<i32>()
        });
        assert_eq!(sum, 499500);

        // Test map_chunks
        let data = vec![1.0; 100];
        let sums = engine.map_chunks(&data, 25, |chunk| chunk.iter().sum::<f64>());
        assert_eq!(sums, vec![25.0, 25.0, 25.0, 25.0]);

        assert_eq!(engine.strategy(), ExecutionStrategy::Parallel);
        assert!(engine.num_threads() > 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_dedicated_pool_thread_count() {
        let engine = scalar_parallel_with_workers(3).unwrap();
        assert_eq!(engine.num_threads(), 3);

        // Batch results keep index order even when execution is parallel
        let results = engine.execute_batch(8, |i| i * 10);
        assert_eq!(results, vec![0, 10, 20, 30, 40, 50, 60, 70]);
    }

    #[test]
    fn test_auto_engine() {
        let engine = auto_engine();
        assert!(engine.num_threads() > 0);

        let data = [1.0, 2.0, 3.0, 4.0];
        let result = engine.execute(|| data.iter().sum::<f64>());
        assert_eq!(result, 10.0);
    }

    #[test]
    fn test_default_workers() {
        assert!(default_workers() >= 1);
    }
}
