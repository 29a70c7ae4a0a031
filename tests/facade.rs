//! End-to-end exercise of the facade crate
//!
//! Drives the full stack the way a consumer would: seeded fills, buffer
//! statistics, and the parallel sum on a dedicated pool, with tracing
//! wired to a subscriber so kernel debug events have somewhere to go.

use approx::assert_relative_eq;
use parvec::{parallel_sum, ChunkPlan, NumericBuffer, ParallelSum};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

#[test]
fn test_seeded_pipeline_end_to_end() -> anyhow::Result<()> {
    init_tracing();

    let mut buffer = NumericBuffer::<f64>::new(100_000);
    buffer.fill_uniform(-10.0, 10.0, 42)?;

    let min = buffer.min()?;
    let max = buffer.max()?;
    assert!(min < max);
    assert!((-10.0..10.0).contains(&min));
    assert!((-10.0..10.0).contains(&max));

    let expected = buffer.sum()?;
    let total = parallel_sum(&buffer, 4)?;
    assert_relative_eq!(total, expected, epsilon = 1e-9, max_relative = 1e-9);

    Ok(())
}

#[test]
fn test_plan_matches_kernel_partitioning() {
    init_tracing();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let data: Vec<f64> = (0..1009).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let buffer = NumericBuffer::from_slice(&data);

    // Summing each planned chunk by hand gives the same total the kernel
    // reports
    let plan = ChunkPlan::new(data.len(), 5).unwrap();
    let by_hand: f64 = plan
        .ranges()
        .map(|r| data[r].iter().sum::<f64>())
        .sum();

    let kernel = ParallelSum::new(parvec::scalar_sequential());
    let total = kernel.sum(&buffer, 5).unwrap();
    assert_relative_eq!(total, by_hand, epsilon = 1e-12, max_relative = 1e-12);
}

#[test]
fn test_errors_surface_through_facade() {
    init_tracing();

    let buffer = NumericBuffer::<f64>::new(8);
    let err = parallel_sum(&buffer, 4).unwrap_err();
    assert_eq!(err.to_string(), "Buffer is not initialized");

    let initialized = NumericBuffer::from_slice(&[1.0]);
    let err = parallel_sum(&initialized, 0).unwrap_err();
    assert!(err.to_string().contains("Invalid worker count"));
}
