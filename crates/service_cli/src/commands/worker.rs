//! Worker command: generate arrays on a background thread.
//!
//! Submits every task up front, keeps the main thread busy while the worker
//! runs them, then collects the results in submission order.

use super::summarise;
use crate::Result;
use array_core::config::GeneratorConfig;
use array_worker::ComputeWorker;
use std::time::Instant;
use tracing::info;

/// Runs the worker command.
pub fn run(config: &GeneratorConfig, size: usize, tasks: usize) -> Result<()> {
    let mut worker = ComputeWorker::spawn(config.clone())?;

    let start = Instant::now();
    let handles = (0..tasks)
        .map(|_| worker.submit_generate(size))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    println!(
        "Submitted {} task(s) in {:?}; continuing on the main thread",
        tasks,
        start.elapsed()
    );

    let checksum = foreground_work();
    info!(checksum, elapsed = ?start.elapsed(), "Foreground work finished");

    for (index, handle) in handles.into_iter().enumerate() {
        let array = handle.wait()?;
        let (rows, cols) = array.dim();
        match summarise(&array) {
            Some(summary) => println!(
                "task {}: shape ({}, {}) mean {:.6} after {:?}",
                index,
                rows,
                cols,
                summary.mean,
                start.elapsed()
            ),
            None => println!("task {}: shape ({}, {})", index, rows, cols),
        }
    }

    worker.stop()?;
    println!(
        "Worker completed {} task(s) in {:?}",
        worker.tasks_completed(),
        start.elapsed()
    );
    Ok(())
}

fn foreground_work() -> u64 {
    (1..=1_000_000u64).fold(1, |acc, i| acc.wrapping_mul(i | 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    fn idle() -> GeneratorConfig {
        GeneratorConfig {
            delay_ms: 0,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_run_worker() {
        assert!(run(&idle(), 4, 3).is_ok());
    }

    #[test]
    fn test_run_worker_zero_tasks() {
        assert!(run(&idle(), 4, 0).is_ok());
    }

    #[test]
    fn test_run_worker_invalid_size() {
        assert!(matches!(run(&idle(), 0, 1), Err(CliError::Worker(_))));
    }
}
