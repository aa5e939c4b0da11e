//! # Array Worker (Layer 2: Background Execution)
//!
//! Runs [`RandomArrayGenerator`](array_core::RandomArrayGenerator) tasks on
//! a dedicated thread so the submitting thread can carry on while the
//! blocking workload runs.
//!
//! - [`ComputeWorker`]: owns the worker thread and its generator
//! - [`TaskHandle`]: per-task reply channel
//! - [`WorkerError`]: submission and execution failures
//!
//! ## Usage Example
//!
//! ```rust
//! use array_core::config::GeneratorConfig;
//! use array_worker::ComputeWorker;
//!
//! let config = GeneratorConfig { delay_ms: 0, ..GeneratorConfig::default() };
//! let mut worker = ComputeWorker::spawn(config).unwrap();
//!
//! let handle = worker.submit_generate(4).unwrap();
//! // ... other work on this thread ...
//! let array = handle.wait().unwrap();
//! assert_eq!(array.dim(), (4, 4));
//!
//! worker.stop().unwrap();
//! ```

#![deny(missing_docs)]

mod error;
mod worker;

pub use error::{WorkerError, WorkerResult};
pub use worker::{ComputeWorker, Task, TaskHandle};
