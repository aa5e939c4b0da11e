//! # Array Core (Layer 1: Generator Kernel)
//!
//! ## Layer 1 Role
//!
//! array_core produces dense two-dimensional arrays of uniform random
//! variates and runs a blocking workload stage that stands in for heavy
//! computation:
//! - [`generator::RandomArrayGenerator`]: allocate, fill, block, return
//! - [`rng::ArrayRng`]: seedable PRNG with zero-allocation batch fill
//! - [`workload::Workload`]: the blocking delay (5 seconds by default)
//! - [`config::GeneratorConfig`]: TOML/environment configuration
//!
//! ## Usage Example
//!
//! ```rust
//! use array_core::config::GeneratorConfig;
//! use array_core::generator::RandomArrayGenerator;
//! use array_core::types::Layout;
//!
//! let config = GeneratorConfig {
//!     layout: Layout::TwoColumn,
//!     delay_ms: 0,
//!     seed: Some(7),
//! };
//! let mut generator = RandomArrayGenerator::new(config);
//!
//! let array = generator.generate(3).unwrap();
//! assert_eq!(array.dim(), (3, 2));
//! assert!(array.iter().all(|&v| (0.0..1.0).contains(&v)));
//! ```
//!
//! ## Error Model
//!
//! - `size == 0` is rejected with [`GeneratorError::InvalidArgument`]
//! - Element counts that overflow or cannot be allocated surface as
//!   [`GeneratorError::ResourceExhausted`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod generator;
pub mod rng;
pub mod types;
pub mod workload;

pub use error::{GeneratorError, GeneratorResult};
pub use generator::{generate_square, generate_two_column, RandomArrayGenerator};
pub use types::{Array, Layout, Shape};
pub use workload::Workload;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
