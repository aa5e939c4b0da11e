//! Random array generator.
//!
//! [`RandomArrayGenerator`] allocates a dense array, fills it with uniform
//! variates in [0, 1), runs its [`Workload`] and hands the array to the
//! caller. Each call allocates a fresh array; nothing is cached between
//! calls.

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, GeneratorResult};
use crate::rng::ArrayRng;
use crate::types::{Array, Layout, Shape};
use crate::workload::Workload;
use tracing::{debug, info};

/// Generates random arrays and blocks for a fixed workload before returning.
///
/// # Examples
///
/// ```rust
/// use array_core::generator::RandomArrayGenerator;
/// use array_core::types::Layout;
/// use array_core::workload::Workload;
///
/// let mut generator = RandomArrayGenerator::with_layout(Layout::Square)
///     .workload(Workload::Idle);
///
/// let array = generator.generate(3).unwrap();
/// assert_eq!(array.dim(), (3, 3));
/// ```
#[derive(Debug)]
pub struct RandomArrayGenerator {
    layout: Layout,
    workload: Workload,
    rng: ArrayRng,
}

impl RandomArrayGenerator {
    /// Creates a generator from configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            layout: config.layout,
            workload: config.workload(),
            rng: ArrayRng::from_optional_seed(config.seed),
        }
    }

    /// Entropy-seeded generator with the default 5 second workload.
    pub fn with_layout(layout: Layout) -> Self {
        Self::new(GeneratorConfig::with_layout(layout))
    }

    /// Replaces the workload.
    pub fn workload(mut self, workload: Workload) -> Self {
        self.workload = workload;
        self
    }

    /// Replaces the RNG with one seeded from `seed`.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = ArrayRng::from_seed(seed);
        self
    }

    /// Configured layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Configured workload.
    pub fn current_workload(&self) -> Workload {
        self.workload
    }

    /// Seed of the underlying RNG, if any.
    pub fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }

    /// Shape that [`generate`](Self::generate) would produce for `size`.
    pub fn shape_for(&self, size: usize) -> GeneratorResult<Shape> {
        Shape::for_size(size, self.layout)
    }

    /// Generates a `size`-row array of uniform variates in [0, 1).
    ///
    /// Blocks the calling thread for the configured workload after the
    /// array is filled, regardless of `size`.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidArgument`] if `size == 0`
    /// - [`GeneratorError::ResourceExhausted`] if the element count overflows
    ///   or the buffer cannot be allocated
    pub fn generate(&mut self, size: usize) -> GeneratorResult<Array> {
        info!(size, layout = %self.layout, "Starting heavy computation");

        let shape = self.shape_for(size)?;
        let array = self.allocate(shape)?;
        info!(shape = %shape, "Array allocated");

        debug!(delay = ?self.workload.duration(), "Running workload");
        self.workload.run();

        info!(shape = %shape, "Heavy computation complete");
        Ok(array)
    }

    fn allocate(&mut self, shape: Shape) -> GeneratorResult<Array> {
        let len = shape.len()?;

        let mut data: Vec<f64> = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| GeneratorError::ResourceExhausted {
                rows: shape.rows,
                cols: shape.cols,
            })?;
        data.resize(len, 0.0);
        self.rng.fill_uniform(&mut data);

        Ok(Array::from_shape_vec(shape.dim(), data)?)
    }
}

/// Generates a `(size, size)` array with a fresh entropy-seeded generator
/// and the default 5 second workload.
pub fn generate_square(size: usize) -> GeneratorResult<Array> {
    RandomArrayGenerator::with_layout(Layout::Square).generate(size)
}

/// Generates a `(size, 2)` array with a fresh entropy-seeded generator
/// and the default 5 second workload.
pub fn generate_two_column(size: usize) -> GeneratorResult<Array> {
    RandomArrayGenerator::with_layout(Layout::TwoColumn).generate(size)
}
