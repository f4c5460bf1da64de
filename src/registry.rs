//! Kernel registry for discovery, verification, and benchmark dispatch.
//!
//! One registry entry per kernel family; the CLI walks it instead of
//! hard-coding families.

use crate::utils::timer::Variant;

/// Trait every benchmarkable kernel family implements.
pub trait KernelRunner: Send + Sync {
    /// Registry name (e.g. "matvec").
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Grouping label (e.g. "math").
    fn category(&self) -> &'static str;

    /// Names of the variants available on this CPU and build.
    fn available_variants(&self) -> Vec<&'static str>;

    /// Measurement closures over freshly generated input of `size`,
    /// seeded with `seed`. Each closure performs one run and reports its
    /// own measurement; warmup, scheduling, and statistics are the
    /// caller's job (see [`crate::utils::timer::measure_variants`]).
    fn variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>>;

    /// Check every variant against the `original` reference.
    fn verify(&self) -> Result<(), String>;
}

/// Registry of all kernel families.
pub struct KernelRegistry {
    kernels: Vec<Box<dyn KernelRunner>>,
}

impl KernelRegistry {
    pub fn new() -> Self {
        Self {
            kernels: Vec::new(),
        }
    }

    pub fn register<K: KernelRunner + 'static>(&mut self, kernel: K) {
        self.kernels.push(Box::new(kernel));
    }

    pub fn all(&self) -> &[Box<dyn KernelRunner>] {
        &self.kernels
    }

    pub fn find(&self, name: &str) -> Option<&dyn KernelRunner> {
        self.kernels
            .iter()
            .find(|k| k.name() == name)
            .map(|k| k.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.kernels.iter().map(|k| k.name()).collect()
    }
}

impl Default for KernelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the registry with every kernel family in the crate.
pub fn build_registry() -> KernelRegistry {
    let mut registry = KernelRegistry::new();

    registry.register(crate::math::dot_product::DotProductRunner);
    registry.register(crate::math::matvec::MatVecRunner);

    registry
}
