//! # matvec-bench
//!
//! Verification and micro-benchmark harness for a 16x16 worker-array
//! matrix-vector accelerator, modeled in software.
//!
//! [`accel`] models the device: 16 dot-product workers with reverse-window
//! coefficient banks and reversed wire-order results. [`stimulus`] carries
//! the deterministic window stimulus and its closed-form golden values,
//! the same numbers the hardware testbench checks against. [`math`] holds
//! the software kernel families the model is raced with, [`harness`] the
//! randomized array-vs-reference trials, and [`registry`] ties the kernel
//! families to the CLI.

pub mod accel;
pub mod harness;
pub mod math;
pub mod registry;
pub mod stimulus;
pub mod utils;

pub use utils::tui;

pub mod prelude {
    pub use crate::accel::WorkerArray;
    pub use crate::registry::{build_registry, KernelRegistry, KernelRunner};
    pub use crate::stimulus;
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn every_registered_kernel_verifies() {
        let registry = build_registry();
        for kernel in registry.all() {
            if let Err(e) = kernel.verify() {
                panic!("kernel '{}' failed verification: {}", kernel.name(), e);
            }
        }
    }

    #[test]
    fn registry_lookup_by_name() {
        let registry = build_registry();
        assert!(registry.find("dot_product").is_some());
        assert!(registry.find("matvec").is_some());
        assert!(registry.find("fft").is_none());
        assert_eq!(registry.list_names(), vec!["dot_product", "matvec"]);
    }

    #[test]
    fn closures_exist_for_every_listed_variant() {
        let registry = build_registry();
        for kernel in registry.all() {
            let listed = kernel.available_variants();
            let closures = kernel.variant_closures(crate::accel::HEIGHT, 42);
            assert_eq!(
                closures.len(),
                listed.len(),
                "kernel '{}' at the native geometry",
                kernel.name()
            );
            for closure in &closures {
                assert!(
                    listed.contains(&closure.name),
                    "unlisted variant '{}'",
                    closure.name
                );
            }
        }
    }
}
