// lib.rs - genformula library root

//! # genformula - Closed-form formulas for genetics and genome assembly
//!
//! A small library of stateless formulas with documented input domains,
//! plus the `genformula` command line tool that exposes them.
//!
//! ## Features
//!
//! - **Recombination mapping**: Kosambi and Haldane map distance to recombination probability
//! - **Jukes-Cantor**: corrected distance with variance, and its inverse
//! - **Velvet memory**: empirical velvetg RAM estimate with human-readable sizes
//!
//! ## Basic Usage
//!
//! ```rust
//! use genformula::prelude::*;
//!
//! let r = recomb_probability(100.0, MappingFunction::Kosambi);
//! assert!((r - 0.48201379003790845).abs() < 1e-12);
//!
//! let jc = jukes_cantor_distance(0.1, 100)?;
//! assert!((jukes_cantor_proportion(jc.distance) - 0.1).abs() < 1e-12);
//!
//! let estimate = estimate_assembly_memory(&VelvetParams {
//!     read_size: 100,
//!     genome_size_mb: 3000,
//!     num_reads_m: 30,
//!     kmer_size: 31,
//! })?;
//! assert_eq!(human_size(estimate.bytes as f64, SizeStyle::default()), "247.9GiB");
//! # Ok::<(), genformula::FormulaError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::core::{estimate_assembly_memory, VelvetEstimate, VelvetParams};
    pub use crate::core::{jukes_cantor_distance, jukes_cantor_proportion, JukesCantorDistance};
    pub use crate::core::{recomb_probability, MappingFunction};
    pub use crate::error::FormulaError;
    pub use crate::output::{human_size, OutputFormat, SizeStyle};
}

// Re-export main types at the root level for convenience
pub use crate::core::{JukesCantorDistance, MappingFunction, VelvetEstimate, VelvetParams};
pub use crate::error::FormulaError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "genformula v{} - Closed-form genetics formulas",
        VERSION
    )
}
