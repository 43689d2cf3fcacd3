// mod.rs - Core formula module

pub mod jukes_cantor;
pub mod recombination;
pub mod velvet;

// Re-export main types for convenience
pub use jukes_cantor::{jukes_cantor_distance, jukes_cantor_proportion, JukesCantorDistance};
pub use recombination::{recomb_probability, MappingFunction};
pub use velvet::{estimate_assembly_memory, VelvetEstimate, VelvetParams};
