//! Generation engine for Specimen.
//!
//! This crate holds the generator registry, the per-type generators, the
//! checksum algorithms behind structurally valid identifiers (Luhn, IMEI,
//! ISBN-10/13), and the batch façade consumed by front ends.

pub mod checksum;
pub mod decorate;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod options;
pub mod tables;

pub use decorate::apply_prefix_suffix;
pub use engine::GenerationEngine;
pub use errors::GenerationError;
pub use generators::{Generator, GeneratorRegistry};
pub use model::{BatchRequest, CategoryListing, TypeSummary};
pub use options::OptionBag;
