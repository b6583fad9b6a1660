//! Core contracts for Specimen.
//!
//! This crate defines the catalog types shared between the generation engine
//! and its front ends: type descriptors, option specs, and the category
//! table. It carries no generation logic.

pub mod catalog;
pub mod category;

pub use catalog::{OptionDefault, OptionKind, OptionSpec, SelectValue, TypeDescriptor};
pub use category::{CATEGORIES, Category, category};
