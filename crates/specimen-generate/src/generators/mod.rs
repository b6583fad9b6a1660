use std::collections::HashMap;

use rand::{Rng, RngCore};
use serde_json::Value;

use specimen_core::TypeDescriptor;

use crate::errors::GenerationError;
use crate::options::OptionBag;

pub mod colors;
pub mod contact;
pub mod financial;
pub mod identifiers;
pub mod network;
pub mod text;
pub mod work;

/// One generatable data type: its catalog entry plus the draw itself.
///
/// Generators are stateless and hold no I/O; all randomness comes from the
/// caller-supplied source, so a seeded source makes a call deterministic.
pub trait Generator: Send + Sync {
    fn descriptor(&self) -> TypeDescriptor;

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError>;
}

struct Entry {
    descriptor: TypeDescriptor,
    generator: Box<dyn Generator>,
}

/// Process-wide mapping from type id to generator.
///
/// Built once at startup and read-only afterwards; `register_generator`
/// exists for assembly and for tests, not for concurrent mutation.
pub struct GeneratorRegistry {
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
}

impl GeneratorRegistry {
    /// Registry with the stock catalog installed, in catalog declaration
    /// order.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        identifiers::register(&mut registry);
        contact::register(&mut registry);
        financial::register(&mut registry);
        network::register(&mut registry);
        text::register(&mut registry);
        colors::register(&mut registry);
        work::register(&mut registry);
        registry
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn register_generator(&mut self, generator: Box<dyn Generator>) {
        let descriptor = generator.descriptor();
        let idx = self.entries.len();
        self.index.insert(descriptor.type_id, idx);
        self.entries.push(Entry {
            descriptor,
            generator,
        });
    }

    pub fn resolve(&self, type_id: &str) -> Result<&TypeDescriptor, GenerationError> {
        self.index
            .get(type_id)
            .map(|idx| &self.entries[*idx].descriptor)
            .ok_or_else(|| GenerationError::UnknownType(type_id.to_string()))
    }

    pub fn generator(&self, type_id: &str) -> Result<&dyn Generator, GenerationError> {
        self.index
            .get(type_id)
            .map(|idx| self.entries[*idx].generator.as_ref())
            .ok_or_else(|| GenerationError::UnknownType(type_id.to_string()))
    }

    /// All descriptors in declaration order.
    pub fn list_types(&self) -> Vec<&TypeDescriptor> {
        self.entries.iter().map(|entry| &entry.descriptor).collect()
    }

    /// Descriptors of one category, declaration order preserved.
    pub fn list_by_category(&self, category_id: &str) -> Vec<&TypeDescriptor> {
        self.entries
            .iter()
            .map(|entry| &entry.descriptor)
            .filter(|descriptor| descriptor.category == category_id)
            .collect()
    }

    pub fn type_ids(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(|entry| entry.descriptor.type_id)
            .collect()
    }

    /// Resolves the generator and produces a single undecorated value.
    pub fn generate_one(
        &self,
        type_id: &str,
        options: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let bag = OptionBag::new(options)?;
        self.generator(type_id)?.generate(&bag, rng)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn pick<'a>(values: &[&'a str], rng: &mut dyn RngCore) -> Option<&'a str> {
    if values.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..values.len());
    values.get(idx).copied()
}

pub(crate) fn random_digits(count: usize, rng: &mut dyn RngCore) -> Vec<u8> {
    let mut digits = Vec::with_capacity(count);
    for _ in 0..count {
        digits.push(rng.random_range(0..=9_u8));
    }
    digits
}

pub(crate) fn digits_string(digits: &[u8]) -> String {
    digits.iter().map(|digit| char::from(b'0' + *digit)).collect()
}
