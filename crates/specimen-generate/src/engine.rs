use rand::RngCore;
use tracing::debug;

use specimen_core::{CATEGORIES, TypeDescriptor};

use crate::decorate::apply_prefix_suffix;
use crate::errors::GenerationError;
use crate::generators::GeneratorRegistry;
use crate::model::{BatchRequest, CategoryListing, TypeSummary};
use crate::options::OptionBag;

/// Batch façade over the generator registry: resolves the type, runs the
/// requested number of draws, and applies prefix/suffix decoration where the
/// type supports it.
pub struct GenerationEngine {
    registry: GeneratorRegistry,
}

impl GenerationEngine {
    pub fn new() -> Self {
        Self {
            registry: GeneratorRegistry::new(),
        }
    }

    /// Engine over a caller-assembled registry, e.g. one extended before
    /// first use.
    pub fn with_registry(registry: GeneratorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Generates the batch with the process-wide random source.
    pub fn generate_batch(&self, request: &BatchRequest) -> Result<Vec<String>, GenerationError> {
        let mut rng = rand::rng();
        self.generate_batch_with(request, &mut rng)
    }

    /// Same as [`GenerationEngine::generate_batch`] with a caller-supplied
    /// random source; a seeded source makes the batch deterministic.
    pub fn generate_batch_with(
        &self,
        request: &BatchRequest,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, GenerationError> {
        let descriptor = self.registry.resolve(&request.type_id)?;
        let generator = self.registry.generator(&request.type_id)?;

        let prefix = request.prefix.as_deref().unwrap_or("");
        let suffix = request.suffix.as_deref().unwrap_or("");
        let decorate =
            descriptor.supports_prefix_suffix && !(prefix.is_empty() && suffix.is_empty());

        let bag = OptionBag::from_map(&request.options);
        let mut values = Vec::with_capacity(request.count);
        for _ in 0..request.count {
            let value = generator.generate(&bag, rng)?;
            if decorate {
                values.push(apply_prefix_suffix(&value, prefix, suffix));
            } else {
                values.push(value);
            }
        }

        debug!(
            type_id = %request.type_id,
            count = request.count,
            decorated = decorate,
            "generated batch"
        );
        Ok(values)
    }

    /// Catalog rows in declaration order.
    pub fn list_types(&self) -> Vec<TypeSummary> {
        self.registry
            .list_types()
            .into_iter()
            .map(TypeSummary::from)
            .collect()
    }

    /// Categories in presentation order, each with its types in declaration
    /// order.
    pub fn list_by_category(&self) -> Vec<CategoryListing> {
        let mut categories: Vec<_> = CATEGORIES.iter().collect();
        categories.sort_by_key(|category| category.order);
        categories
            .into_iter()
            .map(|category| CategoryListing {
                id: category.id,
                name: category.name,
                icon: category.icon,
                types: self
                    .registry
                    .list_by_category(category.id)
                    .into_iter()
                    .map(TypeSummary::from)
                    .collect(),
            })
            .collect()
    }

    /// Full catalog entry for one type, option specs included.
    pub fn describe_type(&self, type_id: &str) -> Result<&TypeDescriptor, GenerationError> {
        self.registry.resolve(type_id)
    }
}

impl Default for GenerationEngine {
    fn default() -> Self {
        Self::new()
    }
}
