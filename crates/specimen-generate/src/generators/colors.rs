use rand::{Rng, RngCore};

use specimen_core::{OptionSpec, TypeDescriptor};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry};
use crate::options::OptionBag;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(HexColorGenerator));
    registry.register_generator(Box::new(RgbColorGenerator));
}

struct HexColorGenerator;

impl Generator for HexColorGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "hex_color",
            name: "Hex Color",
            icon: "🎨",
            category: "colors",
            supports_prefix_suffix: false,
            options: vec![OptionSpec::checkbox("uppercase", "Uppercase", true)],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let uppercase = options.bool_or("uppercase", true)?;
        let value = format!(
            "#{:02x}{:02x}{:02x}",
            rng.random_range(0..=255_u32),
            rng.random_range(0..=255_u32),
            rng.random_range(0..=255_u32)
        );
        Ok(if uppercase { value.to_uppercase() } else { value })
    }
}

struct RgbColorGenerator;

impl Generator for RgbColorGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "rgb_color",
            name: "RGB Color",
            icon: "🌈",
            category: "colors",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::bounded_number("min_value", "Min value", 0, 0, 255),
                OptionSpec::bounded_number("max_value", "Max value", 255, 0, 255),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let min = options.i64_or("min_value", 0)?;
        let max = options.i64_or("max_value", 255)?;
        if min > max {
            return Err(GenerationError::InvalidOption(
                "option 'min_value' must be <= 'max_value'".to_string(),
            ));
        }
        let mut channel = || rng.random_range(min..=max);
        let (r, g, b) = (channel(), channel(), channel());
        Ok(format!("rgb({r}, {g}, {b})"))
    }
}
