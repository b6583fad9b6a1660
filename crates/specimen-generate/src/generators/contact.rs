use rand::{Rng, RngCore};

use specimen_core::{OptionSpec, SelectValue, TypeDescriptor};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry, pick};
use crate::options::OptionBag;
use crate::tables::{
    CITIES, COUNTRIES, COUNTRY_NAMES, DE_STREETS, FIRST_NAMES, FR_STREETS, FREE_MAIL_DOMAINS,
    LAST_NAMES, UK_CITIES, UK_POSTCODE_DISTRICTS, UK_STREETS, US_STATE_CODES, US_STREETS,
    USERNAME_NAMES, country,
};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(NameGenerator));
    registry.register_generator(Box::new(EmailGenerator));
    registry.register_generator(Box::new(PhoneGenerator));
    registry.register_generator(Box::new(AddressGenerator));
    registry.register_generator(Box::new(CountryGenerator));
    registry.register_generator(Box::new(CityGenerator));
    registry.register_generator(Box::new(ZipcodeGenerator));
}

fn country_select_values() -> &'static [SelectValue] {
    // Catalog advertises the full dialing-code table; built on first use.
    use std::sync::OnceLock;
    static VALUES: OnceLock<Vec<SelectValue>> = OnceLock::new();
    VALUES.get_or_init(|| {
        COUNTRIES
            .iter()
            .map(|entry| SelectValue::new(entry.code, entry.name))
            .collect()
    })
}

struct NameGenerator;

impl Generator for NameGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "name",
            name: "Name",
            icon: "👤",
            category: "contact_identity",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::text("starts_with", "Starts with", "Letter or word"),
                OptionSpec::text("ends_with", "Ends with", "Letter or word"),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let starts_with = options
            .str_opt("starts_with")?
            .map(str::trim)
            .filter(|needle| !needle.is_empty());
        let ends_with = options
            .str_opt("ends_with")?
            .map(str::trim)
            .filter(|needle| !needle.is_empty());

        if let Some(needle) = starts_with
            && let Some(candidate) = constrained_name(needle, true, rng)
        {
            return Ok(candidate);
        }
        if let Some(needle) = ends_with
            && let Some(candidate) = constrained_name(needle, false, rng)
        {
            return Ok(candidate);
        }

        // No match is a documented leniency: fall back to an unconstrained
        // random full name.
        let first = pick(FIRST_NAMES, rng).unwrap_or("James");
        let last = pick(LAST_NAMES, rng).unwrap_or("Smith");
        Ok(format!("{first} {last}"))
    }
}

fn constrained_name(needle: &str, at_start: bool, rng: &mut dyn RngCore) -> Option<String> {
    let needle = needle.to_uppercase();
    let matches = |candidate: &str| {
        let upper = candidate.to_uppercase();
        if at_start {
            upper.starts_with(&needle)
        } else {
            upper.ends_with(&needle)
        }
    };

    let mut candidates = Vec::new();
    for first in FIRST_NAMES {
        if matches(first) {
            let last = pick(LAST_NAMES, rng).unwrap_or("Smith");
            candidates.push(format!("{first} {last}"));
        }
    }
    for last in LAST_NAMES {
        if matches(last) {
            let first = pick(FIRST_NAMES, rng).unwrap_or("James");
            candidates.push(format!("{first} {last}"));
        }
    }

    if candidates.is_empty() {
        None
    } else {
        let idx = rng.random_range(0..candidates.len());
        Some(candidates.swap_remove(idx))
    }
}

struct EmailGenerator;

impl Generator for EmailGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        const EXTENSIONS: &[SelectValue] = &[
            SelectValue::new("com", ".com"),
            SelectValue::new("org", ".org"),
            SelectValue::new("net", ".net"),
            SelectValue::new("io", ".io"),
            SelectValue::new("test", ".test"),
            SelectValue::new("co", ".co"),
        ];
        TypeDescriptor {
            type_id: "email",
            name: "Email",
            icon: "📧",
            category: "contact_identity",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::text("domain", "Domain", "e.g., example"),
                OptionSpec::select("extension", "Extension", EXTENSIONS, "com"),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let name = pick(USERNAME_NAMES, rng).unwrap_or("alex");
        let local = format!("{name}{}", rng.random_range(1..=999_u32));

        let domain = options.str_opt("domain")?.filter(|value| !value.is_empty());
        let extension = options
            .str_opt("extension")?
            .filter(|value| !value.is_empty());
        match (domain, extension) {
            (Some(domain), Some(extension)) => Ok(format!("{local}@{domain}.{extension}")),
            (Some(domain), None) => Ok(format!("{local}@{domain}")),
            _ => {
                let host = pick(FREE_MAIL_DOMAINS, rng).unwrap_or("example.com");
                Ok(format!("{local}@{host}"))
            }
        }
    }
}

struct PhoneGenerator;

impl Generator for PhoneGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "phone",
            name: "Phone",
            icon: "📞",
            category: "contact_identity",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::select("country", "Country", country_select_values(), "US"),
                OptionSpec::checkbox("include_code", "Include country code", true),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let code = options.str_or("country", "US")?;
        let include_code = options.bool_or("include_code", true)?;
        let entry = country(code).unwrap_or(&COUNTRIES[0]);

        let number = match entry.code {
            "US" | "CA" => format!(
                "({}) {}-{}",
                rng.random_range(200..=999_u32),
                rng.random_range(200..=999_u32),
                rng.random_range(1000..=9999_u32)
            ),
            "IN" => rng.random_range(7_000_000_000_u64..=9_999_999_999).to_string(),
            "GB" => format!(
                "{} {} {}",
                rng.random_range(20..=99_u32),
                rng.random_range(1000..=9999_u32),
                rng.random_range(100..=999_u32)
            ),
            _ => rng.random_range(100_000_000_u64..=999_999_999).to_string(),
        };

        if include_code {
            Ok(format!("{} {number}", entry.dialing))
        } else {
            Ok(number)
        }
    }
}

struct AddressGenerator;

impl Generator for AddressGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "address",
            name: "Address",
            icon: "🏠",
            category: "contact_identity",
            supports_prefix_suffix: false,
            options: vec![OptionSpec::select(
                "country",
                "Country",
                country_select_values(),
                "US",
            )],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let code = options.str_or("country", "US")?;
        match code {
            "US" => {
                let street = pick(US_STREETS, rng).unwrap_or("Main St");
                let city = pick(&CITIES[..20], rng).unwrap_or("New York");
                let state = pick(US_STATE_CODES, rng).unwrap_or("CA");
                Ok(format!(
                    "{} {street}, {city}, {state} {}",
                    rng.random_range(100..=9999_u32),
                    rng.random_range(10_000..=99_999_u32)
                ))
            }
            "GB" | "UK" => {
                let street = pick(UK_STREETS, rng).unwrap_or("High Street");
                let city = pick(UK_CITIES, rng).unwrap_or("London");
                let district = pick(UK_POSTCODE_DISTRICTS, rng).unwrap_or("SW1A");
                Ok(format!(
                    "{} {street}, {city}, {district}",
                    rng.random_range(1..=200_u32)
                ))
            }
            _ => {
                // Generic US-like layout over the country's own street set.
                let streets = match code {
                    "DE" => DE_STREETS,
                    "FR" => FR_STREETS,
                    _ => US_STREETS,
                };
                let street = pick(streets, rng).unwrap_or("Main St");
                let city = pick(&CITIES[..10], rng).unwrap_or("New York");
                Ok(format!(
                    "{} {street}, {city} {}",
                    rng.random_range(100..=9999_u32),
                    rng.random_range(10_000..=99_999_u32)
                ))
            }
        }
    }
}

struct CountryGenerator;

impl Generator for CountryGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "country",
            name: "Country",
            icon: "🌍",
            category: "contact_identity",
            supports_prefix_suffix: false,
            options: vec![OptionSpec::text("starts_with", "Starts with", "e.g., U")],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        starts_with_pick(COUNTRY_NAMES, options.str_opt("starts_with")?, rng, "United States")
    }
}

struct CityGenerator;

impl Generator for CityGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "city",
            name: "City",
            icon: "🏙️",
            category: "contact_identity",
            supports_prefix_suffix: false,
            options: vec![OptionSpec::text("starts_with", "Starts with", "e.g., N")],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        starts_with_pick(CITIES, options.str_opt("starts_with")?, rng, "New York")
    }
}

/// Case-insensitive starts-with filter over a fixed list; no match falls
/// back to an unconstrained pick.
fn starts_with_pick(
    values: &[&str],
    starts_with: Option<&str>,
    rng: &mut dyn RngCore,
    default: &str,
) -> Result<String, GenerationError> {
    if let Some(needle) = starts_with.map(str::trim).filter(|needle| !needle.is_empty()) {
        let needle = needle.to_uppercase();
        let candidates: Vec<&str> = values
            .iter()
            .copied()
            .filter(|value| value.to_uppercase().starts_with(&needle))
            .collect();
        if let Some(value) = pick(&candidates, rng) {
            return Ok(value.to_string());
        }
    }
    Ok(pick(values, rng).unwrap_or(default).to_string())
}

struct ZipcodeGenerator;

impl Generator for ZipcodeGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "zipcode",
            name: "ZIP Code",
            icon: "📮",
            category: "contact_identity",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::number("from", "From", 10_000),
                OptionSpec::number("to", "To", 99_999),
                OptionSpec::bounded_number("length", "Length", 5, 3, 10),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let from = options.u64_or("from", 10_000)?;
        let to = options.u64_or("to", 99_999)?;
        let length = options.u64_or("length", 5)? as usize;
        if from > to {
            return Err(GenerationError::InvalidOption(
                "option 'from' must be <= 'to'".to_string(),
            ));
        }
        let value = rng.random_range(from..=to);
        Ok(format!("{value:0length$}"))
    }
}
