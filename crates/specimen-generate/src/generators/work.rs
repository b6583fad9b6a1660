use rand::{Rng, RngCore};

use specimen_core::{OptionSpec, SelectValue, TypeDescriptor};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry, pick};
use crate::options::OptionBag;
use crate::tables::{COMPANY_SUFFIXES, JOB_TITLES, USERNAME_ADJECTIVES};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(CompanyGenerator));
    registry.register_generator(Box::new(JobGenerator));
}

struct CompanyGenerator;

impl Generator for CompanyGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "company",
            name: "Company",
            icon: "🏢",
            category: "work_org",
            supports_prefix_suffix: false,
            options: vec![OptionSpec::text("starts_with", "Starts with", "e.g., Tech")],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let adjective = pick(USERNAME_ADJECTIVES, rng).unwrap_or("bright");
        let suffix = pick(COMPANY_SUFFIXES, rng).unwrap_or("Solutions");
        let name = format!("{} {suffix}", capitalize(adjective));

        // A requested lead-in that the name does not already contain is
        // prepended verbatim instead of filtering candidates.
        match options.str_opt("starts_with")? {
            Some(lead) if !lead.trim().is_empty() => {
                if name.to_uppercase().contains(&lead.trim().to_uppercase()) {
                    Ok(name)
                } else {
                    Ok(format!("{lead}{name}"))
                }
            }
            _ => Ok(name),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

struct JobGenerator;

impl Generator for JobGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        const SENIORITIES: &[SelectValue] = &[
            SelectValue::new("any", "Any"),
            SelectValue::new("junior", "Junior"),
            SelectValue::new("senior", "Senior"),
            SelectValue::new("lead", "Lead"),
        ];
        TypeDescriptor {
            type_id: "job",
            name: "Job Title",
            icon: "💼",
            category: "work_org",
            supports_prefix_suffix: false,
            options: vec![OptionSpec::select(
                "seniority",
                "Seniority",
                SENIORITIES,
                "any",
            )],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let seniority = options.str_or("seniority", "any")?;
        if seniority != "any" {
            let needle = seniority.to_lowercase();
            let matches: Vec<&str> = JOB_TITLES
                .iter()
                .copied()
                .filter(|title| title.to_lowercase().contains(&needle))
                .collect();
            if let Some(title) = pick(&matches, rng) {
                return Ok(title.to_string());
            }
        }
        Ok(pick(JOB_TITLES, rng).unwrap_or("Software Engineer").to_string())
    }
}
