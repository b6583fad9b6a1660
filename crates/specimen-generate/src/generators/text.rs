use chrono::{NaiveDate, NaiveTime};
use rand::{Rng, RngCore};

use specimen_core::{OptionSpec, TypeDescriptor};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry, pick};
use crate::options::OptionBag;
use crate::tables::{SENTENCE_OBJECTS, SENTENCE_SUBJECTS, SENTENCE_VERBS, TEXT_WORDS};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(DatetimeGenerator));
    registry.register_generator(Box::new(SentenceGenerator));
    registry.register_generator(Box::new(ParagraphGenerator));
}

struct DatetimeGenerator;

impl Generator for DatetimeGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "datetime",
            name: "DateTime",
            icon: "🕐",
            category: "time_text",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::checkbox("include_date", "Date (dd/mm/yyyy)", true),
                OptionSpec::checkbox("include_time", "Time (hh:mm:ss)", true),
                OptionSpec::checkbox("include_timezone", "Timezone (Z)", false),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let include_date = options.bool_or("include_date", true)?;
        let include_time = options.bool_or("include_time", true)?;
        let include_timezone = options.bool_or("include_timezone", false)?;

        let mut parts: Vec<String> = Vec::with_capacity(3);
        if include_date {
            // Day stays within 1..=28 so every month is valid.
            let date = NaiveDate::from_ymd_opt(
                rng.random_range(2020..=2025),
                rng.random_range(1..=12),
                rng.random_range(1..=28),
            )
            .unwrap_or_default();
            parts.push(date.format("%d/%m/%Y").to_string());
        }
        if include_time {
            let time = NaiveTime::from_hms_opt(
                rng.random_range(0..=23),
                rng.random_range(0..=59),
                rng.random_range(0..=59),
            )
            .unwrap_or_default();
            parts.push(time.format("%H:%M:%S").to_string());
        }
        if include_timezone {
            parts.push("Z".to_string());
        }
        Ok(parts.join(" "))
    }
}

struct SentenceGenerator;

impl Generator for SentenceGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "sentence",
            name: "Sentence",
            icon: "📚",
            category: "time_text",
            supports_prefix_suffix: false,
            options: vec![OptionSpec::checkbox(
                "grammatically_valid",
                "Grammatically valid",
                true,
            )],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        if options.bool_or("grammatically_valid", true)? {
            return Ok(grammatical_sentence(rng));
        }

        let count = rng.random_range(5..=12_usize);
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            words.push(pick(TEXT_WORDS, rng).unwrap_or("data"));
        }
        let sentence = words.join(" ");
        let mut chars = sentence.chars();
        match chars.next() {
            Some(first) => Ok(format!("{}{}.", first.to_uppercase(), chars.as_str())),
            None => Ok(".".to_string()),
        }
    }
}

fn grammatical_sentence(rng: &mut dyn RngCore) -> String {
    let subject = pick(SENTENCE_SUBJECTS, rng).unwrap_or("A dedicated team");
    let verb = pick(SENTENCE_VERBS, rng).unwrap_or("builds");
    let object = pick(SENTENCE_OBJECTS, rng).unwrap_or("powerful solutions");
    format!("{subject} {verb} {object}.")
}

struct ParagraphGenerator;

impl Generator for ParagraphGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "paragraph",
            name: "Paragraph",
            icon: "📖",
            category: "time_text",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::bounded_number("min_sentences", "Min sentences", 3, 1, 10),
                OptionSpec::bounded_number("max_sentences", "Max sentences", 6, 1, 20),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let min = options.u64_or("min_sentences", 3)? as usize;
        let max = options.u64_or("max_sentences", 6)? as usize;
        if min > max {
            return Err(GenerationError::InvalidOption(
                "option 'min_sentences' must be <= 'max_sentences'".to_string(),
            ));
        }

        let count = rng.random_range(min..=max);
        let mut sentences = Vec::with_capacity(count);
        for _ in 0..count {
            sentences.push(grammatical_sentence(rng));
        }
        Ok(sentences.join(" "))
    }
}
