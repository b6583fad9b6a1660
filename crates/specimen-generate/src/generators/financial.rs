use rand::{Rng, RngCore};

use specimen_core::{OptionSpec, SelectValue, TypeDescriptor};

use crate::checksum::{isbn10_check_digit, isbn13_check_digit, luhn_check_digit};
use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry, digits_string, pick, random_digits};
use crate::options::OptionBag;
use crate::tables::{CARD_BRANDS, CardPrefix, card_brand};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(CreditCardGenerator));
    registry.register_generator(Box::new(SsnGenerator));
    registry.register_generator(Box::new(BarcodeGenerator));
    registry.register_generator(Box::new(IsbnGenerator));
}

const BARCODE_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Pool the "Random" card variant resolves from.
const RANDOM_CARD_POOL: &[&str] = &["Visa", "Mastercard", "American Express"];

struct CreditCardGenerator;

impl Generator for CreditCardGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        const VARIANTS: &[SelectValue] = &[
            SelectValue::new("Visa", "Visa"),
            SelectValue::new("Mastercard", "Mastercard"),
            SelectValue::new("American Express", "AmEx"),
            SelectValue::new("Random", "Random"),
        ];
        const VALIDITY: &[SelectValue] = &[
            SelectValue::new("valid", "Valid"),
            SelectValue::new("invalid", "Invalid"),
        ];
        TypeDescriptor {
            type_id: "credit_card",
            name: "Credit Card",
            icon: "💳",
            category: "financial_sensitive",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::select("card_type", "Card variant", VARIANTS, "Random"),
                OptionSpec::radio("valid", "Valid", VALIDITY, "valid"),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let requested = options.str_or("card_type", "Random")?;
        let valid = options.str_or("valid", "valid")? == "valid";

        let name = if requested == "Random" {
            pick(RANDOM_CARD_POOL, rng).unwrap_or("Visa")
        } else {
            requested
        };
        let brand = card_brand(name).unwrap_or(&CARD_BRANDS[0]);

        let mut digits: Vec<u8> = Vec::with_capacity(brand.length);
        match brand.prefix {
            CardPrefix::Fixed(prefix) => {
                digits.extend(prefix.bytes().map(|byte| byte - b'0'));
            }
            // Drawn fresh per invocation rather than once per process.
            CardPrefix::Range(lo, hi) => {
                let prefix: u32 = rng.random_range(lo..=hi);
                digits.push((prefix / 10) as u8);
                digits.push((prefix % 10) as u8);
            }
        }
        while digits.len() < brand.length - 1 {
            digits.push(rng.random_range(0..=9_u8));
        }

        let check = luhn_check_digit(&digits);
        digits.push(if valid { check } else { (check + 1) % 10 });

        let text = digits_string(&digits);
        if brand.name == "American Express" {
            Ok(format!("{}-{}-{}", &text[..4], &text[4..10], &text[10..]))
        } else {
            Ok(group_digits(&text, 4))
        }
    }
}

fn group_digits(text: &str, group: usize) -> String {
    let mut grouped = String::with_capacity(text.len() + text.len() / group);
    for (idx, ch) in text.chars().enumerate() {
        if idx > 0 && idx % group == 0 {
            grouped.push('-');
        }
        grouped.push(ch);
    }
    grouped
}

struct SsnGenerator;

impl Generator for SsnGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        const COUNTRIES: &[SelectValue] = &[
            SelectValue::new("US", "US"),
            SelectValue::new("UK", "UK"),
            SelectValue::new("Random", "Random"),
        ];
        TypeDescriptor {
            type_id: "ssn",
            name: "SSN",
            icon: "🔢",
            category: "financial_sensitive",
            supports_prefix_suffix: false,
            options: vec![OptionSpec::select("country", "Country", COUNTRIES, "US")],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        // Anything other than UK, including "Random", takes the US template.
        match options.str_or("country", "US")? {
            "UK" => Ok(format!(
                "{} {} {}",
                rng.random_range(10..=99_u32),
                rng.random_range(100_000..=999_999_u32),
                rng.random_range(100_000..=999_999_u32)
            )),
            _ => Ok(format!(
                "{}-{}-{}",
                rng.random_range(100..=999_u32),
                rng.random_range(10..=99_u32),
                rng.random_range(1000..=9999_u32)
            )),
        }
    }
}

struct BarcodeGenerator;

impl Generator for BarcodeGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "barcode",
            name: "Barcode",
            icon: "📊",
            category: "financial_sensitive",
            supports_prefix_suffix: true,
            options: vec![
                OptionSpec::checkbox("numeric_only", "Numeric only", true),
                OptionSpec::bounded_number("length", "Length", 13, 8, 20),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let numeric_only = options.bool_or("numeric_only", true)?;
        let length = options.u64_or("length", 13)? as usize;

        if numeric_only {
            Ok(digits_string(&random_digits(length, rng)))
        } else {
            let chars: Vec<char> = BARCODE_ALPHABET.chars().collect();
            let mut value = String::with_capacity(length);
            for _ in 0..length {
                value.push(chars[rng.random_range(0..chars.len())]);
            }
            Ok(value)
        }
    }
}

struct IsbnGenerator;

impl Generator for IsbnGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        const FORMATS: &[SelectValue] = &[
            SelectValue::new("isbn10", "ISBN-10"),
            SelectValue::new("isbn13", "ISBN-13"),
        ];
        TypeDescriptor {
            type_id: "isbn",
            name: "ISBN",
            icon: "📚",
            category: "financial_sensitive",
            supports_prefix_suffix: true,
            options: vec![OptionSpec::radio("format", "Format", FORMATS, "isbn13")],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        if options.str_or("format", "isbn13")? == "isbn10" {
            let payload = random_digits(9, rng);
            let check = isbn10_check_digit(&payload);
            let check_char = if check == 10 {
                'X'
            } else {
                char::from(b'0' + check)
            };
            let text = digits_string(&payload);
            Ok(format!(
                "{}-{}-{}-{}-{check_char}",
                &text[..3],
                &text[3..4],
                &text[4..8],
                &text[8..9]
            ))
        } else {
            let mut payload = vec![9, 7, 8];
            payload.extend(random_digits(9, rng));
            let check = isbn13_check_digit(&payload);
            let text = digits_string(&payload);
            Ok(format!(
                "{}-{}-{}-{}-{check}",
                &text[..3],
                &text[3..4],
                &text[4..7],
                &text[7..12]
            ))
        }
    }
}
