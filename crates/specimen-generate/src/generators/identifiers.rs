use rand::{Rng, RngCore};

use specimen_core::{OptionSpec, SelectValue, TypeDescriptor};

use crate::checksum::luhn_check_digit;
use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry, digits_string, pick, random_digits};
use crate::options::OptionBag;
use crate::tables::{USERNAME_ADJECTIVES, USERNAME_NAMES, USERNAME_NOUNS, imei_tac};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(UuidGenerator));
    registry.register_generator(Box::new(PasswordGenerator));
    registry.register_generator(Box::new(UsernameGenerator));
    registry.register_generator(Box::new(ImeiGenerator));
    registry.register_generator(Box::new(MacAddressGenerator));
}

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

struct UuidGenerator;

impl Generator for UuidGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "uuid",
            name: "UUID",
            icon: "🎲",
            category: "identifiers_security",
            supports_prefix_suffix: true,
            options: vec![
                OptionSpec::text("prefix", "Prefix", "e.g., ID_"),
                OptionSpec::text("suffix", "Suffix", "e.g., _test"),
            ],
        }
    }

    fn generate(
        &self,
        _options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let mut bytes = [0_u8; 16];
        rng.fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Ok(uuid::Uuid::from_bytes(bytes).to_string())
    }
}

struct PasswordGenerator;

impl Generator for PasswordGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            type_id: "password",
            name: "Password",
            icon: "🔐",
            category: "identifiers_security",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::checkbox("uppercase", "Uppercase (A-Z)", true),
                OptionSpec::checkbox("lowercase", "Lowercase (a-z)", true),
                OptionSpec::checkbox("numbers", "Numbers (0-9)", true),
                OptionSpec::checkbox("special", "Special (!@#$)", false),
                OptionSpec::bounded_number("length", "Length", 16, 4, 128),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let mut alphabet = String::new();
        if options.bool_or("uppercase", true)? {
            alphabet.push_str(UPPERCASE);
        }
        if options.bool_or("lowercase", true)? {
            alphabet.push_str(LOWERCASE);
        }
        if options.bool_or("numbers", true)? {
            alphabet.push_str(DIGITS);
        }
        if options.bool_or("special", false)? {
            alphabet.push_str(SPECIAL);
        }
        if alphabet.is_empty() {
            alphabet.push_str(LOWERCASE);
        }

        let length = options.u64_or("length", 16)? as usize;
        let chars: Vec<char> = alphabet.chars().collect();
        let mut value = String::with_capacity(length);
        for _ in 0..length {
            value.push(chars[rng.random_range(0..chars.len())]);
        }
        Ok(value)
    }
}

struct UsernameGenerator;

impl Generator for UsernameGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        const STYLES: &[SelectValue] = &[
            SelectValue::new("name_year", "name + year"),
            SelectValue::new("adj_noun", "adjective + noun"),
            SelectValue::new("name_random", "name + random"),
            SelectValue::new("mrx", "mrx + name"),
        ];
        TypeDescriptor {
            type_id: "username",
            name: "Username",
            icon: "🎮",
            category: "identifiers_security",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::text("prefix", "Prefix", "e.g., user_"),
                OptionSpec::select("style", "Style", STYLES, "name_year"),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let style = options.str_or("style", "name_year")?;
        let name = pick(USERNAME_NAMES, rng).unwrap_or("alex");
        let value = match style {
            "name_year" => format!("{name}{}", rng.random_range(1..=99_u32)),
            "adj_noun" => {
                let adjective = pick(USERNAME_ADJECTIVES, rng).unwrap_or("cool");
                let noun = pick(USERNAME_NOUNS, rng).unwrap_or("cat");
                format!("{adjective}_{noun}")
            }
            "name_random" => format!("{name}.{}", rng.random_range(100..=999_u32)),
            _ => format!("mrx_{name}"),
        };

        // The type-local prefix is plain concatenation, separate from the
        // engine-level prefix/suffix decorator.
        match options.str_opt("prefix")? {
            Some(prefix) => Ok(format!("{prefix}{value}")),
            None => Ok(value),
        }
    }
}

struct ImeiGenerator;

impl Generator for ImeiGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        const BRANDS: &[SelectValue] = &[
            SelectValue::new("Apple", "Apple"),
            SelectValue::new("Samsung", "Samsung"),
            SelectValue::new("Xiaomi", "Xiaomi"),
            SelectValue::new("Generic", "Generic"),
        ];
        TypeDescriptor {
            type_id: "imei",
            name: "IMEI",
            icon: "📱",
            category: "identifiers_security",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::select("brand", "Manufacturer", BRANDS, "Generic"),
                OptionSpec::checkbox("valid_checksum", "Valid checksum only", true),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let brand = options.str_or("brand", "Generic")?;
        let valid = options.bool_or("valid_checksum", true)?;

        let mut digits: Vec<u8> = Vec::with_capacity(15);
        if brand == "Generic" {
            let tac: u32 = rng.random_range(35..=86);
            digits.push((tac / 10) as u8);
            digits.push((tac % 10) as u8);
        } else {
            let tac = imei_tac(brand).unwrap_or("35");
            digits.extend(tac.bytes().map(|byte| byte - b'0'));
        }
        digits.extend(random_digits(12, rng));

        let check = luhn_check_digit(&digits);
        // Incrementing the valid check digit guarantees the checksum fails.
        digits.push(if valid { check } else { (check + 1) % 10 });
        Ok(digits_string(&digits))
    }
}

struct MacAddressGenerator;

impl Generator for MacAddressGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        const SEPARATORS: &[SelectValue] =
            &[SelectValue::new(":", ":"), SelectValue::new("-", "-")];
        TypeDescriptor {
            type_id: "mac_address",
            name: "MAC Address",
            icon: "🔌",
            category: "identifiers_security",
            supports_prefix_suffix: true,
            options: vec![
                OptionSpec::checkbox("uppercase", "Uppercase", true),
                OptionSpec::radio("separator", "Separator", SEPARATORS, ":"),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let uppercase = options.bool_or("uppercase", true)?;
        let separator = options.str_or("separator", ":")?;

        let octets: Vec<String> = (0..6)
            .map(|_| format!("{:02x}", rng.random_range(0..=255_u32)))
            .collect();
        let value = octets.join(separator);
        Ok(if uppercase { value.to_uppercase() } else { value })
    }
}
