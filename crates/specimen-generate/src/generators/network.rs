use rand::{Rng, RngCore};

use specimen_core::{OptionSpec, SelectValue, TypeDescriptor};

use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorRegistry, pick};
use crate::options::OptionBag;
use crate::tables::{URL_DOMAINS, URL_PATHS};

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(IpGenerator));
    registry.register_generator(Box::new(UrlGenerator));
}

struct IpGenerator;

impl Generator for IpGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        const VERSIONS: &[SelectValue] = &[
            SelectValue::new("ipv4", "IPv4"),
            SelectValue::new("ipv6", "IPv6"),
        ];
        TypeDescriptor {
            type_id: "ip",
            name: "IP Address",
            icon: "🌐",
            category: "network_web",
            supports_prefix_suffix: true,
            options: vec![OptionSpec::radio("version", "IP Version", VERSIONS, "ipv4")],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        if options.str_or("version", "ipv4")? == "ipv6" {
            let groups: Vec<String> = (0..8)
                .map(|_| format!("{:x}", rng.random_range(0..=0xffff_u32)))
                .collect();
            Ok(groups.join(":"))
        } else {
            // First octet starts at 1 to stay out of the reserved 0.x block.
            Ok(format!(
                "{}.{}.{}.{}",
                rng.random_range(1..=255_u32),
                rng.random_range(0..=255_u32),
                rng.random_range(0..=255_u32),
                rng.random_range(0..=255_u32)
            ))
        }
    }
}

struct UrlGenerator;

impl Generator for UrlGenerator {
    fn descriptor(&self) -> TypeDescriptor {
        const EXTENSIONS: &[SelectValue] = &[
            SelectValue::new("com", ".com"),
            SelectValue::new("net", ".net"),
            SelectValue::new("org", ".org"),
            SelectValue::new("io", ".io"),
            SelectValue::new("test", ".test"),
            SelectValue::new("co", ".co"),
        ];
        const PROTOCOLS: &[SelectValue] = &[
            SelectValue::new("https", "https"),
            SelectValue::new("http", "http"),
        ];
        TypeDescriptor {
            type_id: "url",
            name: "URL",
            icon: "🔗",
            category: "network_web",
            supports_prefix_suffix: false,
            options: vec![
                OptionSpec::text("domain", "Domain", "e.g., google"),
                OptionSpec::select("extension", "Extension", EXTENSIONS, "com"),
                OptionSpec::radio("protocol", "Protocol", PROTOCOLS, "https"),
            ],
        }
    }

    fn generate(
        &self,
        options: &OptionBag<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let protocol = options.str_or("protocol", "https")?;
        let extension = options.str_or("extension", "com")?;
        let domain = match options.str_opt("domain")?.filter(|value| !value.is_empty()) {
            Some(domain) => domain,
            None => pick(URL_DOMAINS, rng).unwrap_or("example"),
        };
        let path = pick(URL_PATHS, rng).unwrap_or("about");
        Ok(format!("{protocol}://{domain}.{extension}/{path}"))
    }
}
