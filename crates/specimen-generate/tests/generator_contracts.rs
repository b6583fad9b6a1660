use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use specimen_generate::checksum::luhn_is_valid;
use specimen_generate::{BatchRequest, GenerationEngine, GeneratorRegistry};

fn digit_values(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .map(|byte| byte - b'0')
        .collect()
}

#[test]
fn batch_returns_exact_count() {
    let engine = GenerationEngine::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let values = engine
        .generate_batch_with(&BatchRequest::new("uuid", 7), &mut rng)
        .expect("uuid batch");
    assert_eq!(values.len(), 7);
    for value in &values {
        assert_eq!(value.len(), 36);
        assert_eq!(value.as_bytes()[14], b'4');
    }
}

#[test]
fn credit_card_valid_mode_passes_luhn() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..200 {
        let value = registry
            .generate_one("credit_card", None, &mut rng)
            .expect("card");
        let digits = digit_values(&value);
        assert!(digits.len() == 15 || digits.len() == 16, "value: {value}");
        assert!(luhn_is_valid(&digits), "value: {value}");
    }
}

#[test]
fn credit_card_invalid_mode_fails_luhn() {
    let registry = GeneratorRegistry::new();
    let options = json!({"card_type": "Visa", "valid": "invalid"});
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..200 {
        let value = registry
            .generate_one("credit_card", Some(&options), &mut rng)
            .expect("card");
        assert!(!luhn_is_valid(&digit_values(&value)), "value: {value}");
    }
}

#[test]
fn amex_uses_its_own_grouping_and_length() {
    let registry = GeneratorRegistry::new();
    let options = json!({"card_type": "American Express"});
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..50 {
        let value = registry
            .generate_one("credit_card", Some(&options), &mut rng)
            .expect("card");
        let groups: Vec<&str> = value.split('-').collect();
        assert_eq!(groups.len(), 3, "value: {value}");
        assert_eq!(groups[0].len(), 4);
        assert_eq!(groups[1].len(), 6);
        assert_eq!(groups[2].len(), 5);
        assert!(value.starts_with("37"));
    }
}

#[test]
fn mastercard_prefix_varies_across_calls() {
    let registry = GeneratorRegistry::new();
    let options = json!({"card_type": "Mastercard"});
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut prefixes = HashSet::new();
    for _ in 0..200 {
        let value = registry
            .generate_one("credit_card", Some(&options), &mut rng)
            .expect("card");
        let digits = digit_values(&value);
        let prefix = u32::from(digits[0]) * 10 + u32::from(digits[1]);
        assert!((51..=55).contains(&prefix), "value: {value}");
        prefixes.insert(prefix);
    }
    assert!(prefixes.len() > 1, "prefix frozen at {prefixes:?}");
}

#[test]
fn imei_valid_mode_passes_luhn() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    for _ in 0..200 {
        let value = registry.generate_one("imei", None, &mut rng).expect("imei");
        let digits = digit_values(&value);
        assert_eq!(digits.len(), 15, "value: {value}");
        assert!(luhn_is_valid(&digits), "value: {value}");
    }
}

#[test]
fn imei_invalid_mode_always_fails_luhn() {
    let registry = GeneratorRegistry::new();
    let options = json!({"valid_checksum": false});
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let value = registry
            .generate_one("imei", Some(&options), &mut rng)
            .expect("imei");
        assert!(!luhn_is_valid(&digit_values(&value)), "value: {value}");
    }
}

#[test]
fn imei_brand_prefix_is_applied() {
    let registry = GeneratorRegistry::new();
    let options = json!({"brand": "Apple"});
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for _ in 0..20 {
        let value = registry
            .generate_one("imei", Some(&options), &mut rng)
            .expect("imei");
        assert!(value.starts_with("35"), "value: {value}");
    }
}

#[test]
fn isbn13_starts_with_prefix_and_checks_out() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..200 {
        let value = registry.generate_one("isbn", None, &mut rng).expect("isbn");
        assert!(value.starts_with("978"), "value: {value}");
        let digits = digit_values(&value);
        assert_eq!(digits.len(), 13, "value: {value}");
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(idx, digit)| {
                let weight = if idx % 2 == 0 { 1 } else { 3 };
                weight * u32::from(*digit)
            })
            .sum();
        assert_eq!(sum % 10, 0, "value: {value}");
    }
}

#[test]
fn isbn10_weighted_sum_is_zero_mod_eleven() {
    let registry = GeneratorRegistry::new();
    let options = json!({"format": "isbn10"});
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    for _ in 0..200 {
        let value = registry
            .generate_one("isbn", Some(&options), &mut rng)
            .expect("isbn");
        let digits: Vec<u32> = value
            .chars()
            .filter(|ch| *ch != '-')
            .map(|ch| {
                if ch == 'X' {
                    10
                } else {
                    ch.to_digit(10).expect("digit or X")
                }
            })
            .collect();
        assert_eq!(digits.len(), 10, "value: {value}");
        let sum: u32 = digits
            .iter()
            .enumerate()
            .map(|(idx, digit)| (10 - idx as u32) * digit)
            .sum();
        assert_eq!(sum % 11, 0, "value: {value}");
    }
}

#[test]
fn rgb_channels_respect_bounds() {
    let registry = GeneratorRegistry::new();
    let options = json!({"min_value": 10, "max_value": 20});
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..1000 {
        let value = registry
            .generate_one("rgb_color", Some(&options), &mut rng)
            .expect("rgb");
        let inner = value
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .expect("rgb shape");
        for channel in inner.split(", ") {
            let channel: i64 = channel.parse().expect("numeric channel");
            assert!((10..=20).contains(&channel), "value: {value}");
        }
    }
}

#[test]
fn ipv4_first_octet_is_never_zero() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    for _ in 0..10_000 {
        let value = registry.generate_one("ip", None, &mut rng).expect("ip");
        let first: u32 = value
            .split('.')
            .next()
            .and_then(|octet| octet.parse().ok())
            .expect("first octet");
        assert!(first >= 1, "value: {value}");
    }
}

#[test]
fn ipv6_has_eight_lowercase_groups() {
    let registry = GeneratorRegistry::new();
    let options = json!({"version": "ipv6"});
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    for _ in 0..100 {
        let value = registry
            .generate_one("ip", Some(&options), &mut rng)
            .expect("ip");
        let groups: Vec<&str> = value.split(':').collect();
        assert_eq!(groups.len(), 8, "value: {value}");
        for group in groups {
            assert!(!group.is_empty() && group.len() <= 4, "value: {value}");
            assert!(
                group.chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()),
                "value: {value}"
            );
        }
    }
}

#[test]
fn zipcode_is_padded_and_bounded() {
    let registry = GeneratorRegistry::new();
    let options = json!({"from": 100, "to": 200, "length": 5});
    let mut rng = ChaCha8Rng::seed_from_u64(14);
    for _ in 0..500 {
        let value = registry
            .generate_one("zipcode", Some(&options), &mut rng)
            .expect("zipcode");
        assert_eq!(value.len(), 5, "value: {value}");
        let numeric: u32 = value.parse().expect("numeric zip");
        assert!((100..=200).contains(&numeric), "value: {value}");
    }
}

#[test]
fn unknown_type_yields_no_output() {
    let engine = GenerationEngine::new();
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    let result = engine.generate_batch_with(&BatchRequest::new("bogus", 3), &mut rng);
    assert!(result.is_err());
}

#[test]
fn name_with_impossible_filter_falls_back() {
    let registry = GeneratorRegistry::new();
    let options = json!({"starts_with": "Xyzzyq"});
    let mut rng = ChaCha8Rng::seed_from_u64(16);
    for _ in 0..50 {
        let value = registry
            .generate_one("name", Some(&options), &mut rng)
            .expect("name");
        let parts: Vec<&str> = value.split(' ').collect();
        assert_eq!(parts.len(), 2, "value: {value}");
        assert!(parts.iter().all(|part| !part.is_empty()), "value: {value}");
    }
}

#[test]
fn name_filter_constrains_either_half() {
    let registry = GeneratorRegistry::new();
    let options = json!({"starts_with": "jo"});
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    for _ in 0..100 {
        let value = registry
            .generate_one("name", Some(&options), &mut rng)
            .expect("name");
        let halves: Vec<&str> = value.split(' ').collect();
        let matched = halves
            .iter()
            .any(|half| half.to_uppercase().starts_with("JO"));
        assert!(matched, "value: {value}");
    }
}

#[test]
fn password_uses_only_enabled_classes() {
    let registry = GeneratorRegistry::new();
    let options = json!({"uppercase": false, "numbers": false, "length": 64});
    let mut rng = ChaCha8Rng::seed_from_u64(18);
    let value = registry
        .generate_one("password", Some(&options), &mut rng)
        .expect("password");
    assert_eq!(value.len(), 64);
    assert!(value.chars().all(|ch| ch.is_ascii_lowercase()));
}

#[test]
fn password_all_classes_disabled_falls_back_to_lowercase() {
    let registry = GeneratorRegistry::new();
    let options = json!({
        "uppercase": false,
        "lowercase": false,
        "numbers": false,
        "special": false,
    });
    let mut rng = ChaCha8Rng::seed_from_u64(19);
    let value = registry
        .generate_one("password", Some(&options), &mut rng)
        .expect("password");
    assert_eq!(value.len(), 16);
    assert!(value.chars().all(|ch| ch.is_ascii_lowercase()));
}

#[test]
fn mac_address_honors_separator_and_case() {
    let registry = GeneratorRegistry::new();
    let options = json!({"separator": "-", "uppercase": false});
    let mut rng = ChaCha8Rng::seed_from_u64(20);
    let value = registry
        .generate_one("mac_address", Some(&options), &mut rng)
        .expect("mac");
    let octets: Vec<&str> = value.split('-').collect();
    assert_eq!(octets.len(), 6, "value: {value}");
    for octet in octets {
        assert_eq!(octet.len(), 2);
        assert!(octet.chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()));
    }
}

#[test]
fn username_styles_shape_the_value() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    let options = json!({"style": "adj_noun"});
    let value = registry
        .generate_one("username", Some(&options), &mut rng)
        .expect("username");
    assert!(value.contains('_'), "value: {value}");

    let options = json!({"style": "mrx", "prefix": "user_"});
    let value = registry
        .generate_one("username", Some(&options), &mut rng)
        .expect("username");
    assert!(value.starts_with("user_mrx_"), "value: {value}");
}

#[test]
fn phone_formats_follow_the_country() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(22);

    let options = json!({"country": "US"});
    let value = registry
        .generate_one("phone", Some(&options), &mut rng)
        .expect("phone");
    assert!(value.starts_with("+1 ("), "value: {value}");

    let options = json!({"country": "GB", "include_code": false});
    let value = registry
        .generate_one("phone", Some(&options), &mut rng)
        .expect("phone");
    assert!(!value.starts_with("+44"), "value: {value}");
    assert_eq!(value.split(' ').count(), 3, "value: {value}");

    let options = json!({"country": "IN", "include_code": true});
    let value = registry
        .generate_one("phone", Some(&options), &mut rng)
        .expect("phone");
    let rest = value.strip_prefix("+91 ").expect("dialing code");
    assert_eq!(rest.len(), 10, "value: {value}");
    assert!(rest.starts_with(['7', '8', '9']), "value: {value}");
}

#[test]
fn address_uk_layout_differs_from_us() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(23);

    let options = json!({"country": "GB"});
    let value = registry
        .generate_one("address", Some(&options), &mut rng)
        .expect("address");
    let district = value.rsplit(", ").next().expect("district");
    assert!(
        ["SW1A", "EC1A", "W1A"].contains(&district),
        "value: {value}"
    );

    let options = json!({"country": "US"});
    let value = registry
        .generate_one("address", Some(&options), &mut rng)
        .expect("address");
    let tail = value.rsplit(' ').next().expect("zip tail");
    assert_eq!(tail.len(), 5, "value: {value}");
    assert!(tail.chars().all(|ch| ch.is_ascii_digit()), "value: {value}");
}

#[test]
fn datetime_segments_toggle_independently() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(24);

    let options = json!({"include_time": false});
    let value = registry
        .generate_one("datetime", Some(&options), &mut rng)
        .expect("datetime");
    assert_eq!(value.split('/').count(), 3, "value: {value}");
    assert!(!value.contains(':'), "value: {value}");

    let options = json!({"include_date": false, "include_timezone": true});
    let value = registry
        .generate_one("datetime", Some(&options), &mut rng)
        .expect("datetime");
    assert!(!value.contains('/'), "value: {value}");
    assert!(value.ends_with(" Z"), "value: {value}");
}

#[test]
fn datetime_day_stays_below_twenty_nine() {
    let registry = GeneratorRegistry::new();
    let options = json!({"include_time": false});
    let mut rng = ChaCha8Rng::seed_from_u64(25);
    for _ in 0..500 {
        let value = registry
            .generate_one("datetime", Some(&options), &mut rng)
            .expect("datetime");
        let day: u32 = value.split('/').next().and_then(|d| d.parse().ok()).expect("day");
        assert!((1..=28).contains(&day), "value: {value}");
    }
}

#[test]
fn paragraph_sentence_count_is_bounded() {
    let registry = GeneratorRegistry::new();
    let options = json!({"min_sentences": 2, "max_sentences": 4});
    let mut rng = ChaCha8Rng::seed_from_u64(26);
    for _ in 0..100 {
        let value = registry
            .generate_one("paragraph", Some(&options), &mut rng)
            .expect("paragraph");
        let sentences = value.matches('.').count();
        assert!((2..=4).contains(&sentences), "value: {value}");
    }
}

#[test]
fn invalid_sentence_mode_is_capitalized_and_terminated() {
    let registry = GeneratorRegistry::new();
    let options = json!({"grammatically_valid": false});
    let mut rng = ChaCha8Rng::seed_from_u64(27);
    for _ in 0..50 {
        let value = registry
            .generate_one("sentence", Some(&options), &mut rng)
            .expect("sentence");
        assert!(value.ends_with('.'), "value: {value}");
        let first = value.chars().next().expect("nonempty");
        assert!(first.is_ascii_uppercase(), "value: {value}");
        let words = value.trim_end_matches('.').split(' ').count();
        assert!((5..=12).contains(&words), "value: {value}");
    }
}

#[test]
fn company_lead_in_is_prepended_when_missing() {
    let registry = GeneratorRegistry::new();
    let options = json!({"starts_with": "Zq"});
    let mut rng = ChaCha8Rng::seed_from_u64(28);
    let value = registry
        .generate_one("company", Some(&options), &mut rng)
        .expect("company");
    assert!(value.starts_with("Zq"), "value: {value}");
}

#[test]
fn job_seniority_filters_titles() {
    let registry = GeneratorRegistry::new();
    let options = json!({"seniority": "senior"});
    let mut rng = ChaCha8Rng::seed_from_u64(29);
    for _ in 0..50 {
        let value = registry
            .generate_one("job", Some(&options), &mut rng)
            .expect("job");
        assert!(value.to_lowercase().contains("senior"), "value: {value}");
    }
}

#[test]
fn hex_color_case_follows_the_option() {
    let registry = GeneratorRegistry::new();
    let options = json!({"uppercase": false});
    let mut rng = ChaCha8Rng::seed_from_u64(30);
    let value = registry
        .generate_one("hex_color", Some(&options), &mut rng)
        .expect("hex");
    assert_eq!(value.len(), 7, "value: {value}");
    assert!(value.starts_with('#'), "value: {value}");
    assert!(
        value[1..].chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()),
        "value: {value}"
    );
}

#[test]
fn email_uses_supplied_domain_and_extension() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(31);

    let options = json!({"domain": "example", "extension": "test"});
    let value = registry
        .generate_one("email", Some(&options), &mut rng)
        .expect("email");
    assert!(value.ends_with("@example.test"), "value: {value}");

    let value = registry.generate_one("email", None, &mut rng).expect("email");
    let host = value.rsplit('@').next().expect("host");
    assert!(
        ["gmail.com", "yahoo.com", "outlook.com"].contains(&host),
        "value: {value}"
    );
}

#[test]
fn country_filter_falls_back_when_unmatched() {
    let registry = GeneratorRegistry::new();
    let mut rng = ChaCha8Rng::seed_from_u64(32);

    let options = json!({"starts_with": "u"});
    for _ in 0..50 {
        let value = registry
            .generate_one("country", Some(&options), &mut rng)
            .expect("country");
        assert!(value.to_uppercase().starts_with('U'), "value: {value}");
    }

    let options = json!({"starts_with": "Xyzzyq"});
    let value = registry
        .generate_one("country", Some(&options), &mut rng)
        .expect("country");
    assert!(!value.is_empty());
}

#[test]
fn barcode_alphanumeric_mode_widens_the_alphabet() {
    let registry = GeneratorRegistry::new();
    let options = json!({"numeric_only": false, "length": 20});
    let mut rng = ChaCha8Rng::seed_from_u64(33);
    let value = registry
        .generate_one("barcode", Some(&options), &mut rng)
        .expect("barcode");
    assert_eq!(value.len(), 20);
    assert!(
        value.chars().all(|ch| ch.is_ascii_digit() || ch.is_ascii_uppercase()),
        "value: {value}"
    );
}
