//! Check-digit algorithms for structurally valid identifiers.
//!
//! All functions take payload digits as values 0..=9, most significant
//! first, and return the check digit to append.

/// Luhn check digit for card and IMEI payloads.
///
/// Traverses right to left, doubling every second digit starting with the
/// rightmost payload digit and folding results above 9 by subtracting 9.
pub fn luhn_check_digit(payload: &[u8]) -> u8 {
    let mut sum = 0_u32;
    for (idx, digit) in payload.iter().rev().enumerate() {
        let mut value = u32::from(*digit);
        if idx % 2 == 0 {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
    }
    ((10 - sum % 10) % 10) as u8
}

/// Whether a complete digit string (payload plus trailing check digit)
/// passes the Luhn check.
pub fn luhn_is_valid(digits: &[u8]) -> bool {
    match digits.split_last() {
        Some((check, payload)) => luhn_check_digit(payload) == *check,
        None => false,
    }
}

/// ISBN-10 check digit over the 9 payload digits.
///
/// Digit `i` (from the left) is weighted `10 - i`; a result of 10 renders
/// as `X` in the formatted ISBN.
pub fn isbn10_check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(idx, digit)| (10 - idx as u32) * u32::from(*digit))
        .sum();
    ((11 - sum % 11) % 11) as u8
}

/// ISBN-13 check digit over the 12 payload digits, weights alternating 1,3
/// from the leftmost digit.
pub fn isbn13_check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(idx, digit)| {
            let weight = if idx % 2 == 0 { 1 } else { 3 };
            weight * u32::from(*digit)
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::{isbn10_check_digit, isbn13_check_digit, luhn_check_digit, luhn_is_valid};

    fn digits(text: &str) -> Vec<u8> {
        text.bytes().map(|byte| byte - b'0').collect()
    }

    #[test]
    fn luhn_classic_vector() {
        assert_eq!(luhn_check_digit(&digits("7992739871")), 3);
        assert!(luhn_is_valid(&digits("79927398713")));
        assert!(!luhn_is_valid(&digits("79927398714")));
    }

    #[test]
    fn luhn_rejects_empty() {
        assert!(!luhn_is_valid(&[]));
    }

    #[test]
    fn isbn10_known_vector() {
        // 0-306-40615-2
        assert_eq!(isbn10_check_digit(&digits("030640615")), 2);
    }

    #[test]
    fn isbn10_check_can_be_ten() {
        // 0-8044-2957-X
        assert_eq!(isbn10_check_digit(&digits("080442957")), 10);
    }

    #[test]
    fn isbn13_known_vector() {
        // 978-0-306-40615-7
        assert_eq!(isbn13_check_digit(&digits("978030640615")), 7);
    }
}
