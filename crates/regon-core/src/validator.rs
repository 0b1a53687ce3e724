//! Structural and checksum validators for registry identifiers.
//!
//! All validators are pure. Length and character checks run before any
//! checksum is computed, so separators and whitespace are rejected outright.

/// Weights for the 9-digit REGON checksum (digits 0..8).
const REGON9_WEIGHTS: [u32; 8] = [8, 9, 2, 3, 4, 5, 6, 7];

/// Weights for the second 14-digit REGON checksum (digits 0..13).
const REGON14_WEIGHTS: [u32; 13] = [2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8];

/// Weights for the NIP checksum (digits 0..9).
const NIP_WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

/// Length of a KRS number.
const KRS_LENGTH: usize = 10;

/// A validator for one identifier kind.
pub trait IdentifierValidator {
    /// Returns `true` if `identifier` is structurally valid and its checksum matches.
    fn validate(&self, identifier: &str) -> bool;
}

/// Validator for REGON numbers (9 or 14 digits).
#[derive(Debug, Clone, Copy, Default)]
pub struct RegonValidator;

impl IdentifierValidator for RegonValidator {
    fn validate(&self, identifier: &str) -> bool {
        validate_regon(identifier)
    }
}

/// Validator for NIP numbers (10 digits).
#[derive(Debug, Clone, Copy, Default)]
pub struct NipValidator;

impl IdentifierValidator for NipValidator {
    fn validate(&self, identifier: &str) -> bool {
        validate_nip(identifier)
    }
}

/// Validator for KRS numbers (10 digits, no checksum).
#[derive(Debug, Clone, Copy, Default)]
pub struct KrsValidator;

impl IdentifierValidator for KrsValidator {
    fn validate(&self, identifier: &str) -> bool {
        validate_krs(identifier)
    }
}

/// Validate a 9- or 14-digit REGON number.
#[must_use]
pub fn validate_regon(regon: &str) -> bool {
    let Some(digits) = parse_digits(regon) else {
        return false;
    };

    match digits.len() {
        9 => regon9_matches(&digits),
        14 => regon9_matches(&digits[..9]) && checksum_matches(&digits, &REGON14_WEIGHTS),
        _ => false,
    }
}

/// Validate a 10-digit NIP number.
#[must_use]
pub fn validate_nip(nip: &str) -> bool {
    match parse_digits(nip) {
        Some(digits) if digits.len() == 10 => checksum_matches(&digits, &NIP_WEIGHTS),
        _ => false,
    }
}

/// Validate a KRS number: exactly 10 ASCII digits.
#[must_use]
pub fn validate_krs(krs: &str) -> bool {
    krs.len() == KRS_LENGTH && krs.bytes().all(|b| b.is_ascii_digit())
}

fn regon9_matches(digits: &[u32]) -> bool {
    checksum_matches(digits, &REGON9_WEIGHTS)
}

/// Compare the weighted mod-11 checksum of the leading digits against the
/// digit that follows them. A remainder of 10 counts as 0.
fn checksum_matches(digits: &[u32], weights: &[u32]) -> bool {
    let Some(&expected) = digits.get(weights.len()) else {
        return false;
    };

    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let checksum = match sum % 11 {
        10 => 0,
        rest => rest,
    };

    checksum == expected
}

/// Split a string into decimal digits, or `None` if any byte is not an ASCII digit.
fn parse_digits(value: &str) -> Option<Vec<u32>> {
    value
        .bytes()
        .map(|b| b.is_ascii_digit().then(|| u32::from(b - b'0')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_nine_digit_regon() {
        assert!(validate_regon("123456785"));
        assert!(validate_regon("000331501"));
    }

    #[test]
    fn test_invalid_nine_digit_regon_checksum() {
        assert!(!validate_regon("123456786"));
        assert!(!validate_regon("123456784"));
    }

    #[test]
    fn test_flipping_check_digit_invalidates_regon() {
        for regon in ["123456785", "000331501"] {
            let (body, check) = regon.split_at(8);
            let check: u32 = check.parse().expect("digit");
            for other in (0..10).filter(|d| *d != check) {
                let flipped = format!("{body}{other}");
                assert!(!validate_regon(&flipped), "{flipped} should be invalid");
            }
        }
    }

    #[test]
    fn test_valid_fourteen_digit_regon() {
        assert!(validate_regon("12345678512347"));
    }

    #[test]
    fn test_invalid_fourteen_digit_regon_checksum() {
        assert!(!validate_regon("12345678512348"));
    }

    #[test]
    fn test_fourteen_digit_regon_requires_valid_prefix() {
        // Second checksum matches (266 mod 11 = 2) but the 9-digit prefix does not
        assert!(!validate_regon("12345678612342"));
    }

    #[test]
    fn test_invalid_regon_length() {
        assert!(!validate_regon(""));
        assert!(!validate_regon("12345"));
        assert!(!validate_regon("12345678"));
        assert!(!validate_regon("1234567890123"));
    }

    #[test]
    fn test_regon_with_separators_is_invalid() {
        assert!(!validate_regon("12-345-67-85"));
        assert!(!validate_regon("12 345 67 85"));
        assert!(!validate_regon("123-456-785"));
    }

    #[test]
    fn test_valid_nip() {
        assert!(validate_nip("5260250274"));
        assert!(validate_nip("1234563218"));
        assert!(validate_nip("5261040828"));
    }

    #[test]
    fn test_invalid_nip_checksum() {
        assert!(!validate_nip("5260250275"));
    }

    #[test]
    fn test_nip_checksum_of_ten_normalises_to_zero() {
        // Weighted sum 10 (mod 11) normalises to 0, so only a trailing 0 matches.
        // 1*6 + 0 + 0 + 0 + 0 + 1*4 = 10
        assert!(validate_nip("1000010000"));
        assert!(!validate_nip("1000010001"));
    }

    #[test]
    fn test_invalid_nip_length() {
        assert!(!validate_nip("526025027"));
        assert!(!validate_nip("52602502744"));
    }

    #[test]
    fn test_nip_with_separators_is_invalid() {
        assert!(!validate_nip("526-025-02-74"));
        assert!(!validate_nip("526 025 02 74"));
    }

    #[test]
    fn test_krs_structure() {
        assert!(validate_krs("0000123456"));
        assert!(!validate_krs("000012345"));
        assert!(!validate_krs("00001234567"));
        assert!(!validate_krs("00001234a6"));
        assert!(!validate_krs("0000 12345"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(!validate_krs("٠١٢٣٤٥٦٧٨٩"));
        assert!(!validate_nip("٥٢٦٠٢٥٠٢٧٤"));
    }

    #[test]
    fn test_validator_structs_delegate() {
        assert!(RegonValidator.validate("123456785"));
        assert!(NipValidator.validate("5260250274"));
        assert!(KrsValidator.validate("0000123456"));
        assert!(!RegonValidator.validate("5260250274"));
    }
}
