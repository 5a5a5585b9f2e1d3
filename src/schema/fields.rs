//! Field validators
//!
//! Pure parsers from a present raw string to a typed value. Each returns the
//! human-readable failure reason on error; attaching the field name is the
//! caller's job (see [`super::validator`]).

use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::Num;
use regex::Regex;
use sha3::{Digest, Keccak256};

use super::types::Address;

/// Reason reported for absent required fields.
pub const REQUIRED: &str = "required";

static ADDRESS_SHAPE: OnceLock<Regex> = OnceLock::new();
static BIG_INTEGER_SHAPE: OnceLock<Regex> = OnceLock::new();
static DECIMAL_SHAPE: OnceLock<Regex> = OnceLock::new();

fn address_shape() -> &'static Regex {
    ADDRESS_SHAPE.get_or_init(|| {
        Regex::new(r"^(?:0[xX])?[0-9a-fA-F]{40}$").expect("address pattern is valid")
    })
}

fn big_integer_shape() -> &'static Regex {
    BIG_INTEGER_SHAPE.get_or_init(|| {
        Regex::new(r"^(?:[0-9]+|0[xX][0-9a-fA-F]+)$").expect("big integer pattern is valid")
    })
}

fn decimal_shape() -> &'static Regex {
    DECIMAL_SHAPE.get_or_init(|| {
        Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("decimal pattern is valid")
    })
}

/// Any non-empty string passes unchanged.
pub fn parse_string(raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        return Err(REQUIRED.to_string());
    }
    Ok(raw.to_string())
}

/// Base-10 signed integer; the whole input must parse.
pub fn parse_integer(raw: &str) -> Result<i64, String> {
    raw.parse::<i64>()
        .map_err(|_| format!("invalid integer value: {}", raw))
}

/// `true`/`t`/`1` or `false`/`f`/`0`. Case-sensitive.
pub fn parse_boolean(raw: &str) -> Result<bool, String> {
    match raw {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" => Ok(false),
        _ => Err(format!("invalid boolean value: {}", raw)),
    }
}

/// Non-negative arbitrary-precision integer, decimal or `0x` hex.
pub fn parse_big_integer(raw: &str) -> Result<BigUint, String> {
    let invalid = || format!("invalid numeric value: {}", raw);

    if !big_integer_shape().is_match(raw) {
        return Err(invalid());
    }

    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => BigUint::from_str_radix(hex, 16),
        None => BigUint::from_str_radix(raw, 10),
    };
    parsed.map_err(|_| invalid())
}

/// Returns true if `value` is a non-negative decimal number such as `100`,
/// `0.5` or `.25`. Signs and exponents are not accepted.
pub fn is_decimal(value: &str) -> bool {
    decimal_shape().is_match(value)
}

/// Space-separated addresses. Fails on the first invalid token.
pub fn parse_address_list(raw: &str) -> Result<Vec<Address>, String> {
    raw.split(' ').map(Address::parse).collect()
}

/// Returns true if `value` is a well-formed address.
///
/// All-lowercase and all-uppercase digits are accepted as is; mixed case must
/// match the EIP-55 checksum.
pub fn is_address(value: &str) -> bool {
    if !address_shape().is_match(value) {
        return false;
    }

    let digits = strip_hex_prefix(value);
    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if !(has_lower && has_upper) {
        return true;
    }

    checksum_encode(digits)[2..] == *digits
}

pub(crate) fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// EIP-55 encoding of 40 hex digits, `0x`-prefixed.
pub(crate) fn checksum_encode(digits: &str) -> String {
    let lower = digits.to_ascii_lowercase();
    let hash = Keccak256::digest(lower.as_bytes());

    let mut out = String::with_capacity(lower.len() + 2);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: [&str; 4] = [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn test_checksummed_addresses_pass() {
        for address in CHECKSUMMED {
            assert!(is_address(address), "{} should be valid", address);
            assert_eq!(checksum_encode(strip_hex_prefix(address)), address);
        }
    }

    #[test]
    fn test_bad_checksum_fails() {
        // first 'A' lowered
        assert!(!is_address("0x5aaeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
    }

    #[test]
    fn test_single_case_addresses_pass() {
        assert!(is_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        assert!(is_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED"));
        assert!(is_address("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
    }

    #[test]
    fn test_malformed_addresses_fail() {
        assert!(!is_address(""));
        assert!(!is_address("0x"));
        assert!(!is_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1bea"));
        assert!(!is_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed00"));
        assert!(!is_address("0xzaaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        assert!(!is_address(" 0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
    }

    #[test]
    fn test_address_parse_reason() {
        let err = Address::parse("0xnope").unwrap_err();
        assert_eq!(err, "Invalid address: 0xnope");
    }

    #[test]
    fn test_address_list() {
        let single = parse_address_list(CHECKSUMMED[0]).unwrap();
        assert_eq!(single.len(), 1);

        let all = parse_address_list(&CHECKSUMMED.join(" ")).unwrap();
        assert_eq!(all.len(), 4);

        let raw = format!("{} 0xbad {}", CHECKSUMMED[0], CHECKSUMMED[1]);
        assert_eq!(parse_address_list(&raw).unwrap_err(), "Invalid address: 0xbad");
    }

    #[test]
    fn test_address_list_double_space_fails() {
        let raw = format!("{}  {}", CHECKSUMMED[0], CHECKSUMMED[1]);
        assert_eq!(parse_address_list(&raw).unwrap_err(), "Invalid address: ");
    }

    #[test]
    fn test_big_integer() {
        assert_eq!(parse_big_integer("0").unwrap(), BigUint::from(0u32));
        assert_eq!(parse_big_integer("1000000000").unwrap(), BigUint::from(1_000_000_000u64));
        assert_eq!(parse_big_integer("0xff").unwrap(), BigUint::from(255u32));
        assert_eq!(parse_big_integer("0XFF").unwrap(), BigUint::from(255u32));

        let huge = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        assert_eq!(parse_big_integer(huge).unwrap().to_string(), huge);
    }

    #[test]
    fn test_big_integer_rejects() {
        for raw in ["", "-1", "1.5", "abc", "0x", "1_000", "+5", " 5"] {
            let err = parse_big_integer(raw).unwrap_err();
            assert_eq!(err, format!("invalid numeric value: {}", raw));
        }
    }

    #[test]
    fn test_integer() {
        assert_eq!(parse_integer("8").unwrap(), 8);
        assert_eq!(parse_integer("-3").unwrap(), -3);
        assert!(parse_integer("8.0").is_err());
        assert!(parse_integer("eight").is_err());
        assert!(parse_integer("").is_err());
    }

    #[test]
    fn test_boolean_table() {
        for raw in ["true", "t", "1"] {
            assert_eq!(parse_boolean(raw), Ok(true));
        }
        for raw in ["false", "f", "0"] {
            assert_eq!(parse_boolean(raw), Ok(false));
        }
        for raw in ["True", "FALSE", "yes", "on", "no", "off", "maybe", ""] {
            assert!(parse_boolean(raw).is_err());
        }
    }

    #[test]
    fn test_decimal_shape() {
        for raw in ["0", "100", "0.5", "1.", ".25", "1000000.000001"] {
            assert!(is_decimal(raw), "{} should be a decimal", raw);
        }
        for raw in ["", ".", "-1", "+1", "1e3", "0x10", "1.2.3", "1,5", " 1"] {
            assert!(!is_decimal(raw), "{} should not be a decimal", raw);
        }
    }

    #[test]
    fn test_string() {
        assert_eq!(parse_string("http://localhost:8545").unwrap(), "http://localhost:8545");
        assert_eq!(parse_string("").unwrap_err(), REQUIRED);
    }
}
