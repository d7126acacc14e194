//! Canonical hardware-address formatting.

use thiserror::Error;

/// Length of a full hardware address in hex digits.
const ADDRESS_HEX_LEN: usize = 12;

/// Errors produced when an assignment block cannot be formatted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("assignment is empty")]
    Empty,
    #[error("assignment is longer than 12 hex digits")]
    TooLong,
    #[error("assignment contains non-hexadecimal characters")]
    NotHex,
}

/// Expands a partial assignment block into a canonical 6-octet address.
///
/// Strips `:` and `-` delimiters, upper-cases, right-pads with `0` to 12
/// hex digits and delimits every octet with `:`, e.g. `"001122"` becomes
/// `"00:11:22:00:00:00"`. Already-formatted input round-trips unchanged.
///
/// Empty, over-length, and non-hex input is rejected rather than
/// truncated.
pub fn format_address(assignment: &str) -> Result<String, FormatError> {
    let digits = assignment
        .chars()
        .filter(|c| !matches!(c, ':' | '-'))
        .collect::<String>();

    if digits.is_empty() {
        return Err(FormatError::Empty);
    }
    if digits.len() > ADDRESS_HEX_LEN {
        return Err(FormatError::TooLong);
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FormatError::NotHex);
    }

    let mut padded = digits.to_ascii_uppercase();
    while padded.len() < ADDRESS_HEX_LEN {
        padded.push('0');
    }

    let mut address = String::with_capacity(ADDRESS_HEX_LEN + ADDRESS_HEX_LEN / 2 - 1);
    for (i, pair) in padded.as_bytes().chunks(2).enumerate() {
        if i > 0 {
            address.push(':');
        }
        address.push(pair[0] as char);
        address.push(pair[1] as char);
    }

    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_short_assignment() {
        assert_eq!(format_address("A1").unwrap(), "A1:00:00:00:00:00");
        assert_eq!(format_address("001122").unwrap(), "00:11:22:00:00:00");
    }

    #[test]
    fn test_formats_full_assignment() {
        assert_eq!(format_address("0011223344AB").unwrap(), "00:11:22:33:44:AB");
    }

    #[test]
    fn test_upper_cases() {
        assert_eq!(format_address("a1b2c3").unwrap(), "A1:B2:C3:00:00:00");
    }

    #[test]
    fn test_idempotent_on_formatted_input() {
        let once = format_address("0011223344AB").unwrap();
        assert_eq!(format_address(&once).unwrap(), once);
    }

    #[test]
    fn test_accepts_dash_delimiters() {
        assert_eq!(format_address("00-11-22").unwrap(), "00:11:22:00:00:00");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(format_address(""), Err(FormatError::Empty));
        assert_eq!(format_address("::"), Err(FormatError::Empty));
    }

    #[test]
    fn test_rejects_over_length() {
        assert_eq!(format_address("0011223344AB0"), Err(FormatError::TooLong));
    }

    #[test]
    fn test_rejects_non_hex() {
        assert_eq!(format_address("00112G"), Err(FormatError::NotHex));
    }
}
