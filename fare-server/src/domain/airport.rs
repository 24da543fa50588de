//! Airport code types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

const MAX_LEN: usize = 4;

/// A valid airport code (IATA style, e.g. `ABE`, `PIE`).
///
/// Codes are 2 to 4 uppercase ASCII letters or digits. The value is stored
/// inline so it is `Copy` and cheap to use as a map key. Ordering matches
/// the lexicographic ordering of the code string.
///
/// # Examples
///
/// ```
/// use fare_server::domain::AirportCode;
///
/// let abe = AirportCode::parse("ABE").unwrap();
/// assert_eq!(abe.as_str(), "ABE");
///
/// // Lowercase is rejected by the strict parser
/// assert!(AirportCode::parse("abe").is_err());
///
/// // ...but accepted after normalization
/// assert_eq!(AirportCode::parse_normalized(" abe ").unwrap(), abe);
///
/// // Empty codes are always rejected
/// assert!(AirportCode::parse_normalized("  ").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AirportCode {
    bytes: [u8; MAX_LEN],
    len: u8,
}

impl AirportCode {
    /// Parse an airport code from a string.
    ///
    /// The input must be 2 to 4 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.is_empty() {
            return Err(InvalidAirportCode {
                reason: "must not be empty",
            });
        }

        if bytes.len() < 2 || bytes.len() > MAX_LEN {
            return Err(InvalidAirportCode {
                reason: "must be 2 to 4 characters",
            });
        }

        for &b in bytes {
            if !(b.is_ascii_uppercase() || b.is_ascii_digit()) {
                return Err(InvalidAirportCode {
                    reason: "must be uppercase ASCII letters A-Z or digits",
                });
            }
        }

        let mut inline = [0u8; MAX_LEN];
        inline[..bytes.len()].copy_from_slice(bytes);

        Ok(AirportCode {
            bytes: inline,
            len: bytes.len() as u8,
        })
    }

    /// Parse an airport code after trimming whitespace and upper-casing.
    ///
    /// This is what ingested data and user input go through.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidAirportCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters and digits are ever stored
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(AirportCode::parse("ABE").is_ok());
        assert!(AirportCode::parse("PIE").is_ok());
        assert!(AirportCode::parse("KJFK").is_ok());
        assert!(AirportCode::parse("1G4").is_ok());
        assert!(AirportCode::parse("LA").is_ok());
    }

    #[test]
    fn reject_empty() {
        let err = AirportCode::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid airport code: must not be empty");
        assert!(AirportCode::parse_normalized("   ").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AirportCode::parse("A").is_err());
        assert!(AirportCode::parse("ABCDE").is_err());
    }

    #[test]
    fn reject_lowercase_and_symbols() {
        assert!(AirportCode::parse("abe").is_err());
        assert!(AirportCode::parse("A-E").is_err());
        assert!(AirportCode::parse("A E").is_err());
        assert!(AirportCode::parse("ÄBE").is_err());
    }

    #[test]
    fn normalized_trims_and_uppercases() {
        let code = AirportCode::parse_normalized("  pie\t").unwrap();
        assert_eq!(code.as_str(), "PIE");
    }

    #[test]
    fn display_and_debug() {
        let code = AirportCode::parse("BOS").unwrap();
        assert_eq!(format!("{}", code), "BOS");
        assert_eq!(format!("{:?}", code), "AirportCode(BOS)");
    }

    #[test]
    fn ordering_matches_strings() {
        let mut codes: Vec<AirportCode> = ["SFO", "LA", "ABE", "ABEX", "AB"]
            .iter()
            .map(|s| AirportCode::parse(s).unwrap())
            .collect();
        codes.sort();

        let sorted: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
        assert_eq!(sorted, vec!["AB", "ABE", "ABEX", "LA", "SFO"]);
    }

    #[test]
    fn serializes_as_plain_string() {
        let code = AirportCode::parse("ORD").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"ORD\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z0-9]{2,4}") {
            let code = AirportCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Normalization accepts any casing and surrounding whitespace
        #[test]
        fn normalized_accepts_lowercase(s in "[a-z]{3}", pad in " {0,3}") {
            let padded = format!("{pad}{s}{pad}");
            let code = AirportCode::parse_normalized(&padded).unwrap();
            prop_assert_eq!(code.as_str(), s.to_ascii_uppercase());
        }

        /// Ordering agrees with string ordering
        #[test]
        fn ord_agrees_with_str(a in "[A-Z0-9]{2,4}", b in "[A-Z0-9]{2,4}") {
            let ca = AirportCode::parse(&a).unwrap();
            let cb = AirportCode::parse(&b).unwrap();
            prop_assert_eq!(ca.cmp(&cb), a.as_str().cmp(b.as_str()));
        }
    }
}
