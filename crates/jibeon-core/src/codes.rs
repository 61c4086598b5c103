//! # Code Newtypes
//!
//! Validated identifiers for the Korean legal-district numbering scheme.
//! Each identifier is a distinct type — you cannot pass a [`RegionCode`]
//! where a [`Pnu`] is expected.
//!
//! ## Validation
//!
//! Both types validate format at construction time. [`RegionCode`] strips
//! non-digit characters before checking its fixed width, mirroring how
//! registry responses sometimes decorate codes; [`Pnu`] accepts only the
//! exact 19-digit positional layout.
//!
//! ## Format Reference
//!
//! - region code (법정동코드): 10 digits, issued by MOIS
//! - PNU (필지고유번호): region code (10) + mountain flag (1) +
//!   main lot number (4, zero-padded) + sub lot number (4, zero-padded)

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::lot::LotSpec;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A 10-digit Korean administrative region code (법정동코드).
///
/// The canonical storage format is 10 digits. The constructor strips any
/// non-digit characters first, so `"11680-10300"` and `"1168010300"`
/// construct the same code.
///
/// # Validation
///
/// - Must reduce to exactly 10 digits after stripping non-digits
/// - Leading zeros are significant
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RegionCode(String);

impl_validating_deserialize!(RegionCode);

impl RegionCode {
    /// Create a region code from a raw candidate, validating the 10-digit
    /// format after stripping non-digit characters.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRegionCode`] if the stripped
    /// form is not exactly 10 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != 10 {
            return Err(ValidationError::InvalidRegionCode(raw));
        }
        Ok(Self(digits))
    }

    /// Access the canonical 10-digit string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RegionCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A 19-digit Parcel Number Unit (필지고유번호).
///
/// Positional layout: `RRRRRRRRRR` `M` `NNNN` `SSSS` — region code,
/// mountain flag ('1' for 산 parcels, '0' for 대지 parcels), zero-padded
/// main lot number, zero-padded sub lot number. The length invariant is
/// exactly 19; malformed inputs fail before a `Pnu` is constructed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Pnu(String);

impl_validating_deserialize!(Pnu);

impl Pnu {
    /// Accept an existing 19-digit PNU string, validating its layout.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPnu`] if the string does not
    /// decode as a PNU (see [`Pnu::decode`]).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        Self::decode(&s)?;
        Ok(Self(s))
    }

    /// Encode a raw region code and a parsed lot into a PNU.
    ///
    /// The region code is digit-stripped and must reduce to exactly 10
    /// digits. Main and sub lot numbers render as four zero-padded digits
    /// each and are never truncated — a lot number above 9999 widens the
    /// field, so callers must bound lot numbers before encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRegionCode`] if the region code
    /// is malformed; no partial PNU is ever produced.
    pub fn encode(region_cd: impl Into<String>, lot: &LotSpec) -> Result<Self, ValidationError> {
        let region = RegionCode::new(region_cd)?;
        Ok(Self::from_parts(&region, lot))
    }

    /// Encode an already-validated region code and lot into a PNU.
    pub fn from_parts(region: &RegionCode, lot: &LotSpec) -> Self {
        let flag = if lot.mountain { '1' } else { '0' };
        Self(format!(
            "{}{}{:04}{:04}",
            region.as_str(),
            flag,
            lot.main,
            lot.sub
        ))
    }

    /// Split a 19-character PNU string into its region code and lot.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPnu`] if the input length is not
    /// exactly 19, any field is non-digit, or the mountain flag is not
    /// '0' or '1'.
    pub fn decode(value: &str) -> Result<(RegionCode, LotSpec), ValidationError> {
        if value.len() != 19 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPnu(value.to_string()));
        }
        let region = RegionCode::new(&value[..10])?;
        let mountain = match &value[10..11] {
            "0" => false,
            "1" => true,
            _ => return Err(ValidationError::InvalidPnu(value.to_string())),
        };
        let main: u32 = value[11..15]
            .parse()
            .map_err(|_| ValidationError::InvalidPnu(value.to_string()))?;
        let sub: u32 = value[15..19]
            .parse()
            .map_err(|_| ValidationError::InvalidPnu(value.to_string()))?;
        Ok((
            region,
            LotSpec {
                mountain,
                main,
                sub,
            },
        ))
    }

    /// Access the 19-digit string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The region-code prefix of this PNU.
    pub fn region_code(&self) -> &str {
        &self.0[..10]
    }
}

impl std::fmt::Display for Pnu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Pnu {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    // -- RegionCode --

    #[test]
    fn region_code_valid_10_digits() {
        let code = RegionCode::new("1168010300").unwrap();
        assert_eq!(code.as_str(), "1168010300");
    }

    #[test]
    fn region_code_strips_non_digits() {
        let code = RegionCode::new("11680-10300").unwrap();
        assert_eq!(code.as_str(), "1168010300");
    }

    #[test]
    fn region_code_leading_zeros() {
        let code = RegionCode::new("0011680103").unwrap();
        assert_eq!(code.as_str(), "0011680103");
    }

    #[test]
    fn region_code_rejects_invalid() {
        assert!(RegionCode::new("").is_err());
        assert!(RegionCode::new("12345").is_err()); // 5 digits
        assert!(RegionCode::new("12345678901").is_err()); // 11 digits
        assert!(RegionCode::new("region-cd-12345-6789x").is_err()); // 9 digits stripped
        assert!(RegionCode::new("abcdefghij").is_err()); // no digits at all
    }

    #[test]
    fn region_code_display() {
        let code = RegionCode::new("1168010300").unwrap();
        assert_eq!(format!("{code}"), "1168010300");
    }

    #[test]
    fn region_code_ordering_is_lexicographic() {
        let a = RegionCode::new("1168010300").unwrap();
        let b = RegionCode::new("4159010100").unwrap();
        assert!(a < b);
    }

    // -- Pnu::encode --

    #[test]
    fn encode_flat_lot() {
        let lot = LotSpec {
            mountain: false,
            main: 2,
            sub: 14,
        };
        let pnu = Pnu::encode("1168010300", &lot).unwrap();
        assert_eq!(pnu.as_str(), "1168010300000020014");
        assert_eq!(pnu.as_str().len(), 19);
    }

    #[test]
    fn encode_mountain_lot() {
        let lot = LotSpec {
            mountain: true,
            main: 176,
            sub: 18,
        };
        let pnu = Pnu::encode("1168010300", &lot).unwrap();
        assert_eq!(pnu.as_str(), "1168010300101760018");
    }

    #[test]
    fn encode_strips_region_decorations() {
        let lot = LotSpec {
            mountain: false,
            main: 1,
            sub: 0,
        };
        let pnu = Pnu::encode("11680-10300", &lot).unwrap();
        assert_eq!(pnu.region_code(), "1168010300");
    }

    #[test]
    fn encode_rejects_short_region_code() {
        let lot = LotSpec {
            mountain: false,
            main: 1,
            sub: 0,
        };
        let err = Pnu::encode("12345", &lot).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRegionCode(_)));
    }

    #[test]
    fn encode_rejects_long_region_code() {
        let lot = LotSpec {
            mountain: false,
            main: 1,
            sub: 0,
        };
        let err = Pnu::encode("12345678901", &lot).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidRegionCode(_)));
    }

    #[test]
    fn encode_fails_before_constructing_partial_pnu() {
        let lot = LotSpec {
            mountain: true,
            main: 9999,
            sub: 9999,
        };
        // Stripped digit count is 9, not 10 — must fail outright.
        assert!(Pnu::encode("region-cd-12345-6789x", &lot).is_err());
    }

    #[test]
    fn decorated_ten_digit_candidate_still_encodes() {
        let lot = LotSpec {
            mountain: false,
            main: 1,
            sub: 0,
        };
        // Stripping leaves exactly 10 digits, so this candidate is valid.
        let pnu = Pnu::encode("region-cd-12345-6789x0", &lot).unwrap();
        assert_eq!(pnu.region_code(), "1234567890");
    }

    // -- Pnu::decode --

    #[test]
    fn decode_splits_fields_positionally() {
        let (region, lot) = Pnu::decode("1168010300101760018").unwrap();
        assert_eq!(region.as_str(), "1168010300");
        assert!(lot.mountain);
        assert_eq!(lot.main, 176);
        assert_eq!(lot.sub, 18);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert!(Pnu::decode("116801030010176001").is_err()); // 18
        assert!(Pnu::decode("11680103001017600180").is_err()); // 20
        assert!(Pnu::decode("").is_err());
    }

    #[test]
    fn decode_rejects_non_digit() {
        assert!(Pnu::decode("116801030010176001x").is_err());
    }

    #[test]
    fn decode_rejects_bad_mountain_flag() {
        assert!(Pnu::decode("1168010300201760018").is_err());
    }

    #[test]
    fn pnu_new_validates() {
        assert!(Pnu::new("1168010300000020014").is_ok());
        assert!(Pnu::new("not-a-pnu").is_err());
    }

    // -- Serde --

    #[test]
    fn region_code_serde_roundtrip() {
        let code = RegionCode::new("1168010300").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        let back: RegionCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }

    #[test]
    fn region_code_deserialize_rejects_invalid() {
        let result: Result<RegionCode, _> = serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }

    #[test]
    fn pnu_serde_roundtrip() {
        let pnu = Pnu::new("1168010300101760018").unwrap();
        let json = serde_json::to_string(&pnu).unwrap();
        let back: Pnu = serde_json::from_str(&json).unwrap();
        assert_eq!(pnu, back);
    }

    #[test]
    fn pnu_deserialize_rejects_invalid() {
        let result: Result<Pnu, _> = serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }

    // -- Round-trip property --

    proptest! {
        #[test]
        fn encode_decode_roundtrip(
            region in "[0-9]{10}",
            mountain in any::<bool>(),
            main in 0u32..=9999,
            sub in 0u32..=9999,
        ) {
            let lot = LotSpec { mountain, main, sub };
            let pnu = Pnu::encode(region.clone(), &lot).unwrap();
            prop_assert_eq!(pnu.as_str().len(), 19);
            let (decoded_region, decoded_lot) = Pnu::decode(pnu.as_str()).unwrap();
            prop_assert_eq!(decoded_region.as_str(), region.as_str());
            prop_assert_eq!(decoded_lot, lot);
        }
    }
}
