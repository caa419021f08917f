//! Strongly-typed identifiers used across the domain.
//!
//! All identifiers are externally issued positive integers (the upstream
//! ingestion/sync process assigns them); this layer only enforces positivity.
//! Every path into an id — `new`, `FromStr`, serde deserialization — goes
//! through the same check.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an observed (tracked) product. Primary key at the
/// persistence boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct ProductId(i64);

/// Identifier of a user (subscription owner).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct UserId(i64);

/// Identifier of a user/product subscription link.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct SubscriptionId(i64);

macro_rules! impl_i64_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap an externally-issued identifier.
            ///
            /// Rejects non-positive values; issuance itself happens upstream.
            pub fn new(raw: i64) -> Result<Self, DomainError> {
                if raw <= 0 {
                    return Err(DomainError::invalid_id(format!(
                        "{} must be positive, got {}",
                        $name, raw
                    )));
                }
                Ok(Self(raw))
            }

            pub fn get(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<i64> for $t {
            type Error = DomainError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw: i64 = s
                    .parse()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Self::new(raw)
            }
        }
    };
}

impl_i64_newtype!(ProductId, "ProductId");
impl_i64_newtype!(UserId, "UserId");
impl_i64_newtype!(SubscriptionId, "SubscriptionId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_ids_are_accepted() {
        let id = ProductId::new(1).unwrap();
        assert_eq!(id.get(), 1);
        assert_eq!(id.to_string(), "1");
    }

    #[test]
    fn zero_and_negative_ids_are_rejected() {
        assert!(matches!(ProductId::new(0), Err(DomainError::InvalidId(_))));
        assert!(matches!(UserId::new(-7), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn ids_parse_from_strings() {
        let id: SubscriptionId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = ProductId::new(99).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "99");
        let back: ProductId = serde_json::from_str("99").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserialization_rejects_non_positive_ids() {
        assert!(serde_json::from_str::<ProductId>("-5").is_err());
        assert!(serde_json::from_str::<ProductId>("0").is_err());
        assert!(serde_json::from_str::<UserId>("-1").is_err());
        assert!(serde_json::from_str::<SubscriptionId>("0").is_err());
    }
}
