//! Typed identifier newtypes.
//!
//! Identifiers are minted by external systems (the catalog backend, the
//! payment provider), so they are opaque non-empty strings rather than UUIDs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier, rejecting blank values.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::EmptyId`] when `value` is empty or
            /// only whitespace.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::EmptyId);
                }
                Ok(Self(value))
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of a [`ServiceRecord`](crate::service::ServiceRecord).
    ServiceId
);

define_id!(
    /// Provider identifier of a [`CheckoutSession`](crate::payment::CheckoutSession).
    PaymentSessionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = ServiceId::new("66a1f0c2e4b0").unwrap();
        let parsed: ServiceId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = PaymentSessionId::new("cs_test_123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cs_test_123\"");
        let parsed: PaymentSessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_return_error_when_id_is_blank() {
        assert_eq!(ServiceId::new("  "), Err(ValidationError::EmptyId));
        assert!(serde_json::from_str::<ServiceId>("\"\"").is_err());
    }

    #[test]
    fn should_expose_raw_value_with_as_str() {
        let id = ServiceId::new("wedding-1").unwrap();
        assert_eq!(id.as_str(), "wedding-1");
    }
}
