//! Newtype IDs for type-safe identifiers.
//!
//! Item identifiers are opaque strings issued by the item service; a branch
//! identifier scopes a catalog listing to one store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a purchasable item.
    ItemId
);
define_id!(
    /// Identifier of a store/branch whose catalog is listed.
    BranchId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_str_and_display() {
        let id: ItemId = "sku-456".into();
        assert_eq!(id.as_str(), "sku-456");
        assert_eq!(id.to_string(), "sku-456");
    }

    #[test]
    fn test_ids_order_lexicographically() {
        let mut ids = vec![ItemId::new("b2"), ItemId::new("a9"), ItemId::new("b10")];
        ids.sort();
        assert_eq!(ids, vec![ItemId::new("a9"), ItemId::new("b10"), ItemId::new("b2")]);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&BranchId::new("main")).unwrap();
        assert_eq!(json, r#""main""#);
        let back: BranchId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BranchId::new("main"));
    }
}
