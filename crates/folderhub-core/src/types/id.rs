//! Newtype wrappers around [`uuid::Uuid`] for domain entity identifiers.
//!
//! Using a distinct type prevents accidentally passing an arbitrary UUID
//! where an organization identifier is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Return the inner UUID value.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }

            /// Return a reference to the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for an organization.
    ///
    /// Organizations partition the folder space; no operation ever relates
    /// folders across different `OrgId` values.
    OrgId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_id_new() {
        let id1 = OrgId::new();
        let id2 = OrgId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_org_id_display() {
        let uuid = Uuid::new_v4();
        let id = OrgId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_org_id_from_str() {
        let uuid = Uuid::new_v4();
        let id: OrgId = uuid.to_string().parse().expect("should parse");
        assert_eq!(id.0, uuid);
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = OrgId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        let parsed: OrgId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
