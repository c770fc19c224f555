use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines a string-backed identifier newtype.
///
/// All ids in the dashboard are opaque strings ("proj-1", "member-3",
/// "1738051200000"), so each wrapper only exists to keep them from being mixed up.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// An empty id stands for "nothing selected".
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

string_id!(
    /// A project identifier, e.g. "proj-1".
    ProjectId
);

string_id!(
    /// A team member identifier, e.g. "member-1".
    MemberId
);

string_id!(
    /// A rate card row identifier.
    RoleId
);

string_id!(
    /// An additional-cost category identifier.
    CategoryId
);

string_id!(
    /// Identifier of a time log or additional-cost entry.
    ///
    /// Generated client side; see [`crate::IdSource`].
    EntryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_id_counts_as_empty() {
        assert!(MemberId::new("").is_empty());
        assert!(MemberId::new("  ").is_empty());
        assert!(!MemberId::new("member-1").is_empty());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = ProjectId::from("proj-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""proj-1""#);

        let back: ProjectId = serde_json::from_str(r#""proj-2""#).unwrap();
        assert_eq!(back.as_str(), "proj-2");
    }
}
