use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Identifiers are owned by the editor; the engine only compares them.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of an equipment node on the flowsheet.
    NodeId
);

string_id!(
    /// Identifier of a stream (directed connection between two nodes).
    StreamId
);

string_id!(
    /// Key into the chemical reference table.
    ChemicalId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_string() {
        let id = NodeId::new("flash-1");
        assert_eq!(id.to_string(), "flash-1");
        assert_eq!(id.as_str(), "flash-1");
    }

    #[test]
    fn debug_names_the_kind() {
        let id = StreamId::from("s1");
        assert_eq!(format!("{id:?}"), "StreamId(\"s1\")");
    }

    #[test]
    fn ids_of_same_text_are_equal() {
        assert_eq!(ChemicalId::from("water"), ChemicalId::new(String::from("water")));
        assert_ne!(NodeId::from("a"), NodeId::from("b"));
    }
}
