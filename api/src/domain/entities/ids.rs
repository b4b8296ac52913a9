//! Identifier newtypes
//!
//! All platform identifiers are database serials. They order by numeric value,
//! which is what the "first rule/team/administrator" decisions sort on.

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub i64);

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(
    /// Residential complex (tenant) identifier
    ComplexId
);
id_newtype!(
    /// Platform user identifier
    UserId
);
id_newtype!(
    /// Staff team identifier
    TeamId
);
id_newtype!(
    /// Housing unit identifier
    UnitId
);
id_newtype!(
    /// Assignment rule identifier
    RuleId
);
id_newtype!(
    /// SLA configuration row identifier
    SlaId
);
