//! Strongly-typed ID newtypes for the three record kinds.
//!
//! Ids are SQLite `INTEGER PRIMARY KEY` values assigned by the database.
//! Wrapping them keeps a `ComplaintId` from being passed where a
//! `StudentId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Id of a Student record.
    StudentId
);

define_id!(
    /// Id of an Admin record.
    AdminId
);

define_id!(
    /// Id of a Complaint record.
    ComplaintId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id: StudentId = "42".parse().unwrap();
        assert_eq!(id, StudentId::new(42));
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{:?}", id), "StudentId(42)");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<ComplaintId>().is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&ComplaintId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: ComplaintId = serde_json::from_str("7").unwrap();
        assert_eq!(back.into_inner(), 7);
    }
}
