//! Typed identifiers for ledgers and expenses
//!
//! Both wrap a time-ordered UUID (v7), so sorting ids sorts by creation
//! time. Display adds a short prefix naming the kind of entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh time-ordered identifier
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Identifies one ledger across resets and serialization
    LedgerId,
    "LDG"
);
define_id!(
    /// Identifies one recorded expense
    ExpenseId,
    "EXP"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefix() {
        assert!(LedgerId::new_v7().to_string().starts_with("LDG-"));
        assert!(ExpenseId::new_v7().to_string().starts_with("EXP-"));
    }
}
