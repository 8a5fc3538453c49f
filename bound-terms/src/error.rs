//! Defines [`TermError`], the error type for term operations.
//!
//! Only two conditions exist: a value was required but the term is
//! unbound, or a checked cast asked for the wrong concrete kind.

use thiserror::Error;

/// Represents all possible errors raised by term operations.
///
/// Equality between terms of different kinds is *not* an error; it is
/// a defined `false`.  [`TermError::Incompatible`] is reserved for
/// explicit casts and [`TermError::Unbound`] for missing values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    /// An operation required a value but the term holds none.
    #[error("unbound term")]
    Unbound,

    /// A checked cast targeted a kind other than the one held.
    #[error("type mismatch: expected {expected}, found {found}")]
    Incompatible {
        expected: &'static str,
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(TermError::Unbound.to_string(), "unbound term");
        let e = TermError::Incompatible {
            expected: "list",
            found: "tuple",
        };
        assert_eq!(e.to_string(), "type mismatch: expected list, found tuple");
    }
}
