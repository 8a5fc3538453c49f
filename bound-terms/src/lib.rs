//! # Bound Terms
//!
//! Owned, dynamically-tagged Prolog/Erlang-like terms with logic-variable
//! binding.
//!
//! A [`Term`] holds at most one value of one concrete kind: an [`Atom`],
//! an [`Integer`], a [`Float`], a [`Binary`], or a sequence of terms,
//! either a [`Tuple`] or a [`List`].  Every concrete kind carries its own
//! bound/unbound state.  Accessing the value of an unbound term fails
//! with [`TermError::Unbound`]; casting a term to the wrong kind fails
//! with [`TermError::Incompatible`].  Those are the only two errors.
//!
//! Equality ([`Term::equals`]) is pure and never binds.  Binding free
//! positions of a pattern against a value is done explicitly with
//! [`unify`] (or [`Term::unify`] / [`Sequence::unify`]), a two-phase,
//! all-or-nothing match: if any position disagrees, nothing is bound.
//!
//! Ownership is exclusive.  `clone` deep-copies; `take` moves a value out
//! and leaves the source unbound, so a moved-from term fails checked
//! accesses instead of aliasing.
//!
//! ## Example
//! ```rust
//! # use bound_terms::{list, tuple, Atom, Binary, List, Term, TermError, Tuple};
//! let t = Term::from(tuple![Atom::new("hello"), Binary::new(&b"world"[..])]);
//! let l = Term::from(list![Atom::new("hello"), Binary::new(&b"world"[..])]);
//!
//! // tuples and lists never compare equal
//! assert!(!t.equals(&l)?);
//!
//! // checked casts
//! let tup = t.cast::<Tuple>()?;
//! assert_eq!(tup.size()?, 2);
//! assert!(tup.front()?.unwrap().eq_value(&Atom::new("hello"))?);
//! assert!(t.cast::<List>().is_err());
//!
//! // unification binds free positions of the pattern
//! let mut pattern = Term::from(tuple![Atom::new("hello"), Binary::unbound()]);
//! assert!(pattern.unify(&t)?);
//! assert_eq!(pattern.to_string(), "(hello, hex{776F726C64})");
//! # Ok::<(), TermError>(())
//! ```
//!
//! ## License
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0 or
//! (at your option) any later version (LGPL-3.0-or-later).

mod binding;
mod display;
mod error;
mod scalar;
mod sequence;
mod term;
mod unify;

pub use binding::Binding;
pub use error::TermError;
pub use scalar::{
    Atom, AtomKind, Binary, BinaryKind, Float, FloatKind, Integer, IntegerKind, Scalar,
    ScalarKind,
};
pub use sequence::{Iter, List, ListKind, Sequence, SequenceKind, Tuple, TupleKind};
pub use term::{Concrete, Kind, Payload, Term};
pub use unify::{match_only, unify};
