//! Defines the generic [`Term`] type, the closed [`Payload`] enum it
//! holds, and the [`Concrete`] trait used for checked casts.
//!
//! A `Term` owns at most one payload.  The payload's kind is fixed for
//! as long as it is held; assigning a new value replaces it entirely.

use crate::{Atom, Binary, Float, Integer, List, TermError, Tuple};
use core::fmt;

/// The closed set of concrete term kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Atom,
    Integer,
    Float,
    Binary,
    Tuple,
    List,
}

impl Kind {
    /// Returns a stable lowercase name for this kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Atom => "atom",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Binary => "binary",
            Kind::Tuple => "tuple",
            Kind::List => "list",
        }
    }

    #[inline]
    pub const fn is_sequence(self) -> bool {
        matches!(self, Kind::Tuple | Kind::List)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The concrete value held by a bound [`Term`].
///
/// Each variant carries its own binding state: a `Term` holding
/// `Payload::Binary(Binary::unbound())` has a fixed kind but no value
/// yet, which is how free, typed positions are expressed inside
/// sequences.
#[derive(Debug, Clone)]
pub enum Payload {
    Atom(Atom),
    Integer(Integer),
    Float(Float),
    Binary(Binary),
    Tuple(Tuple),
    List(List),
}

impl Payload {
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Payload::Atom(_) => Kind::Atom,
            Payload::Integer(_) => Kind::Integer,
            Payload::Float(_) => Kind::Float,
            Payload::Binary(_) => Kind::Binary,
            Payload::Tuple(_) => Kind::Tuple,
            Payload::List(_) => Kind::List,
        }
    }

    /// Returns `true` if the payload holds a value; recursive for
    /// sequences.
    pub fn is_bound(&self) -> bool {
        match self {
            Payload::Atom(x) => x.is_bound(),
            Payload::Integer(x) => x.is_bound(),
            Payload::Float(x) => x.is_bound(),
            Payload::Binary(x) => x.is_bound(),
            Payload::Tuple(x) => x.is_bound(),
            Payload::List(x) => x.is_bound(),
        }
    }

    /// Pure equality.  Different kinds are unequal, never an error.
    pub fn equals(&self, other: &Payload) -> Result<bool, TermError> {
        match (self, other) {
            (Payload::Atom(a), Payload::Atom(b)) => a.equals(b),
            (Payload::Integer(a), Payload::Integer(b)) => a.equals(b),
            (Payload::Float(a), Payload::Float(b)) => a.equals(b),
            (Payload::Binary(a), Payload::Binary(b)) => a.equals(b),
            (Payload::Tuple(a), Payload::Tuple(b)) => a.equals(b),
            (Payload::List(a), Payload::List(b)) => a.equals(b),
            _ => Ok(false),
        }
    }
}

/// A concrete term kind that can be stored in, and cast out of, a
/// [`Term`].
///
/// Implemented for [`Atom`], [`Integer`], [`Float`], [`Binary`],
/// [`Tuple`] and [`List`].
pub trait Concrete: Clone + Into<Payload> {
    const KIND: Kind;

    fn from_payload(payload: &Payload) -> Option<&Self>;

    fn from_payload_mut(payload: &mut Payload) -> Option<&mut Self>;

    /// Unwraps an owned payload, handing it back on kind mismatch.
    fn from_payload_owned(payload: Payload) -> Result<Self, Payload>;

    fn is_bound(&self) -> bool;

    fn equals(&self, other: &Self) -> Result<bool, TermError>;
}

macro_rules! impl_concrete {
    ($($t:ident),* $(,)?) => {$(
        impl Concrete for $t {
            const KIND: Kind = Kind::$t;

            #[inline]
            fn from_payload(payload: &Payload) -> Option<&Self> {
                match payload {
                    Payload::$t(x) => Some(x),
                    _ => None,
                }
            }

            #[inline]
            fn from_payload_mut(payload: &mut Payload) -> Option<&mut Self> {
                match payload {
                    Payload::$t(x) => Some(x),
                    _ => None,
                }
            }

            #[inline]
            fn from_payload_owned(payload: Payload) -> Result<Self, Payload> {
                match payload {
                    Payload::$t(x) => Ok(x),
                    other => Err(other),
                }
            }

            #[inline]
            fn is_bound(&self) -> bool {
                $t::is_bound(self)
            }

            #[inline]
            fn equals(&self, other: &Self) -> Result<bool, TermError> {
                $t::equals(self, other)
            }
        }

        impl From<$t> for Payload {
            #[inline]
            fn from(v: $t) -> Self { Payload::$t(v) }
        }

        impl From<$t> for Term {
            #[inline]
            fn from(v: $t) -> Self { Term(Some(Payload::$t(v))) }
        }

        impl TryFrom<Term> for $t {
            type Error = TermError;

            #[inline]
            fn try_from(mut term: Term) -> Result<Self, TermError> {
                term.extract()
            }
        }

        impl TryFrom<&Term> for $t {
            type Error = TermError;

            #[inline]
            fn try_from(term: &Term) -> Result<Self, TermError> {
                term.to()
            }
        }
    )*};
}
impl_concrete!(Atom, Integer, Float, Binary, Tuple, List);

/// A generic, type-erased term.
///
/// A `Term` is either empty or holds one [`Payload`].  Cloning deep-copies
/// the payload.  [`Term::take`] moves the payload out and leaves the
/// source empty, after which every value access on it fails with
/// [`TermError::Unbound`].
///
/// ```rust
/// # use bound_terms::{Atom, Float, List, Term, TermError, Tuple, tuple};
/// let t = Term::from(tuple![Atom::new("hello"), Atom::new("world")]);
/// assert_eq!(t.cast::<Tuple>()?.size()?, 2);
/// assert!(matches!(t.cast::<List>(), Err(TermError::Incompatible { .. })));
/// assert!(!Term::atom("a").equals(&Term::float(1.0))?);
/// # Ok::<(), TermError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Term(pub(crate) Option<Payload>);

impl Term {
    /// Construct an empty term.
    #[inline]
    pub const fn new() -> Self {
        Self(None)
    }

    /// Construct a term holding a bound atom.
    #[inline]
    pub fn atom(name: impl Into<smartstring::alias::String>) -> Self {
        Atom::new(name).into()
    }

    /// Construct a term holding a bound integer.
    #[inline]
    pub fn int(i: impl Into<i64>) -> Self {
        Integer::new(i).into()
    }

    /// Construct a term holding a bound float.
    #[inline]
    pub fn float(f: impl Into<f64>) -> Self {
        Float::new(f).into()
    }

    /// Construct a term holding a bound binary.
    #[inline]
    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Binary::new(bytes).into()
    }

    /// Returns `true` if no payload is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns `true` if a payload is held and it is bound.  For
    /// sequences this checks every element recursively.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.0.as_ref().is_some_and(Payload::is_bound)
    }

    /// Kind of the held payload, if any.
    #[inline]
    pub fn kind(&self) -> Option<Kind> {
        self.0.as_ref().map(Payload::kind)
    }

    #[inline]
    pub fn payload(&self) -> Option<&Payload> {
        self.0.as_ref()
    }

    #[inline]
    pub fn payload_mut(&mut self) -> Option<&mut Payload> {
        self.0.as_mut()
    }

    /// Discards the held payload and rebinds to `value`, which may be of a
    /// different kind.
    #[inline]
    pub fn assign(&mut self, value: impl Into<Term>) {
        *self = value.into();
    }

    /// Moves the payload out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Term {
        core::mem::take(self)
    }

    /// Drops the payload, leaving `self` empty.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Compares two generic terms.
    ///
    /// Fails with [`TermError::Unbound`] if either side is empty.  Terms of
    /// different kinds are unequal.  Otherwise the concrete kind's pure
    /// equality decides; it never binds anything.
    pub fn equals(&self, other: &Term) -> Result<bool, TermError> {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.equals(b),
            _ => Err(TermError::Unbound),
        }
    }

    /// Compares against a concrete value.  `false` if the held kind
    /// differs from `T`.
    pub fn eq_value<T: Concrete>(&self, value: &T) -> Result<bool, TermError> {
        let payload = self.0.as_ref().ok_or(TermError::Unbound)?;
        match T::from_payload(payload) {
            Some(held) => held.equals(value),
            None => Ok(false),
        }
    }

    /// Borrows the held value as kind `T`.
    pub fn cast<T: Concrete>(&self) -> Result<&T, TermError> {
        let payload = self.0.as_ref().ok_or(TermError::Unbound)?;
        T::from_payload(payload).ok_or(TermError::Incompatible {
            expected: T::KIND.name(),
            found: payload.kind().name(),
        })
    }

    /// Mutably borrows the held value as kind `T`.
    pub fn cast_mut<T: Concrete>(&mut self) -> Result<&mut T, TermError> {
        let payload = self.0.as_mut().ok_or(TermError::Unbound)?;
        let found = payload.kind();
        T::from_payload_mut(payload).ok_or(TermError::Incompatible {
            expected: T::KIND.name(),
            found: found.name(),
        })
    }

    /// Moves the held value out as kind `T`, leaving `self` empty.  On
    /// kind mismatch `self` is left unchanged.
    pub fn extract<T: Concrete>(&mut self) -> Result<T, TermError> {
        let payload = self.0.take().ok_or(TermError::Unbound)?;
        match T::from_payload_owned(payload) {
            Ok(value) => Ok(value),
            Err(payload) => {
                let found = payload.kind();
                self.0 = Some(payload);
                Err(TermError::Incompatible {
                    expected: T::KIND.name(),
                    found: found.name(),
                })
            }
        }
    }

    /// Copies the held value out as kind `T`.
    #[inline]
    pub fn to<T: Concrete>(&self) -> Result<T, TermError> {
        self.cast::<T>().cloned()
    }
}

impl From<Payload> for Term {
    #[inline]
    fn from(payload: Payload) -> Self {
        Term(Some(payload))
    }
}
