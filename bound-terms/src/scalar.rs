//! Defines [`Scalar`], a typed term holding one primitive value, and the
//! four scalar kinds [`Atom`], [`Integer`], [`Float`] and [`Binary`].

use crate::display::{write_atom_str, write_bin_hex, write_real};
use crate::{Binding, Kind, TermError};
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use smartstring::alias::String;

/// Static description of a scalar kind: the primitive it stores, the
/// runtime [`Kind`] tag, and how the value is rendered.
pub trait ScalarKind: Copy + fmt::Debug + Default + 'static {
    type Value: Clone + PartialEq + PartialOrd + fmt::Debug;

    const KIND: Kind;

    fn write_value(value: &Self::Value, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AtomKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntegerKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FloatKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BinaryKind;

impl ScalarKind for AtomKind {
    type Value = String;
    const KIND: Kind = Kind::Atom;

    fn write_value(value: &String, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_atom_str(f, value)
    }
}

impl ScalarKind for IntegerKind {
    type Value = i64;
    const KIND: Kind = Kind::Integer;

    fn write_value(value: &i64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{value}")
    }
}

impl ScalarKind for FloatKind {
    type Value = f64;
    const KIND: Kind = Kind::Float;

    fn write_value(value: &f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_real(f, *value)
    }
}

impl ScalarKind for BinaryKind {
    type Value = Vec<u8>;
    const KIND: Kind = Kind::Binary;

    fn write_value(value: &Vec<u8>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bin_hex(f, value)
    }
}

/// A term holding a single primitive value of kind `K`, or nothing.
///
/// A scalar is created unbound by [`Scalar::unbound`] (or `Default`) and
/// becomes bound when given a value, either at construction or through
/// [`Scalar::bind`].  Moving the value out with [`Scalar::take`] or
/// [`Scalar::swap_out`] leaves the scalar unbound again.
///
/// Every comparison requires a value: comparing an unbound scalar fails
/// with [`TermError::Unbound`].
///
/// ```rust
/// # use bound_terms::{Atom, TermError};
/// let a = Atom::new("hello_world");
/// assert!(a.eq_literal("hello_world")?);
///
/// let free = Atom::unbound();
/// assert_eq!(free.eq_literal("x"), Err(TermError::Unbound));
/// # Ok::<(), TermError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scalar<K: ScalarKind> {
    value: Binding<K::Value>,
    kind: PhantomData<K>,
}

/// An interned-string-like token.
pub type Atom = Scalar<AtomKind>;
/// A 64-bit signed integer.
pub type Integer = Scalar<IntegerKind>;
/// A 64-bit IEEE-754 floating point value.
pub type Float = Scalar<FloatKind>;
/// An opaque byte sequence.
pub type Binary = Scalar<BinaryKind>;

impl<K: ScalarKind> Default for Scalar<K> {
    #[inline]
    fn default() -> Self {
        Self::unbound()
    }
}

impl<K: ScalarKind> Scalar<K> {
    /// Construct a bound scalar.
    #[inline]
    pub fn new(value: impl Into<K::Value>) -> Self {
        Self {
            value: Binding::bound(value.into()),
            kind: PhantomData,
        }
    }

    /// Construct an unbound scalar.
    #[inline]
    pub fn unbound() -> Self {
        Self {
            value: Binding::unbound(),
            kind: PhantomData,
        }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        K::KIND
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.value.is_bound()
    }

    /// Bind to `value`, replacing any previous value.
    #[inline]
    pub fn bind(&mut self, value: impl Into<K::Value>) {
        self.value.bind(value.into());
    }

    /// Returns the held value, or [`TermError::Unbound`].
    #[inline]
    pub fn value(&self) -> Result<&K::Value, TermError> {
        self.value.get()
    }

    /// Moves this scalar out, leaving `self` unbound.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Moves the held value out, leaving `self` unbound.
    #[inline]
    pub fn take_value(&mut self) -> Result<K::Value, TermError> {
        self.value.take()
    }

    /// Moves the held value into `slot` and marks `self` unbound.
    pub fn swap_out(&mut self, slot: &mut K::Value) -> Result<(), TermError> {
        *slot = self.take_value()?;
        Ok(())
    }

    /// Compares two scalars of the same kind.  Fails if either is unbound.
    pub fn equals(&self, other: &Self) -> Result<bool, TermError> {
        Ok(self.value()? == other.value()?)
    }

    /// Compares the held value with a raw literal.
    pub fn eq_literal<Q>(&self, literal: &Q) -> Result<bool, TermError>
    where
        K::Value: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        Ok(self.value()?.borrow() == literal)
    }

    /// Orders the held value against a raw literal.  `None` when the two
    /// are unordered (a `NaN` float).
    pub fn compare<Q>(&self, literal: &Q) -> Result<Option<Ordering>, TermError>
    where
        K::Value: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        Ok(self.value()?.borrow().partial_cmp(literal))
    }

    pub fn lt<Q>(&self, literal: &Q) -> Result<bool, TermError>
    where
        K::Value: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        Ok(self.value()?.borrow() < literal)
    }

    pub fn le<Q>(&self, literal: &Q) -> Result<bool, TermError>
    where
        K::Value: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        Ok(self.value()?.borrow() <= literal)
    }

    /// Fails with [`TermError::Unbound`] when unset, like every other
    /// comparison.
    pub fn gt<Q>(&self, literal: &Q) -> Result<bool, TermError>
    where
        K::Value: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        Ok(self.value()?.borrow() > literal)
    }

    /// Fails with [`TermError::Unbound`] when unset.
    pub fn ge<Q>(&self, literal: &Q) -> Result<bool, TermError>
    where
        K::Value: Borrow<Q>,
        Q: PartialOrd + ?Sized,
    {
        Ok(self.value()?.borrow() >= literal)
    }
}

macro_rules! impl_from_values_for_scalar {
    ($scalar:ty => $($t:ty),* $(,)?) => {$(
        impl From<$t> for $scalar {
            #[inline]
            fn from(v: $t) -> Self { Self::new(v) }
        }
    )*};
}
impl_from_values_for_scalar!(Atom => &str, String, std::string::String);
impl_from_values_for_scalar!(Integer => i8, i16, i32, i64, u8, u16, u32);
impl_from_values_for_scalar!(Float => f32, f64);
impl_from_values_for_scalar!(Binary => &[u8], Vec<u8>);
