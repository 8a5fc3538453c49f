//! Defines [`Sequence`], an ordered collection of [`Term`]s, and its two
//! structurally incompatible kinds [`Tuple`] and [`List`].

use crate::{Binding, Kind, Term, TermError};
use core::fmt;
use core::marker::PhantomData;
use std::collections::VecDeque;
use std::collections::vec_deque;

/// Static description of a sequence kind.
pub trait SequenceKind: Copy + fmt::Debug + Default + 'static {
    const KIND: Kind;

    /// Opening and closing delimiters used when rendering.
    const DELIMITERS: (&'static str, &'static str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TupleKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ListKind;

impl SequenceKind for TupleKind {
    const KIND: Kind = Kind::Tuple;
    const DELIMITERS: (&'static str, &'static str) = ("(", ")");
}

impl SequenceKind for ListKind {
    const KIND: Kind = Kind::List;
    const DELIMITERS: (&'static str, &'static str) = ("[", "]");
}

/// An ordered, index-addressable sequence of generic [`Term`]s.
///
/// The sequence has its own binding slot, separate from the binding of
/// its elements.  An unbound sequence holds no elements at all; pushing
/// into it binds it.  The sequence as a whole counts as bound only when
/// its slot is set and every element is (recursively) bound, see
/// [`Sequence::is_bound`] and [`Sequence::has_value`].
///
/// Sequences of different kinds never compare equal, even with
/// identical contents.
///
/// ```rust
/// # use bound_terms::{tuple, Atom, Binary, TermError};
/// let t = tuple![Atom::new("hello"), Binary::new(&b"world"[..])];
/// assert_eq!(t.size()?, 2);
/// assert!(t.front()?.unwrap().eq_value(&Atom::new("hello"))?);
/// # Ok::<(), TermError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sequence<K: SequenceKind> {
    items: Binding<VecDeque<Term>>,
    kind: PhantomData<K>,
}

/// A fixed-shape product of terms, rendered as `(a, b)`.
pub type Tuple = Sequence<TupleKind>;
/// A sequence of terms, rendered as `[a, b]`.
pub type List = Sequence<ListKind>;

impl<K: SequenceKind> Default for Sequence<K> {
    #[inline]
    fn default() -> Self {
        Self::unbound()
    }
}

impl<K: SequenceKind> Sequence<K> {
    /// Construct an unbound sequence.
    #[inline]
    pub fn unbound() -> Self {
        Self {
            items: Binding::unbound(),
            kind: PhantomData,
        }
    }

    /// Construct a bound sequence holding `terms` in iteration order.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        Self {
            items: Binding::bound(terms.into_iter().collect()),
            kind: PhantomData,
        }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        K::KIND
    }

    /// Returns `true` if the sequence's own slot is set, regardless of
    /// whether its elements are bound.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.items.is_bound()
    }

    /// Returns `true` if the sequence's slot is set and every element is
    /// bound, recursively.
    pub fn is_bound(&self) -> bool {
        self.items
            .get()
            .is_ok_and(|items| items.iter().all(Term::is_bound))
    }

    #[inline]
    pub(crate) fn elements(&self) -> Result<&VecDeque<Term>, TermError> {
        self.items.get()
    }

    /// Number of elements.  Fails if the sequence is unbound.
    #[inline]
    pub fn size(&self) -> Result<usize, TermError> {
        Ok(self.items.get()?.len())
    }

    /// Inserts `term` at the front, binding the sequence.
    pub fn push_front(&mut self, term: impl Into<Term>) {
        self.items.get_or_bind_with(VecDeque::new).push_front(term.into());
    }

    /// Inserts `term` at the back, binding the sequence.
    pub fn push_back(&mut self, term: impl Into<Term>) {
        self.items.get_or_bind_with(VecDeque::new).push_back(term.into());
    }

    /// Removes the first element.  `Ok(None)` when bound but empty.
    pub fn pop_front(&mut self) -> Result<Option<Term>, TermError> {
        Ok(self.items.get_mut()?.pop_front())
    }

    /// Removes the last element.  `Ok(None)` when bound but empty.
    pub fn pop_back(&mut self) -> Result<Option<Term>, TermError> {
        Ok(self.items.get_mut()?.pop_back())
    }

    pub fn front(&self) -> Result<Option<&Term>, TermError> {
        Ok(self.items.get()?.front())
    }

    pub fn back(&self) -> Result<Option<&Term>, TermError> {
        Ok(self.items.get()?.back())
    }

    pub fn front_mut(&mut self) -> Result<Option<&mut Term>, TermError> {
        Ok(self.items.get_mut()?.front_mut())
    }

    pub fn back_mut(&mut self) -> Result<Option<&mut Term>, TermError> {
        Ok(self.items.get_mut()?.back_mut())
    }

    /// Element at `index`.  `Ok(None)` when out of range.
    pub fn get(&self, index: usize) -> Result<Option<&Term>, TermError> {
        Ok(self.items.get()?.get(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut Term>, TermError> {
        Ok(self.items.get_mut()?.get_mut(index))
    }

    /// Iterates over the elements in order.  An unbound sequence yields
    /// nothing.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.items.get().ok().map(|items| items.iter()),
        }
    }

    /// Removes every element but keeps the sequence bound.
    pub fn clear(&mut self) -> Result<(), TermError> {
        self.items.get_mut()?.clear();
        Ok(())
    }

    /// Exchanges binding state and contents with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
    }

    /// Moves this sequence out, leaving `self` unbound.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Pure structural equality.
    ///
    /// Fails with [`TermError::Unbound`] when either sequence's own slot
    /// is unset.  Sequences of different lengths are unequal.  When one
    /// side still has free elements and the other is fully bound, the
    /// answer is whether [`Sequence::match_only`] finds the free side
    /// compatible; nothing is bound.  Two partially bound sides fail with
    /// [`TermError::Unbound`].
    pub fn equals(&self, other: &Self) -> Result<bool, TermError> {
        let (xs, ys) = (self.items.get()?, other.items.get()?);
        if xs.len() != ys.len() {
            return Ok(false);
        }
        match (self.is_bound(), other.is_bound()) {
            (false, _) => return self.match_only(other),
            (true, false) => return other.match_only(self),
            (true, true) => {}
        }
        for (x, y) in xs.iter().zip(ys) {
            if !x.equals(y)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<K: SequenceKind> FromIterator<Term> for Sequence<K> {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

/// Iterator over the elements of a [`Sequence`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: Option<vec_deque::Iter<'a, Term>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Term;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), |it| it.size_hint())
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a, K: SequenceKind> IntoIterator for &'a Sequence<K> {
    type Item = &'a Term;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a bound [`Tuple`] from its elements, in written order.  Each
/// argument may be any value convertible into a [`Term`].
#[macro_export]
macro_rules! tuple {
    ($($arg:expr),* $(,)?) => {
        $crate::Tuple::from_terms([$($crate::Term::from($arg)),*])
    };
}

/// Builds a bound [`List`] from its elements, in written order.  Each
/// argument may be any value convertible into a [`Term`].
#[macro_export]
macro_rules! list {
    ($($arg:expr),* $(,)?) => {
        $crate::List::from_terms([$($crate::Term::from($arg)),*])
    };
}
