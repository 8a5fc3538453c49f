//! Two-phase structural matching of a pattern against a value.
//!
//! Unification binds the free positions of a *pattern* to the
//! corresponding parts of a fully bound *value*.  It runs in two phases:
//!
//! 1. [`match_only`] walks both terms without mutating anything.  Bound
//!    pattern positions must equal the value; free positions must agree
//!    in kind (and, for partially bound sequences, in length,
//!    recursively).  Every free position is recorded as an index path
//!    from the root.
//! 2. `assign_matched` runs only if phase one succeeded, and replaces
//!    each recorded pattern position with a clone of the value at the
//!    same path.
//!
//! A failed match therefore leaves the pattern exactly as it was.  Only
//! the pattern is ever bound; the value side is read-only.
//!
//! ```rust
//! # use bound_terms::{tuple, Atom, Binary, Term, TermError, Tuple};
//! let value = Term::from(tuple![Atom::new("hello"), Binary::new(&b"world"[..])]);
//! let mut pattern = Term::from(tuple![Atom::new("hello"), Binary::unbound()]);
//!
//! assert!(pattern.unify(&value)?);
//! let bound = pattern.cast::<Tuple>()?.back()?.unwrap();
//! assert!(bound.eq_value(&Binary::new(&b"world"[..]))?);
//! # Ok::<(), TermError>(())
//! ```

use crate::{Payload, Sequence, SequenceKind, Term, TermError};

/// Index path from a root to one of its (transitive) elements.
type Path = Vec<usize>;

/// Free pattern positions collected by phase one.
#[derive(Debug, Default)]
struct MatchPlan {
    slots: Vec<Path>,
}

impl MatchPlan {
    #[inline]
    fn record(&mut self, path: &[usize]) {
        self.slots.push(path.to_vec());
    }
}

/// Binds the free positions of `pattern` to the matching parts of
/// `value`, if and only if the whole match is feasible.
///
/// * An empty `pattern` binds to a copy of `value`.
/// * Kinds that differ at the root give `Ok(false)`.
/// * `value` must be fully bound, otherwise [`TermError::Unbound`].
/// * A root sequence in `pattern` must have its own slot set, otherwise
///   [`TermError::Unbound`], as with [`Sequence::unify`].  Nested
///   sequences without a shape are free positions of their kind.
///
/// Returns `Ok(true)` when the match succeeded and was committed, and
/// `Ok(false)` when it was rejected, in which case `pattern` is left
/// untouched.
pub fn unify(pattern: &mut Term, value: &Term) -> Result<bool, TermError> {
    let Some(plan) = plan_term_root(pattern, value)? else {
        return Ok(false);
    };
    assign_matched(pattern, value, plan);
    Ok(true)
}

/// Checks whether [`unify`] would succeed, without binding anything.
pub fn match_only(pattern: &Term, value: &Term) -> Result<bool, TermError> {
    Ok(plan_term_root(pattern, value)?.is_some())
}

fn plan_term_root(pattern: &Term, value: &Term) -> Result<Option<MatchPlan>, TermError> {
    let Some(found) = value.kind() else {
        return Err(TermError::Unbound);
    };
    if pattern.kind().is_some_and(|expected| expected != found) {
        log::trace!("unify: root kind mismatch, {:?} against {found}", pattern.kind());
        return Ok(None);
    }
    if !value.is_bound() {
        return Err(TermError::Unbound);
    }
    match pattern.payload() {
        Some(Payload::Tuple(x)) if !x.has_value() => return Err(TermError::Unbound),
        Some(Payload::List(x)) if !x.has_value() => return Err(TermError::Unbound),
        _ => {}
    }
    let mut plan = MatchPlan::default();
    let mut path = Path::new();
    if plan_term(pattern, value, &mut path, &mut plan)? {
        log::trace!("unify: feasible, {} free position(s)", plan.slots.len());
        Ok(Some(plan))
    } else {
        Ok(None)
    }
}

/// Phase one for a single position.  `b` is known to be fully bound.
fn plan_term(a: &Term, b: &Term, path: &mut Path, plan: &mut MatchPlan) -> Result<bool, TermError> {
    let Some(pa) = a.payload() else {
        plan.record(path);
        return Ok(true);
    };
    let pb = b.payload().ok_or(TermError::Unbound)?;
    if pa.is_bound() {
        let equal = pa.equals(pb)?;
        if !equal {
            log::trace!("unify: bound position {path:?} differs");
        }
        return Ok(equal);
    }
    match (pa, pb) {
        (Payload::Tuple(x), Payload::Tuple(y)) => plan_sequence(x, y, path, plan),
        (Payload::List(x), Payload::List(y)) => plan_sequence(x, y, path, plan),
        _ if pa.kind() == pb.kind() => {
            plan.record(path);
            Ok(true)
        }
        _ => {
            log::trace!(
                "unify: free {} at {path:?} against {}",
                pa.kind(),
                pb.kind()
            );
            Ok(false)
        }
    }
}

/// Phase one for a pattern sequence that is not fully bound.
fn plan_sequence<K: SequenceKind>(
    a: &Sequence<K>,
    b: &Sequence<K>,
    path: &mut Path,
    plan: &mut MatchPlan,
) -> Result<bool, TermError> {
    let Ok(xs) = a.elements() else {
        // no shape yet: the whole sequence is a free position
        plan.record(path);
        return Ok(true);
    };
    let ys = b.elements()?;
    if xs.len() != ys.len() {
        log::trace!(
            "unify: {} length {} against {} at {path:?}",
            K::KIND,
            xs.len(),
            ys.len()
        );
        return Ok(false);
    }
    for (i, (x, y)) in xs.iter().zip(ys).enumerate() {
        path.push(i);
        let feasible = plan_term(x, y, path, plan)?;
        path.pop();
        if !feasible {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Phase two: copies the value into every recorded pattern position.
fn assign_matched(pattern: &mut Term, value: &Term, plan: MatchPlan) {
    for path in &plan.slots {
        let source = resolve(value, path).expect("path recorded by match_only");
        let slot = resolve_mut(pattern, path).expect("path recorded by match_only");
        *slot = source.clone();
    }
    log::trace!("unify: committed {} binding(s)", plan.slots.len());
}

fn element(term: &Term, index: usize) -> Option<&Term> {
    match term.payload()? {
        Payload::Tuple(x) => x.get(index).ok().flatten(),
        Payload::List(x) => x.get(index).ok().flatten(),
        _ => None,
    }
}

fn element_mut(term: &mut Term, index: usize) -> Option<&mut Term> {
    match term.payload_mut()? {
        Payload::Tuple(x) => x.get_mut(index).ok().flatten(),
        Payload::List(x) => x.get_mut(index).ok().flatten(),
        _ => None,
    }
}

fn resolve<'a>(root: &'a Term, path: &[usize]) -> Option<&'a Term> {
    path.iter().try_fold(root, |term, &i| element(term, i))
}

fn resolve_mut<'a>(root: &'a mut Term, path: &[usize]) -> Option<&'a mut Term> {
    path.iter().try_fold(root, |term, &i| element_mut(term, i))
}

impl Term {
    /// Unifies `self`, as the pattern, with `value`.  See [`unify`].
    #[inline]
    pub fn unify(&mut self, value: &Term) -> Result<bool, TermError> {
        unify(self, value)
    }

    /// Checks whether [`Term::unify`] would succeed without binding.
    #[inline]
    pub fn match_only(&self, value: &Term) -> Result<bool, TermError> {
        match_only(self, value)
    }
}

impl<K: SequenceKind> Sequence<K> {
    /// Unifies this sequence, as the pattern, with `value`.
    ///
    /// Fails with [`TermError::Unbound`] if this sequence's own slot is
    /// unset or if `value` is not fully bound.  A fully bound pattern
    /// reduces to [`Sequence::equals`].
    pub fn unify(&mut self, value: &Self) -> Result<bool, TermError> {
        let Some(plan) = self.plan(value)? else {
            return Ok(false);
        };
        for path in &plan.slots {
            let (&first, rest) = path.split_first().expect("sequence paths are never empty");
            let source = value
                .get(first)
                .ok()
                .flatten()
                .and_then(|t| resolve(t, rest))
                .expect("path recorded by match_only");
            let slot = self
                .get_mut(first)
                .ok()
                .flatten()
                .and_then(|t| resolve_mut(t, rest))
                .expect("path recorded by match_only");
            *slot = source.clone();
        }
        log::trace!("unify: committed {} binding(s)", plan.slots.len());
        Ok(true)
    }

    /// Checks whether [`Sequence::unify`] would succeed without binding.
    pub fn match_only(&self, value: &Self) -> Result<bool, TermError> {
        Ok(self.plan(value)?.is_some())
    }

    fn plan(&self, value: &Self) -> Result<Option<MatchPlan>, TermError> {
        self.elements()?;
        if !value.is_bound() {
            return Err(TermError::Unbound);
        }
        let mut plan = MatchPlan::default();
        if plan_sequence(self, value, &mut Path::new(), &mut plan)? {
            Ok(Some(plan))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list, tuple, Atom, Binary, Float, Integer, List, Tuple};
    use proptest::prelude::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn hello_world() -> Term {
        Term::from(tuple![
            Atom::new("hello"),
            tuple![Atom::new("hello"), Binary::new(&b"world"[..])]
        ])
    }

    #[test]
    fn binds_nested_free_element() {
        init();
        let t = hello_world();
        let a = Atom::new("hello");
        let b = Binary::unbound();
        let mut pattern = Term::from(tuple![a.clone(), tuple![a, b]]);
        assert!(!pattern.is_bound());

        assert_eq!(pattern.unify(&t), Ok(true));
        assert!(pattern.is_bound());
        assert!(pattern.equals(&t).unwrap());

        let inner = pattern.cast::<Tuple>().unwrap().back().unwrap().unwrap();
        let b = inner.cast::<Tuple>().unwrap().back().unwrap().unwrap();
        assert!(b.eq_value(&Binary::new(&b"world"[..])).unwrap());
    }

    #[test]
    fn mismatch_leaves_pattern_untouched() {
        init();
        let t = hello_world();
        let mut pattern = Term::from(tuple![
            Atom::new("goodbye"),
            tuple![Atom::new("hello"), Binary::unbound()]
        ]);
        assert_eq!(pattern.unify(&t), Ok(false));

        let inner = pattern.cast::<Tuple>().unwrap().back().unwrap().unwrap();
        let b = inner.cast::<Tuple>().unwrap().back().unwrap().unwrap();
        assert!(!b.is_bound());
        assert_eq!(b.kind(), Some(crate::Kind::Binary));
    }

    #[test]
    fn late_mismatch_does_not_bind_earlier_positions() {
        init();
        let value = Term::from(tuple![Integer::new(1), Integer::new(2)]);
        let mut pattern = Term::from(tuple![Integer::unbound(), Integer::new(3)]);
        assert_eq!(pattern.unify(&value), Ok(false));
        let first = pattern.cast::<Tuple>().unwrap().front().unwrap().unwrap();
        assert!(!first.is_bound());
    }

    #[test]
    fn free_scalar_requires_same_kind() {
        let value = Term::from(tuple![Atom::new("x")]);
        let mut pattern = Term::from(tuple![Integer::unbound()]);
        assert_eq!(pattern.unify(&value), Ok(false));
        assert!(!pattern.is_bound());
    }

    #[test]
    fn empty_element_binds_any_kind() {
        let value = Term::from(list![Float::new(1.5), Atom::new("y")]);
        let mut pattern = Term::from(list![Term::new(), Term::new()]);
        assert_eq!(pattern.unify(&value), Ok(true));
        assert!(pattern.equals(&value).unwrap());
    }

    #[test]
    fn empty_pattern_binds_whole_value() {
        let value = hello_world();
        let mut pattern = Term::new();
        assert_eq!(pattern.unify(&value), Ok(true));
        assert!(pattern.equals(&value).unwrap());
    }

    #[test]
    fn shapeless_sequence_binds_same_kind_only() {
        let value = hello_world();
        let mut ok = Term::from(tuple![Atom::new("hello"), Tuple::unbound()]);
        assert_eq!(ok.unify(&value), Ok(true));
        assert!(ok.equals(&value).unwrap());

        let mut wrong = Term::from(tuple![Atom::new("hello"), List::unbound()]);
        assert_eq!(wrong.unify(&value), Ok(false));
    }

    #[test]
    fn length_mismatch_fails() {
        let value = Term::from(list![Integer::new(1), Integer::new(2)]);
        let mut pattern = Term::from(list![Integer::unbound()]);
        assert_eq!(pattern.unify(&value), Ok(false));
    }

    #[test]
    fn kind_tags_never_unify() {
        let value = Term::from(list![Atom::new("hello"), Binary::new(&b"world"[..])]);
        let mut pattern = Term::from(tuple![Atom::new("hello"), Binary::unbound()]);
        assert_eq!(pattern.unify(&value), Ok(false));

        let shape_only = Term::from(List::unbound());
        let mut other = Term::from(Tuple::unbound());
        assert_eq!(other.unify(&shape_only), Ok(false));
    }

    #[test]
    fn partially_bound_value_fails() {
        let value = Term::from(tuple![Atom::new("a"), Binary::unbound()]);
        let mut pattern = Term::from(tuple![Atom::unbound(), Binary::unbound()]);
        assert_eq!(pattern.unify(&value), Err(TermError::Unbound));
        assert_eq!(Term::new().unify(&Term::new()), Err(TermError::Unbound));
    }

    #[test]
    fn bound_pattern_reduces_to_equality() {
        let value = hello_world();
        let mut same = hello_world();
        assert_eq!(same.unify(&value), Ok(true));
        let mut other = Term::from(tuple![Atom::new("x")]);
        assert_eq!(other.unify(&value), Ok(false));
        let mut scalar = Term::int(4);
        assert_eq!(scalar.unify(&Term::int(4)), Ok(true));
        assert_eq!(scalar.unify(&Term::int(5)), Ok(false));
    }

    #[test]
    fn match_only_does_not_bind() {
        let value = hello_world();
        let pattern = Term::from(tuple![Atom::new("hello"), Tuple::unbound()]);
        assert_eq!(pattern.match_only(&value), Ok(true));
        assert!(!pattern.is_bound());
    }

    #[test]
    fn sequence_unify_binds_in_place() {
        init();
        let value = tuple![Atom::new("hello"), Binary::new(&b"world"[..])];
        let mut pattern = tuple![Atom::new("hello"), Binary::unbound()];
        assert_eq!(pattern.match_only(&value), Ok(true));
        assert!(!pattern.is_bound());
        assert_eq!(pattern.unify(&value), Ok(true));
        assert!(pattern.is_bound());
        let b = pattern.back().unwrap().unwrap();
        assert!(b.eq_value(&Binary::new(&b"world"[..])).unwrap());
    }

    #[test]
    fn sequence_unify_requires_pattern_slot() {
        let value = tuple![Atom::new("hello")];
        let mut pattern = Tuple::unbound();
        assert_eq!(pattern.unify(&value), Err(TermError::Unbound));
        let mut bound = tuple![Atom::unbound()];
        assert_eq!(bound.unify(&Tuple::unbound()), Err(TermError::Unbound));
    }

    #[test]
    fn root_sequence_requires_pattern_slot() {
        let value = Term::from(tuple![Atom::new("x")]);
        let mut pattern = Term::from(Tuple::unbound());
        assert_eq!(pattern.unify(&value), Err(TermError::Unbound));
        assert_eq!(pattern.match_only(&value), Err(TermError::Unbound));
        assert!(pattern.cast::<Tuple>().unwrap().size().is_err());
        assert_eq!(
            Tuple::unbound().unify(&tuple![Atom::new("x")]),
            Err(TermError::Unbound)
        );
    }

    #[test]
    fn sequence_unify_mismatch_is_atomic() {
        let value = tuple![Integer::new(1), Integer::new(2), Integer::new(3)];
        let mut pattern = tuple![Integer::unbound(), Integer::unbound(), Integer::new(4)];
        assert_eq!(pattern.unify(&value), Ok(false));
        assert!(pattern.iter().take(2).all(|t| !t.is_bound()));
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

        #[test]
        fn prop_unify_is_atomic(x in any::<i64>(), y in any::<i64>(), z in any::<i64>()) {
            let value = Term::from(tuple![Integer::new(x), Integer::new(y)]);
            let mut pattern = Term::from(tuple![Integer::new(z), Integer::unbound()]);
            let matched = pattern.unify(&value).unwrap();
            let free = pattern.cast::<Tuple>().unwrap().back().unwrap().unwrap();
            if x == z {
                prop_assert!(matched);
                prop_assert!(free.eq_value(&Integer::new(y)).unwrap());
            } else {
                prop_assert!(!matched);
                prop_assert!(!free.is_bound());
            }
        }
    }
}
