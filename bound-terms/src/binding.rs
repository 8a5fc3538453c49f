//! Defines [`Binding`], the bound/unbound slot shared by every concrete
//! term kind.

use crate::TermError;

/// A slot that is either unbound or holds exactly one value.
///
/// Every accessor that needs the value returns [`TermError::Unbound`]
/// when the slot is empty.  Moving the value out with [`Binding::take`]
/// leaves the slot unbound.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<T> {
    slot: Option<T>,
}

impl<T> Default for Binding<T> {
    #[inline]
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> Binding<T> {
    /// Create an unbound slot.
    #[inline]
    pub const fn unbound() -> Self {
        Self { slot: None }
    }

    /// Create a slot bound to `value`.
    #[inline]
    pub const fn bound(value: T) -> Self {
        Self { slot: Some(value) }
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.slot.is_some()
    }

    /// Bind the slot, replacing any previous value.
    #[inline]
    pub fn bind(&mut self, value: T) {
        self.slot = Some(value);
    }

    /// Returns the value, or [`TermError::Unbound`].
    #[inline]
    pub fn get(&self) -> Result<&T, TermError> {
        self.slot.as_ref().ok_or(TermError::Unbound)
    }

    /// Returns the value mutably, or [`TermError::Unbound`].
    #[inline]
    pub fn get_mut(&mut self) -> Result<&mut T, TermError> {
        self.slot.as_mut().ok_or(TermError::Unbound)
    }

    /// Returns the value, binding the slot with `init` first if it is
    /// unbound.
    #[inline]
    pub fn get_or_bind_with(&mut self, init: impl FnOnce() -> T) -> &mut T {
        self.slot.get_or_insert_with(init)
    }

    /// Moves the value out and leaves the slot unbound.
    #[inline]
    pub fn take(&mut self) -> Result<T, TermError> {
        self.slot.take().ok_or(TermError::Unbound)
    }

    /// Exchanges the state and contents of two slots.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.slot, &mut other.slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_by_default() {
        let b: Binding<i64> = Binding::default();
        assert!(!b.is_bound());
        assert_eq!(b.get(), Err(TermError::Unbound));
    }

    #[test]
    fn take_unbinds() {
        let mut b = Binding::bound(7);
        assert_eq!(b.take(), Ok(7));
        assert!(!b.is_bound());
        assert_eq!(b.take(), Err(TermError::Unbound));
    }

    #[test]
    fn get_or_bind_with_binds_once() {
        let mut b: Binding<Vec<u8>> = Binding::unbound();
        b.get_or_bind_with(Vec::new).push(1);
        b.get_or_bind_with(|| vec![9, 9]).push(2);
        assert_eq!(b.get().unwrap(), &vec![1, 2]);
    }

    #[test]
    fn swap_exchanges_state() {
        let mut a = Binding::bound(1);
        let mut b = Binding::unbound();
        a.swap(&mut b);
        assert!(!a.is_bound());
        assert_eq!(b.get(), Ok(&1));
    }
}
