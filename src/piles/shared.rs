//! Shared pile handles.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use super::Pile;
use crate::history::PileSnapshot;

/// Identity of a pile instance, independent of its contents.
///
/// Two handles report the same identity iff they point at the same pile.
/// Stable for as long as any handle to the pile is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PileIdentity(usize);

/// Reference-counted handle to a pile.
///
/// The engine and any live snapshots share the pile. The engine is
/// single-threaded and never holds a borrow across calls, so borrows do not
/// conflict.
#[derive(Debug)]
pub struct SharedPile<P> {
    inner: Rc<RefCell<P>>,
}

impl<P> Clone for SharedPile<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: Default> Default for SharedPile<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P> SharedPile<P> {
    /// Wrap a pile in a new handle.
    #[must_use]
    pub fn new(pile: P) -> Self {
        Self {
            inner: Rc::new(RefCell::new(pile)),
        }
    }

    /// Borrow the pile for reading.
    pub fn borrow(&self) -> Ref<'_, P> {
        self.inner.borrow()
    }

    /// Borrow the pile for mutation.
    pub fn borrow_mut(&self) -> RefMut<'_, P> {
        self.inner.borrow_mut()
    }

    /// Identity of the pile behind this handle.
    #[must_use]
    pub fn identity(&self) -> PileIdentity {
        PileIdentity(Rc::as_ptr(&self.inner) as *const () as usize)
    }

    /// Check if both handles point at the same pile.
    #[must_use]
    pub fn is_same_pile(&self, other: &SharedPile<P>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<P: Pile> SharedPile<P> {
    /// Capture the pile's current state, bound to this pile for restoring.
    #[must_use]
    pub fn create_snapshot(&self) -> PileSnapshot<P> {
        PileSnapshot::new(self.clone())
    }
}
