//! Observable values that rules re-read on every validation pass.
//!
//! A rule threshold is either fixed at construction or *live*: backed by an
//! [`Observable`] whose current value is read each time the rule runs. Every
//! observable also exposes a monotonically moving revision so validators can
//! tell when a cached evaluation went stale.
//!
//! [`LiveCell`] is the shared cell a validator keeps its value in.
//! [`FieldHandle`] is a non-owning view of another validator's cell, which is
//! what cross-field rules hold.

use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

// ============================================================================
// OBSERVABLE
// ============================================================================

/// A value that can change over time.
pub trait Observable<T> {
    /// Current value.
    fn current(&self) -> T;

    /// Revision counter. Changes whenever [`current`](Self::current) may
    /// return something different.
    fn revision(&self) -> u64;
}

/// A rule parameter that is either fixed or re-read on every pass.
pub enum Live<T> {
    /// Constant for the lifetime of the rule.
    Fixed(T),
    /// Read from an observable source on every pass.
    Tracked(Rc<dyn Observable<T>>),
}

impl<T: Clone> Live<T> {
    /// Current value of the parameter.
    #[must_use]
    pub fn get(&self) -> T {
        match self {
            Self::Fixed(value) => value.clone(),
            Self::Tracked(source) => source.current(),
        }
    }

    /// Revision of the parameter; fixed values never move.
    #[must_use]
    pub fn revision(&self) -> u64 {
        match self {
            Self::Fixed(_) => 0,
            Self::Tracked(source) => source.revision(),
        }
    }

    /// Wraps an arbitrary observable.
    pub fn tracked(source: impl Observable<T> + 'static) -> Self {
        Self::Tracked(Rc::new(source))
    }
}

impl<T> From<T> for Live<T> {
    fn from(value: T) -> Self {
        Self::Fixed(value)
    }
}

impl<T> Clone for Live<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(value) => Self::Fixed(value.clone()),
            Self::Tracked(source) => Self::Tracked(Rc::clone(source)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Live<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Tracked(source) => f
                .debug_struct("Tracked")
                .field("revision", &source.revision())
                .finish_non_exhaustive(),
        }
    }
}

/// Folds the revisions of several live parameters into one rule revision
/// (FNV-1a over the words). Order matters.
#[must_use]
pub fn combined_revision(revisions: &[u64]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    revisions
        .iter()
        .fold(OFFSET, |acc, rev| (acc ^ rev).wrapping_mul(PRIME))
}

// ============================================================================
// LIVE CELL
// ============================================================================

struct Slot<T> {
    value: RefCell<T>,
    revision: Cell<u64>,
}

/// Shared, observable storage for one value.
///
/// Cloning a `LiveCell` yields another owner of the same slot. Every
/// [`set`](Self::set) bumps the revision.
pub struct LiveCell<T> {
    slot: Rc<Slot<T>>,
}

impl<T> LiveCell<T> {
    /// Creates a cell at revision `0`.
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(Slot {
                value: RefCell::new(value),
                revision: Cell::new(0),
            }),
        }
    }

    /// Replaces the value and bumps the revision.
    pub fn set(&self, value: T) {
        *self.slot.value.borrow_mut() = value;
        self.bump();
    }

    /// Mutates the value in place and bumps the revision.
    pub fn update<U>(&self, f: impl FnOnce(&mut T) -> U) -> U {
        let mut guard = self.slot.value.borrow_mut();
        let out = f(&mut *guard);
        drop(guard);
        self.bump();
        out
    }

    /// Borrows the current value.
    ///
    /// # Panics
    ///
    /// Panics if called from inside [`update`](Self::update) on the same cell.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.slot.value.borrow()
    }

    /// Current revision.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.slot.revision.get()
    }

    /// Non-owning handle to this cell.
    #[must_use]
    pub fn handle(&self) -> FieldHandle<T> {
        FieldHandle {
            slot: Rc::downgrade(&self.slot),
        }
    }

    fn bump(&self) {
        self.slot
            .revision
            .set(self.slot.revision.get().wrapping_add(1));
    }
}

impl<T: Clone + 'static> LiveCell<T> {
    /// Current value, cloned.
    #[must_use]
    pub fn get(&self) -> T {
        self.borrow().clone()
    }

    /// A live parameter that follows this cell.
    #[must_use]
    pub fn live(&self) -> Live<T> {
        Live::Tracked(Rc::new(self.clone()))
    }
}

impl<T> Clone for LiveCell<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: Clone> Observable<T> for LiveCell<T> {
    fn current(&self) -> T {
        self.slot.value.borrow().clone()
    }

    fn revision(&self) -> u64 {
        self.slot.revision.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for LiveCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveCell")
            .field("value", &*self.slot.value.borrow())
            .field("revision", &self.slot.revision.get())
            .finish()
    }
}

// ============================================================================
// FIELD HANDLE
// ============================================================================

/// Non-owning handle to another field's value.
///
/// Cross-field rules hold one of these instead of the validator itself, so
/// rules never keep a field alive and mutually referencing fields never form
/// an ownership cycle. Once the field is dropped the handle is *dead*.
pub struct FieldHandle<V> {
    slot: Weak<Slot<V>>,
}

impl<V> FieldHandle<V> {
    /// `true` while the referenced field is alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.slot.strong_count() > 0
    }

    /// Runs `f` on the referenced value, or returns `None` if it is gone.
    pub fn with<U>(&self, f: impl FnOnce(&V) -> U) -> Option<U> {
        let slot = self.slot.upgrade()?;
        let value = slot.value.borrow();
        Some(f(&*value))
    }

    /// Revision of the referenced value; `u64::MAX` once the field is gone.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.slot
            .upgrade()
            .map_or(u64::MAX, |slot| slot.revision.get())
    }
}

impl<V: 'static> FieldHandle<V> {
    /// Derives a live parameter from the referenced value.
    ///
    /// `f` runs on every validation pass; `default` is used once the field is
    /// gone.
    ///
    /// ```rust,ignore
    /// // The confirmation must be at least as long as the original password.
    /// let min = password.handle().map_or(0, |v: &TextFieldValue| v.text.chars().count());
    /// let rule = MinLength::tracking(min);
    /// ```
    pub fn map_or<U>(&self, default: U, f: impl Fn(&V) -> U + 'static) -> Live<U>
    where
        U: Clone + 'static,
    {
        Live::Tracked(Rc::new(Derived {
            handle: self.clone(),
            default,
            project: f,
        }))
    }
}

impl<V> Clone for FieldHandle<V> {
    fn clone(&self) -> Self {
        Self {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<V> fmt::Debug for FieldHandle<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

struct Derived<V, U, F> {
    handle: FieldHandle<V>,
    default: U,
    project: F,
}

impl<V, U, F> Observable<U> for Derived<V, U, F>
where
    U: Clone,
    F: Fn(&V) -> U,
{
    fn current(&self) -> U {
        self.handle
            .with(&self.project)
            .unwrap_or_else(|| self.default.clone())
    }

    fn revision(&self) -> u64 {
        self.handle.revision()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_never_moves() {
        let live = Live::from(5usize);
        assert_eq!(live.get(), 5);
        assert_eq!(live.revision(), 0);
    }

    #[test]
    fn cell_set_bumps_revision() {
        let cell = LiveCell::new(1);
        let live = cell.live();
        assert_eq!(live.revision(), 0);
        cell.set(2);
        assert_eq!(live.get(), 2);
        assert_eq!(live.revision(), 1);
        cell.update(|v| *v += 1);
        assert_eq!(cell.get(), 3);
        assert_eq!(cell.revision(), 2);
    }

    #[test]
    fn handle_reads_without_owning() {
        let cell = LiveCell::new(String::from("abc"));
        let handle = cell.handle();
        assert_eq!(handle.with(String::len), Some(3));
        assert!(handle.is_alive());
        drop(cell);
        assert!(!handle.is_alive());
        assert_eq!(handle.with(String::len), None);
        assert_eq!(handle.revision(), u64::MAX);
    }

    #[test]
    fn map_or_follows_and_falls_back() {
        let cell = LiveCell::new(String::from("abc"));
        let len = cell.handle().map_or(0usize, String::len);
        assert_eq!(len.get(), 3);
        cell.set(String::from("abcdef"));
        assert_eq!(len.get(), 6);
        assert_eq!(len.revision(), 1);
        drop(cell);
        assert_eq!(len.get(), 0);
    }

    #[test]
    fn combined_revision_moves_when_any_part_moves() {
        let a = LiveCell::new(0);
        let b = LiveCell::new(0);
        let before = combined_revision(&[a.revision(), b.revision()]);
        b.set(1);
        let after = combined_revision(&[a.revision(), b.revision()]);
        assert_ne!(before, after);
        assert_ne!(combined_revision(&[1, 0]), combined_revision(&[0, 1]));
    }
}
