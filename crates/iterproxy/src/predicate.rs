//! Predicates and their logical combinators.
//!
//! A [`Predicate`] is a cheaply-cloneable handle over a pure `Fn(&T) -> bool`.
//! Handles have identity: two clones of one handle compare as the same
//! predicate, while two separately built predicates are distinct even when
//! their closures behave identically. [`IterProxy`](crate::IterProxy) relies
//! on this identity to deduplicate filters.
//!
//! The free functions [`and_`], [`or_`], and [`not_`] compose predicates into
//! arbitrary boolean expression trees:
//!
//! ```
//! use iterproxy::{and_, not_, IterProxy, Predicate};
//!
//! let gte_4 = Predicate::new(|i: &i32| *i >= 4);
//! let lte_6 = Predicate::new(|i: &i32| *i <= 6);
//!
//! let mut proxy = IterProxy::new(0..10);
//! proxy.filter(and_([gte_4.clone(), lte_6.clone()])).unwrap();
//! assert_eq!(proxy.all(), vec![4, 5, 6]);
//!
//! let mut proxy = IterProxy::new(0..10);
//! proxy.filter(not_(and_([gte_4, lte_6]))).unwrap();
//! assert_eq!(proxy.all(), vec![0, 1, 2, 3, 7, 8, 9]);
//! ```

use std::fmt;
use std::rc::Rc;

/// A pure boolean test over a single item.
///
/// Construct one with [`Predicate::new`], or compose existing predicates with
/// [`and_`], [`or_`], and [`not_`]. Cloning is cheap (reference-counted) and
/// preserves identity.
pub struct Predicate<T>(Rc<dyn Fn(&T) -> bool>);

impl<T> Predicate<T> {
    /// Wraps a function or closure as a predicate.
    ///
    /// ```
    /// use iterproxy::Predicate;
    ///
    /// let is_odd = Predicate::new(|i: &i32| i % 2 != 0);
    /// assert!(is_odd.test(&3));
    /// assert!(!is_odd.test(&4));
    /// ```
    pub fn new(f: impl Fn(&T) -> bool + 'static) -> Self {
        Predicate(Rc::new(f))
    }

    /// Evaluates the predicate against an item.
    pub fn test(&self, item: &T) -> bool {
        (self.0)(item)
    }

    /// Returns `true` if `self` and `other` are the same predicate handle.
    ///
    /// This is pointer identity, not behavioral equality: two separately
    /// constructed predicates are never the same, even if their closures are
    /// textually identical.
    pub fn same(&self, other: &Predicate<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Combines with another predicate; passes iff both pass.
    pub fn and(&self, other: Predicate<T>) -> Predicate<T>
    where
        T: 'static,
    {
        and_([self.clone(), other])
    }

    /// Combines with another predicate; passes iff either passes.
    pub fn or(&self, other: Predicate<T>) -> Predicate<T>
    where
        T: 'static,
    {
        or_([self.clone(), other])
    }

    /// Returns the logical negation of this predicate.
    pub fn negate(&self) -> Predicate<T>
    where
        T: 'static,
    {
        not_(self.clone())
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Predicate(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

/// Conjunction: passes iff every inner predicate passes.
///
/// Evaluation follows the given order and short-circuits on the first failure.
/// An empty input is vacuously true (matches everything).
pub fn and_<T: 'static>(preds: impl IntoIterator<Item = Predicate<T>>) -> Predicate<T> {
    let preds: Vec<Predicate<T>> = preds.into_iter().collect();
    Predicate::new(move |item| preds.iter().all(|p| p.test(item)))
}

/// Disjunction: passes iff at least one inner predicate passes.
///
/// Evaluation follows the given order and short-circuits on the first success.
/// An empty input is vacuously FALSE ("or of nothing is false") — the dual of
/// [`and_`], and easy to get backwards.
pub fn or_<T: 'static>(preds: impl IntoIterator<Item = Predicate<T>>) -> Predicate<T> {
    let preds: Vec<Predicate<T>> = preds.into_iter().collect();
    Predicate::new(move |item| preds.iter().any(|p| p.test(item)))
}

/// Negation: passes iff the inner predicate fails.
pub fn not_<T: 'static>(pred: Predicate<T>) -> Predicate<T> {
    Predicate::new(move |item| !pred.test(item))
}
