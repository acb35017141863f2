//! The sequence proxy and its consumption API.
//!
//! [`IterProxy`] wraps any [`IntoIterator`] source and provides controlled,
//! lazily-filtered consumption: [`one`](IterProxy::one),
//! [`one_or_none`](IterProxy::one_or_none), [`many`](IterProxy::many),
//! [`all`](IterProxy::all), [`skip`](IterProxy::skip), and
//! [`iter_chunks`](IterProxy::iter_chunks), plus single-pass traversal via
//! `IntoIterator` (over `&mut` or by value).

use std::fmt;
use std::mem;

use crate::chunks::Chunks;
use crate::error::{ProxyError, Result};
use crate::predicate::Predicate;

/// Proxy lifecycle.
///
/// The first consuming call moves `Unfrozen -> Frozen`, materializing the
/// cursor exactly once and locking the predicate list. When the cursor drains,
/// `Frozen -> Exhausted`; that transition is terminal.
enum State<S: IntoIterator> {
    /// Accepting filters; the source has not been touched.
    Unfrozen(S),
    /// Cursor live; predicates immutable.
    Frozen(S::IntoIter),
    /// Cursor drained.
    Exhausted,
}

/// A stateful wrapper providing filtered, controlled consumption of a
/// source sequence.
///
/// The proxy is built over any `IntoIterator` and starts *unfrozen*: zero or
/// more [`Predicate`]s may be appended with [`filter`](IterProxy::filter).
/// The first consuming call (any extraction method, or plain iteration)
/// *freezes* the proxy — the predicate list becomes immutable and the source
/// is bound to a single forward-only cursor. Items are pulled from the cursor
/// lazily; an item is yielded only if every predicate, evaluated in insertion
/// order, returns `true` (short-circuiting on the first `false`).
///
/// # Example
///
/// ```
/// use iterproxy::{IterProxy, Predicate};
///
/// let is_odd = Predicate::new(|i: &i32| i % 2 != 0);
///
/// let mut proxy = IterProxy::new(0..10);
/// proxy.filter(is_odd).unwrap();
///
/// assert_eq!(proxy.one().unwrap(), 1);
/// assert_eq!(proxy.many(2).unwrap(), vec![3, 5]);
/// assert_eq!(proxy.all(), vec![7, 9]);
/// assert_eq!(proxy.one_or_none(), None);
/// ```
///
/// The proxy is single-threaded and single-pass: it exclusively owns its
/// cursor, never rewinds, and is not safe to share across threads.
pub struct IterProxy<S: IntoIterator> {
    state: State<S>,
    predicates: Vec<Predicate<S::Item>>,
}

impl<S: IntoIterator> IterProxy<S> {
    /// Wraps a source sequence in a new, unfrozen proxy with no filters.
    pub fn new(source: S) -> Self {
        IterProxy {
            state: State::Unfrozen(source),
            predicates: Vec::new(),
        }
    }

    // ========================================================================
    // Filter configuration (unfrozen only)
    // ========================================================================

    /// Appends a filter predicate.
    ///
    /// Only items for which every appended predicate returns `true` will be
    /// yielded. Predicates are deduplicated by handle identity: appending a
    /// clone of an already-present predicate is a no-op.
    ///
    /// Returns the proxy itself for chaining:
    ///
    /// ```
    /// use iterproxy::{IterProxy, Predicate};
    ///
    /// let is_odd = Predicate::new(|i: &i32| i % 2 != 0);
    /// let all = IterProxy::new(0..10).filter(is_odd).unwrap().all();
    /// assert_eq!(all, vec![1, 3, 5, 7, 9]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Frozen`] if any consuming call has already been
    /// made on this proxy.
    pub fn filter(&mut self, pred: Predicate<S::Item>) -> Result<&mut Self> {
        if self.is_frozen() {
            return Err(ProxyError::Frozen);
        }
        if !self.predicates.iter().any(|p| p.same(&pred)) {
            self.predicates.push(pred);
        }
        Ok(self)
    }

    /// Appends several filter predicates at once.
    ///
    /// Equivalent to calling [`filter`](IterProxy::filter) for each predicate
    /// in order; the same freeze and identity-dedup rules apply.
    pub fn filter_all(
        &mut self,
        preds: impl IntoIterator<Item = Predicate<S::Item>>,
    ) -> Result<&mut Self> {
        for pred in preds {
            self.filter(pred)?;
        }
        Ok(self)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns `true` once any consuming call has been made.
    ///
    /// A frozen proxy no longer accepts filters.
    pub fn is_frozen(&self) -> bool {
        !matches!(self.state, State::Unfrozen(_))
    }

    /// Returns the appended predicates, in insertion order.
    pub fn predicates(&self) -> &[Predicate<S::Item>] {
        &self.predicates
    }

    // ========================================================================
    // Consumption
    // ========================================================================

    /// Returns the next filtered item.
    ///
    /// ```
    /// use iterproxy::IterProxy;
    ///
    /// let mut proxy = IterProxy::new(0..10);
    /// assert_eq!(proxy.one().unwrap(), 0);
    /// assert_eq!(proxy.one().unwrap(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Exhausted`] if the filtered source has no more
    /// items.
    pub fn one(&mut self) -> Result<S::Item> {
        self.next_filtered().ok_or(ProxyError::Exhausted)
    }

    /// Returns the next filtered item, or `None` at exhaustion.
    ///
    /// This is the only operation that converts end-of-sequence into a
    /// sentinel instead of an error, supporting loop-until-none consumption.
    pub fn one_or_none(&mut self) -> Option<S::Item> {
        self.next_filtered()
    }

    /// Returns up to `k` filtered items as an ordered batch.
    ///
    /// A short final batch (fewer than `k` items, but at least one) is *not*
    /// an error; it is the normal end-of-data signal for callers that loop
    /// `many(k)` until an error.
    ///
    /// ```
    /// use iterproxy::IterProxy;
    ///
    /// let mut proxy = IterProxy::new(0..5);
    /// assert_eq!(proxy.many(3).unwrap(), vec![0, 1, 2]);
    /// assert_eq!(proxy.many(3).unwrap(), vec![3, 4]);
    /// assert!(proxy.many(3).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Exhausted`] if zero items could be produced.
    pub fn many(&mut self, k: usize) -> Result<Vec<S::Item>> {
        self.freeze();
        let mut batch = Vec::new();
        for _ in 0..k {
            match self.next_filtered() {
                Some(item) => batch.push(item),
                None => break,
            }
        }
        if batch.is_empty() {
            return Err(ProxyError::Exhausted);
        }
        Ok(batch)
    }

    /// Drains and returns all remaining filtered items.
    ///
    /// Never errors; an already-exhausted proxy yields an empty `Vec`.
    pub fn all(&mut self) -> Vec<S::Item> {
        self.freeze();
        let mut items = Vec::new();
        while let Some(item) = self.next_filtered() {
            items.push(item);
        }
        items
    }

    /// Advances past up to `k` filtered items, discarding them.
    ///
    /// Skipping beyond exhaustion is not an error; the cursor simply stops at
    /// the end. Returns the proxy itself for chaining:
    ///
    /// ```
    /// use iterproxy::IterProxy;
    ///
    /// assert_eq!(IterProxy::new(0..5).skip(2).all(), vec![2, 3, 4]);
    /// ```
    pub fn skip(&mut self, k: usize) -> &mut Self {
        self.freeze();
        for _ in 0..k {
            if self.next_filtered().is_none() {
                break;
            }
        }
        self
    }

    /// Consumes the remaining filtered items in batches of `k`.
    ///
    /// The returned iterator yields `Vec`s of exactly `k` items, except the
    /// last, which may be shorter. It terminates cleanly (yields `None`)
    /// where [`many`](IterProxy::many) would report exhaustion.
    ///
    /// ```
    /// use iterproxy::IterProxy;
    ///
    /// let mut proxy = IterProxy::new(0..3);
    /// let chunks: Vec<Vec<i32>> = proxy.iter_chunks(2).collect();
    /// assert_eq!(chunks, vec![vec![0, 1], vec![2]]);
    /// ```
    ///
    /// The chunk iterator borrows the proxy exclusively, so no other
    /// operation can run on the proxy until it is dropped.
    pub fn iter_chunks(&mut self, k: usize) -> Chunks<'_, S> {
        Chunks::new(self, k)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Performs the one-time `Unfrozen -> Frozen` transition.
    fn freeze(&mut self) {
        if matches!(self.state, State::Unfrozen(_)) {
            match mem::replace(&mut self.state, State::Exhausted) {
                State::Unfrozen(source) => self.state = State::Frozen(source.into_iter()),
                frozen => self.state = frozen,
            }
        }
    }

    /// The filtering loop shared by every consuming operation.
    ///
    /// Pulls raw items from the cursor until one passes every predicate, the
    /// predicates evaluated in insertion order with short-circuiting. Moves
    /// the proxy to `Exhausted` when the cursor drains.
    fn next_filtered(&mut self) -> Option<S::Item> {
        self.freeze();
        let Self { state, predicates } = self;
        let State::Frozen(cursor) = &mut *state else {
            return None;
        };
        for item in cursor {
            if predicates.iter().all(|p| p.test(&item)) {
                return Some(item);
            }
        }
        *state = State::Exhausted;
        None
    }
}

/// Borrowing iterator over a proxy's filtered items, created by
/// `(&mut proxy).into_iter()` or a `for` loop over `&mut proxy`.
///
/// The iteration protocol lives on dedicated types rather than on
/// [`IterProxy`] itself so that the inherent [`skip`](IterProxy::skip) and
/// [`filter`](IterProxy::filter) methods are not shadowed by the `Iterator`
/// adaptors of the same names.
pub struct Iter<'a, S: IntoIterator> {
    proxy: &'a mut IterProxy<S>,
}

impl<S: IntoIterator> Iterator for Iter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.proxy.next_filtered()
    }
}

impl<S: IntoIterator> std::iter::FusedIterator for Iter<'_, S> {}

/// Owning iterator over a proxy's filtered items, created by consuming the
/// proxy with `into_iter()`.
pub struct IntoIter<S: IntoIterator> {
    proxy: IterProxy<S>,
}

impl<S: IntoIterator> Iterator for IntoIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.proxy.next_filtered()
    }
}

impl<S: IntoIterator> std::iter::FusedIterator for IntoIter<S> {}

/// Single-pass traversal of the remaining filtered items.
///
/// Materializing the iterator freezes the proxy, like any other consuming
/// call.
///
/// ```
/// use iterproxy::{IterProxy, Predicate};
///
/// let mut proxy = IterProxy::new(0..10);
/// proxy.filter(Predicate::new(|i: &i32| i % 2 != 0)).unwrap();
///
/// let mut seen = Vec::new();
/// for item in &mut proxy {
///     seen.push(item);
/// }
/// assert_eq!(seen, vec![1, 3, 5, 7, 9]);
/// ```
impl<'a, S: IntoIterator> IntoIterator for &'a mut IterProxy<S> {
    type Item = S::Item;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Iter<'a, S> {
        self.freeze();
        Iter { proxy: self }
    }
}

impl<S: IntoIterator> IntoIterator for IterProxy<S> {
    type Item = S::Item;
    type IntoIter = IntoIter<S>;

    fn into_iter(mut self) -> IntoIter<S> {
        self.freeze();
        IntoIter { proxy: self }
    }
}

impl<S: IntoIterator> fmt::Debug for IterProxy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Unfrozen(_) => "Unfrozen",
            State::Frozen(_) => "Frozen",
            State::Exhausted => "Exhausted",
        };
        f.debug_struct("IterProxy")
            .field("state", &state)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}
