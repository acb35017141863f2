//! IterProxy - Filtered, controlled consumption for any iterator.
//!
//! IterProxy wraps a sequence source (anything implementing `IntoIterator`,
//! such as paginated query results collected into memory, ranges, or vectors)
//! with a uniform extraction protocol, so callers stop re-implementing
//! buffering, filtering, and chunking at every consumption site. It supports:
//!
//! - [`IterProxy::one`]: pull exactly one item (error at exhaustion)
//! - [`IterProxy::one_or_none`]: pull one item, `None` at exhaustion
//! - [`IterProxy::many`]: pull a batch of up to k items
//! - [`IterProxy::all`]: pull all remaining items
//! - [`IterProxy::skip`]: discard k items
//! - [`IterProxy::iter_chunks`]: traverse in fixed-size batches
//! - Single-pass iteration via `IntoIterator`, over `&mut proxy` or by value
//!
//! Filtering is lazy: client-supplied [`Predicate`]s are evaluated as items
//! are pulled, in insertion order, short-circuiting on the first failure.
//! The [`and_`], [`or_`], and [`not_`] combinators build boolean expression
//! trees over predicates.
//!
//! # Quick Start
//!
//! ```rust
//! use iterproxy::{and_, IterProxy, Predicate};
//!
//! let is_odd = Predicate::new(|i: &i32| i % 2 != 0);
//! let gte_5 = Predicate::new(|i: &i32| *i >= 5);
//!
//! let mut proxy = IterProxy::new(0..10);
//! proxy.filter(and_([is_odd, gte_5])).unwrap();
//!
//! assert_eq!(proxy.one().unwrap(), 5);
//! assert_eq!(proxy.all(), vec![7, 9]);
//! assert_eq!(proxy.one_or_none(), None);
//! ```
//!
//! # Freeze Semantics
//!
//! A proxy accepts filters only until its first consuming call. That call
//! freezes the predicate list and binds the source to a single forward-only
//! cursor, created exactly once:
//!
//! ```rust
//! use iterproxy::{IterProxy, Predicate, ProxyError};
//!
//! let mut proxy = IterProxy::new(0..10);
//! proxy.filter(Predicate::new(|i: &i32| i % 2 != 0)).unwrap();
//! let _ = proxy.one().unwrap();
//!
//! // Too late: consumption has started.
//! let err = proxy.filter(Predicate::new(|i: &i32| *i > 5)).map(|_| ());
//! assert_eq!(err, Err(ProxyError::Frozen));
//! ```
//!
//! # Batch Semantics
//!
//! `many(k)` errors only when it can produce *zero* items; a short final
//! batch is the normal end-of-data signal. `iter_chunks(k)` bridges that
//! convention into clean termination for `for`-loop consumption:
//!
//! ```rust
//! use iterproxy::IterProxy;
//!
//! let mut proxy = IterProxy::new(0..3);
//! let chunks: Vec<Vec<i32>> = proxy.iter_chunks(2).collect();
//! assert_eq!(chunks, vec![vec![0, 1], vec![2]]);
//! ```
//!
//! The proxy is synchronous, single-pass, and single-threaded: it exclusively
//! owns its cursor, never rewinds, and provides no internal synchronization.

mod chunks;
mod error;
mod predicate;
mod proxy;

// Re-export public API
pub use chunks::Chunks;
pub use error::{ProxyError, Result};
pub use predicate::{and_, not_, or_, Predicate};
pub use proxy::{IntoIter, Iter, IterProxy};
