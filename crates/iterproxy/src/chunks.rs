//! Lazy fixed-size chunk traversal.

use crate::proxy::IterProxy;

/// Iterator over fixed-size batches of filtered items, created by
/// [`IterProxy::iter_chunks`].
///
/// Each chunk holds exactly the requested number of items except possibly the
/// last, which may be shorter. The stream ends cleanly where
/// [`IterProxy::many`] would report exhaustion, so callers can use plain
/// `for` loops over bulk data without handling an end-of-sequence error.
///
/// Holds an exclusive borrow of the proxy for its whole lifetime; the proxy
/// cannot be consumed through any other operation while a `Chunks` is alive.
#[derive(Debug)]
pub struct Chunks<'a, S: IntoIterator> {
    proxy: &'a mut IterProxy<S>,
    size: usize,
}

impl<'a, S: IntoIterator> Chunks<'a, S> {
    pub(crate) fn new(proxy: &'a mut IterProxy<S>, size: usize) -> Self {
        Chunks { proxy, size }
    }
}

impl<S: IntoIterator> Iterator for Chunks<'_, S> {
    type Item = Vec<S::Item>;

    fn next(&mut self) -> Option<Vec<S::Item>> {
        // Exhaustion becomes clean termination here.
        self.proxy.many(self.size).ok()
    }
}

impl<S: IntoIterator> std::iter::FusedIterator for Chunks<'_, S> {}
