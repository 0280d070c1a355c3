use heapless::Vec;

use crate::Close;

/// A single closable standing in for a whole sequence of them.
///
/// Closers are held in insertion order up to a capacity of `N` and are
/// closed front to back. They are moved in at construction, so nothing
/// the caller does afterwards can change which closers run.
pub struct MultiCloser<C, const N: usize> {
    closers: Vec<C, N>,
}

impl<C, const N: usize> MultiCloser<C, N> {
    /// An empty multi-closer. Closing it does nothing and succeeds.
    pub const fn new() -> Self {
        Self {
            closers: Vec::new(),
        }
    }

    /// Append `closer` behind the ones already held.
    ///
    /// Returns the closer back when the capacity `N` is used up.
    pub fn push(&mut self, closer: C) -> Result<(), C> {
        self.closers.push(closer)
    }

    pub fn len(&self) -> usize {
        self.closers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closers.is_empty()
    }
}

impl<C, const N: usize> Default for MultiCloser<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, const N: usize> From<Vec<C, N>> for MultiCloser<C, N> {
    fn from(closers: Vec<C, N>) -> Self {
        Self { closers }
    }
}

impl<C, const N: usize> FromIterator<C> for MultiCloser<C, N> {
    /// Collect closers in iteration order. Panics when the iterator
    /// yields more than `N` of them.
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            closers: Vec::from_iter(iter),
        }
    }
}

impl<C, const N: usize> Close for MultiCloser<C, N>
where
    C: Close,
{
    type Error = C::Error;

    /// Close every held closer in insertion order.
    ///
    /// The first failure is returned. The closers behind it are still
    /// closed, and whatever those cleanup closes return is discarded.
    fn close(&mut self) -> Result<(), Self::Error> {
        let closers: &mut [C] = &mut self.closers;
        for i in 0..closers.len() {
            if let Err(e) = closers[i].close() {
                for rest in &mut closers[i + 1..] {
                    let _ = rest.close();
                }
                return Err(e);
            }
        }
        Ok(())
    }
}
