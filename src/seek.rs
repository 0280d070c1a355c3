use core::fmt::Debug;

/// Position within a stream to seek to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SeekFrom {
    /// Seek from the beginning of the stream.
    Start(u64),
    /// Seek relative to the current position.
    Current(i64),
    /// Seek relative to the end of the stream.
    End(i64),
}

#[cfg(feature = "std")]
impl From<SeekFrom> for std::io::SeekFrom {
    fn from(pos: SeekFrom) -> Self {
        match pos {
            SeekFrom::Start(n) => std::io::SeekFrom::Start(n),
            SeekFrom::Current(n) => std::io::SeekFrom::Current(n),
            SeekFrom::End(n) => std::io::SeekFrom::End(n),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::SeekFrom> for SeekFrom {
    fn from(pos: std::io::SeekFrom) -> Self {
        match pos {
            std::io::SeekFrom::Start(n) => SeekFrom::Start(n),
            std::io::SeekFrom::Current(n) => SeekFrom::Current(n),
            std::io::SeekFrom::End(n) => SeekFrom::End(n),
        }
    }
}

pub trait Seek {
    type Error: Debug;

    /// Move the stream position to `pos`, returning the new position
    /// counted from the start of the stream.
    fn seek(&mut self, pos: SeekFrom) -> nb::Result<u64, Self::Error>;
}

impl<S> Seek for &mut S
where
    S: Seek + ?Sized,
{
    type Error = S::Error;

    #[inline]
    fn seek(&mut self, pos: SeekFrom) -> nb::Result<u64, Self::Error> {
        (**self).seek(pos)
    }
}

/// Adapter turning a bare closure into a [`Seek`] implementation.
pub struct SeekFn<F>(F);

impl<F, E> SeekFn<F>
where
    F: FnMut(SeekFrom) -> nb::Result<u64, E>,
    E: Debug,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> SeekFn<F> {
    /// Consume the adapter, returning the closure.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F, E> Seek for SeekFn<F>
where
    F: FnMut(SeekFrom) -> nb::Result<u64, E>,
    E: Debug,
{
    type Error = E;

    #[inline]
    fn seek(&mut self, pos: SeekFrom) -> nb::Result<u64, Self::Error> {
        (self.0)(pos)
    }
}
