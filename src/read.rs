use core::fmt::Debug;

pub trait Read {
    type Error: Debug;

    /// Pull bytes from the source into `buffer`, returning how many were read.
    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error>;
}

impl<R> Read for &mut R
where
    R: Read + ?Sized,
{
    type Error = R::Error;

    #[inline]
    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        (**self).read(buffer)
    }
}

/// Adapter turning a bare closure into a [`Read`] implementation.
///
/// Every `read` invokes the closure with the same buffer and returns its
/// result untouched, `WouldBlock` included.
pub struct ReadFn<F>(F);

impl<F, E> ReadFn<F>
where
    F: FnMut(&mut [u8]) -> nb::Result<usize, E>,
    E: Debug,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> ReadFn<F> {
    /// Consume the adapter, returning the closure.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F, E> Read for ReadFn<F>
where
    F: FnMut(&mut [u8]) -> nb::Result<usize, E>,
    E: Debug,
{
    type Error = E;

    #[inline]
    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        (self.0)(buffer)
    }
}
