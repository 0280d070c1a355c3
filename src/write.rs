use core::fmt::Debug;

use nb::block;

pub trait Write {
    type Error: Debug;

    /// Push bytes from `buffer` into the sink, returning how many were written.
    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error>;

    /// Write the whole of `buffer`, busy-waiting through `WouldBlock` until
    /// everything went out or the sink failed.
    fn write_all(&mut self, mut buffer: &[u8]) -> Result<(), Self::Error> {
        while !buffer.is_empty() {
            let written = block!(self.write(buffer))?;
            buffer = &buffer[written..];
        }
        Ok(())
    }
}

impl<W> Write for &mut W
where
    W: Write + ?Sized,
{
    type Error = W::Error;

    #[inline]
    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        (**self).write(buffer)
    }

    #[inline]
    fn write_all(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
        (**self).write_all(buffer)
    }
}

/// Adapter turning a bare closure into a [`Write`] implementation.
pub struct WriteFn<F>(F);

impl<F, E> WriteFn<F>
where
    F: FnMut(&[u8]) -> nb::Result<usize, E>,
    E: Debug,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> WriteFn<F> {
    /// Consume the adapter, returning the closure.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F, E> Write for WriteFn<F>
where
    F: FnMut(&[u8]) -> nb::Result<usize, E>,
    E: Debug,
{
    type Error = E;

    #[inline]
    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        (self.0)(buffer)
    }
}
