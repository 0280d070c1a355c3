//! Adapters to and from the [`std::io`] traits.
//!
//! To interoperate with `std::io`, wrap a type in one of these adapters.
//! A single adapter implements whichever traits its inner type implements,
//! so a `Read + Write` object adapts in one piece.
//!
//! The "not ready" signal is translated in both directions:
//! [`std::io::ErrorKind::WouldBlock`] maps to [`nb::Error::WouldBlock`] and
//! back. [`ToStd`] renders any other error into a [`std::io::Error`] through
//! its `Debug` form.

use std::io;

use crate::{Read, Seek, SeekFrom, Write};

/// Adapter from `std::io` traits.
pub struct FromStd<T: ?Sized> {
    inner: T,
}

impl<T> FromStd<T> {
    /// Create a new adapter.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Consume the adapter, returning the inner object.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: ?Sized> FromStd<T> {
    /// Borrow the inner object.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the inner object.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: io::Read + ?Sized> Read for FromStd<T> {
    type Error = io::Error;

    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.inner.read(buffer).map_err(to_nb_error)
    }
}

impl<T: io::Write + ?Sized> Write for FromStd<T> {
    type Error = io::Error;

    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        self.inner.write(buffer).map_err(to_nb_error)
    }
}

impl<T: io::Seek + ?Sized> Seek for FromStd<T> {
    type Error = io::Error;

    fn seek(&mut self, pos: SeekFrom) -> nb::Result<u64, Self::Error> {
        self.inner.seek(pos.into()).map_err(to_nb_error)
    }
}

/// Adapter to `std::io` traits.
pub struct ToStd<T: ?Sized> {
    inner: T,
}

impl<T> ToStd<T> {
    /// Create a new adapter.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Consume the adapter, returning the inner object.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: ?Sized> ToStd<T> {
    /// Borrow the inner object.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the inner object.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Read + ?Sized> io::Read for ToStd<T> {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buffer).map_err(from_nb_error)
    }
}

impl<T: Write + ?Sized> io::Write for ToStd<T> {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.inner.write(buffer).map_err(from_nb_error)
    }

    fn flush(&mut self) -> io::Result<()> {
        // Writes go straight to the inner object; nothing is buffered here.
        Ok(())
    }
}

impl<T: Seek + ?Sized> io::Seek for ToStd<T> {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos.into()).map_err(from_nb_error)
    }
}

fn to_nb_error(err: io::Error) -> nb::Error<io::Error> {
    match err.kind() {
        io::ErrorKind::WouldBlock => nb::Error::WouldBlock,
        _ => nb::Error::Other(err),
    }
}

fn from_nb_error<E: core::fmt::Debug>(err: nb::Error<E>) -> io::Error {
    match err {
        nb::Error::WouldBlock => io::ErrorKind::WouldBlock.into(),
        nb::Error::Other(e) => to_io_error(e),
    }
}

fn to_io_error<E: core::fmt::Debug>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{:?}", err))
}
