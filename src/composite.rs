//! Composites that bundle separately supplied parts into one stream object.
//!
//! Each composite exposes exactly the capabilities of the parts it was
//! built from and nothing else. The parts stay independent: an operation
//! on the composite drives only the matching part, so a reader and a
//! writer taken from two unrelated places can still travel as one
//! object. Callers that need to keep ownership of a part can supply
//! `&mut part` instead of the part itself.

use crate::{Close, Read, Seek, SeekFrom, Write};

/// A reader and a writer presented as one stream object.
pub struct ReadWrite<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> ReadWrite<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Take the composite apart, returning the parts in the order they
    /// were supplied.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R, W> Read for ReadWrite<R, W>
where
    R: Read,
{
    type Error = R::Error;

    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.reader.read(buffer)
    }
}

impl<R, W> Write for ReadWrite<R, W>
where
    W: Write,
{
    type Error = W::Error;

    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        self.writer.write(buffer)
    }

    fn write_all(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
        self.writer.write_all(buffer)
    }
}

/// A reader that closes through a separately supplied closer.
pub struct ReadClose<R, C> {
    reader: R,
    closer: C,
}

impl<R, C> ReadClose<R, C> {
    pub fn new(reader: R, closer: C) -> Self {
        Self { reader, closer }
    }

    pub fn into_parts(self) -> (R, C) {
        (self.reader, self.closer)
    }
}

impl<R, C> Read for ReadClose<R, C>
where
    R: Read,
{
    type Error = R::Error;

    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.reader.read(buffer)
    }
}

impl<R, C> Close for ReadClose<R, C>
where
    C: Close,
{
    type Error = C::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        self.closer.close()
    }
}

/// A writer that closes through a separately supplied closer.
pub struct WriteClose<W, C> {
    writer: W,
    closer: C,
}

impl<W, C> WriteClose<W, C> {
    pub fn new(writer: W, closer: C) -> Self {
        Self { writer, closer }
    }

    pub fn into_parts(self) -> (W, C) {
        (self.writer, self.closer)
    }
}

impl<W, C> Write for WriteClose<W, C>
where
    W: Write,
{
    type Error = W::Error;

    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        self.writer.write(buffer)
    }

    fn write_all(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
        self.writer.write_all(buffer)
    }
}

impl<W, C> Close for WriteClose<W, C>
where
    C: Close,
{
    type Error = C::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        self.closer.close()
    }
}

/// Reader, writer and closer in one object.
pub struct ReadWriteClose<R, W, C> {
    reader: R,
    writer: W,
    closer: C,
}

impl<R, W, C> ReadWriteClose<R, W, C> {
    pub fn new(reader: R, writer: W, closer: C) -> Self {
        Self {
            reader,
            writer,
            closer,
        }
    }

    pub fn into_parts(self) -> (R, W, C) {
        (self.reader, self.writer, self.closer)
    }
}

impl<R, W, C> Read for ReadWriteClose<R, W, C>
where
    R: Read,
{
    type Error = R::Error;

    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.reader.read(buffer)
    }
}

impl<R, W, C> Write for ReadWriteClose<R, W, C>
where
    W: Write,
{
    type Error = W::Error;

    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        self.writer.write(buffer)
    }

    fn write_all(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
        self.writer.write_all(buffer)
    }
}

impl<R, W, C> Close for ReadWriteClose<R, W, C>
where
    C: Close,
{
    type Error = C::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        self.closer.close()
    }
}

/// A reader paired with a seeker.
///
/// Seeking repositions only the seek part. A reader that keeps its own
/// position is not moved along; anything that already implements both
/// traits can be used directly instead of being split over a composite.
pub struct ReadSeek<R, S> {
    reader: R,
    seeker: S,
}

impl<R, S> ReadSeek<R, S> {
    pub fn new(reader: R, seeker: S) -> Self {
        Self { reader, seeker }
    }

    pub fn into_parts(self) -> (R, S) {
        (self.reader, self.seeker)
    }
}

impl<R, S> Read for ReadSeek<R, S>
where
    R: Read,
{
    type Error = R::Error;

    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.reader.read(buffer)
    }
}

impl<R, S> Seek for ReadSeek<R, S>
where
    S: Seek,
{
    type Error = S::Error;

    fn seek(&mut self, pos: SeekFrom) -> nb::Result<u64, Self::Error> {
        self.seeker.seek(pos)
    }
}

/// A writer paired with a seeker.
pub struct WriteSeek<W, S> {
    writer: W,
    seeker: S,
}

impl<W, S> WriteSeek<W, S> {
    pub fn new(writer: W, seeker: S) -> Self {
        Self { writer, seeker }
    }

    pub fn into_parts(self) -> (W, S) {
        (self.writer, self.seeker)
    }
}

impl<W, S> Write for WriteSeek<W, S>
where
    W: Write,
{
    type Error = W::Error;

    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        self.writer.write(buffer)
    }

    fn write_all(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
        self.writer.write_all(buffer)
    }
}

impl<W, S> Seek for WriteSeek<W, S>
where
    S: Seek,
{
    type Error = S::Error;

    fn seek(&mut self, pos: SeekFrom) -> nb::Result<u64, Self::Error> {
        self.seeker.seek(pos)
    }
}

/// Reader, writer and seeker in one object.
///
/// As with [`ReadSeek`], each operation drives only its own part; the
/// composite never synchronizes positions between them.
pub struct ReadWriteSeek<R, W, S> {
    reader: R,
    writer: W,
    seeker: S,
}

impl<R, W, S> ReadWriteSeek<R, W, S> {
    pub fn new(reader: R, writer: W, seeker: S) -> Self {
        Self {
            reader,
            writer,
            seeker,
        }
    }

    pub fn into_parts(self) -> (R, W, S) {
        (self.reader, self.writer, self.seeker)
    }
}

impl<R, W, S> Read for ReadWriteSeek<R, W, S>
where
    R: Read,
{
    type Error = R::Error;

    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.reader.read(buffer)
    }
}

impl<R, W, S> Write for ReadWriteSeek<R, W, S>
where
    W: Write,
{
    type Error = W::Error;

    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        self.writer.write(buffer)
    }

    fn write_all(&mut self, buffer: &[u8]) -> Result<(), Self::Error> {
        self.writer.write_all(buffer)
    }
}

impl<R, W, S> Seek for ReadWriteSeek<R, W, S>
where
    S: Seek,
{
    type Error = S::Error;

    fn seek(&mut self, pos: SeekFrom) -> nb::Result<u64, Self::Error> {
        self.seeker.seek(pos)
    }
}
