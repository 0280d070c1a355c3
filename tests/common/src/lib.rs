use std::{cell::RefCell, convert::Infallible, rc::Rc};

use io_parts::{nb, Close, Read, Seek, SeekFrom, Write};

/// Reader over a fixed byte slice, counting calls.
pub struct MemReader {
    data: &'static [u8],
    pos: usize,
    reads: usize,
}

impl MemReader {
    pub fn new(data: &'static [u8]) -> Self {
        Self {
            data,
            pos: 0,
            reads: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl Read for MemReader {
    type Error = Infallible;

    fn read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.reads += 1;
        let remaining = &self.data[self.pos..];
        let n = remaining.len().min(buffer.len());
        buffer[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

/// Writer collecting everything into a buffer, counting calls.
///
/// Chunking and blocking behavior is configurable so callers can drive
/// retry loops.
pub struct MemWriter {
    written: Vec<u8>,
    max_chunk: Option<usize>,
    block_first: usize,
    writes: usize,
}

impl MemWriter {
    pub fn new() -> Self {
        Self {
            written: Vec::new(),
            max_chunk: None,
            block_first: 0,
            writes: 0,
        }
    }

    /// Accept at most `max` bytes per call.
    pub fn with_max_chunk(mut self, max: impl Into<Option<usize>>) -> Self {
        self.max_chunk = max.into();
        self
    }

    /// Answer the first `attempts` calls with [`nb::Error::WouldBlock`].
    pub fn with_block_first(mut self, attempts: usize) -> Self {
        self.block_first = attempts;
        self
    }

    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Number of `write` calls, blocked attempts included.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Default for MemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MemWriter {
    type Error = Infallible;

    fn write(&mut self, buffer: &[u8]) -> nb::Result<usize, Self::Error> {
        self.writes += 1;
        if self.block_first > 0 {
            self.block_first -= 1;
            return Err(nb::Error::WouldBlock);
        }
        let n = match self.max_chunk {
            Some(max) => buffer.len().min(max),
            None => buffer.len(),
        };
        self.written.extend_from_slice(&buffer[..n]);
        Ok(n)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct OutOfBounds;

/// Seekable cursor over a virtual stream of `len` bytes, counting calls.
pub struct CountSeek {
    pos: u64,
    len: u64,
    seeks: usize,
}

impl CountSeek {
    pub fn new(len: u64) -> Self {
        Self {
            pos: 0,
            len,
            seeks: 0,
        }
    }

    pub fn pos(&self) -> u64 {
        self.pos
    }

    pub fn seeks(&self) -> usize {
        self.seeks
    }
}

impl Seek for CountSeek {
    type Error = OutOfBounds;

    fn seek(&mut self, pos: SeekFrom) -> nb::Result<u64, Self::Error> {
        self.seeks += 1;
        let resolved = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::Current(delta) => self.pos.checked_add_signed(delta),
            SeekFrom::End(delta) => self.len.checked_add_signed(delta),
        };
        match resolved {
            Some(new_pos) => {
                self.pos = new_pos;
                Ok(new_pos)
            }
            None => Err(nb::Error::Other(OutOfBounds)),
        }
    }
}

/// Shared record of close calls, in the order they happened.
pub type CloseLog = Rc<RefCell<Vec<&'static str>>>;

#[derive(Debug, PartialEq, Eq)]
pub struct CloseFailed(pub &'static str);

/// Closable that logs its label on every close.
pub struct CloseProbe {
    label: &'static str,
    fail: bool,
    log: CloseLog,
}

impl CloseProbe {
    pub fn new(label: &'static str, log: &CloseLog) -> Self {
        Self {
            label,
            fail: false,
            log: Rc::clone(log),
        }
    }

    /// A probe whose close fails with [`CloseFailed`] after logging.
    pub fn failing(label: &'static str, log: &CloseLog) -> Self {
        Self {
            label,
            fail: true,
            log: Rc::clone(log),
        }
    }
}

impl Close for CloseProbe {
    type Error = CloseFailed;

    fn close(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(self.label);
        if self.fail {
            Err(CloseFailed(self.label))
        } else {
            Ok(())
        }
    }
}
