//! Pull-based character sources.
//!
//! A [`Feed`] fills a caller-provided buffer with as many characters as it
//! has ready. Once exhausted it writes exactly one [`EOF`] sentinel into
//! `buffer[0]` and reports one character produced. That sentinel is the only
//! end-of-stream signal; returning zero is a contract violation.
//!
//! Because the sentinel is `0x00`, a null character inside the source ends
//! the stream. Both feeds here stop at the first interior null.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::warn;

use crate::{Character, EOF};

/// Source of raw characters for a [`Scanner`](crate::Scanner).
pub trait Feed {
    /// Write up to `buffer.len()` characters into `buffer` and return how many
    /// were written. Must write the [`EOF`] sentinel and return `1` once the
    /// source is exhausted.
    fn fetch(&mut self, buffer: &mut [Character]) -> usize;
}

impl<F: Feed + ?Sized> Feed for &mut F {
    #[inline]
    fn fetch(&mut self, buffer: &mut [Character]) -> usize {
        (**self).fetch(buffer)
    }
}

impl<F: Feed + ?Sized> Feed for Box<F> {
    #[inline]
    fn fetch(&mut self, buffer: &mut [Character]) -> usize {
        (**self).fetch(buffer)
    }
}

/// Write the sentinel, reporting one character produced.
#[inline]
fn end_of_stream(buffer: &mut [Character]) -> usize {
    match buffer.first_mut() {
        Some(slot) => {
            *slot = EOF;
            1
        }
        None => 0,
    }
}

/// In-memory feed over a byte slice.
///
/// An optional maximum chunk size caps how many characters a single fetch
/// hands out, regardless of how much room the caller offers.
#[derive(Clone, Debug)]
pub struct SliceFeed<'a> {
    source: &'a [u8],
    pos: usize,
    chunk: usize,
}

impl<'a> SliceFeed<'a> {
    /// Feed over the bytes of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Feed over raw bytes, stopping at the first null byte.
    pub fn from_bytes(source: &'a [u8]) -> Self {
        let end = source.iter().position(|&b| b == EOF).unwrap_or(source.len());
        SliceFeed {
            source: &source[..end],
            pos: 0,
            chunk: usize::MAX,
        }
    }

    /// Cap every fetch at `chunk` characters. A cap of zero is treated as one.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk: usize) -> Self {
        self.chunk = chunk.max(1);
        self
    }

    /// Characters not yet handed out.
    pub fn remaining(&self) -> usize {
        self.source.len() - self.pos
    }
}

impl Feed for SliceFeed<'_> {
    fn fetch(&mut self, buffer: &mut [Character]) -> usize {
        let remaining = self.remaining();
        if remaining == 0 {
            return end_of_stream(buffer);
        }
        let n = remaining.min(buffer.len()).min(self.chunk);
        buffer[..n].copy_from_slice(&self.source[self.pos..self.pos + n]);
        self.pos += n;
        n
    }
}

/// Feed over any [`io::Read`] source.
///
/// `Interrupted` reads are retried. Any other I/O error ends the stream and is
/// kept for the caller, see [`ReaderFeed::take_error`].
#[derive(Debug)]
pub struct ReaderFeed<R> {
    reader: R,
    finished: bool,
    error: Option<io::Error>,
}

impl ReaderFeed<File> {
    /// Open the file at `path` as a feed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        File::open(path).map(ReaderFeed::new)
    }
}

impl<R: Read> ReaderFeed<R> {
    pub fn new(reader: R) -> Self {
        ReaderFeed {
            reader,
            finished: false,
            error: None,
        }
    }

    /// The I/O error that ended the stream early, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<R: Read> Feed for ReaderFeed<R> {
    fn fetch(&mut self, buffer: &mut [Character]) -> usize {
        if self.finished || buffer.is_empty() {
            return end_of_stream(buffer);
        }
        loop {
            match self.reader.read(buffer) {
                Ok(0) => {
                    self.finished = true;
                    return end_of_stream(buffer);
                }
                Ok(n) => {
                    // An interior null would be indistinguishable from the sentinel.
                    return match buffer[..n].iter().position(|&b| b == EOF) {
                        Some(0) => {
                            self.finished = true;
                            end_of_stream(buffer)
                        }
                        Some(i) => {
                            self.finished = true;
                            i
                        }
                        None => n,
                    };
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    warn!(error = %err, "feed read failed; ending stream");
                    self.error = Some(err);
                    self.finished = true;
                    return end_of_stream(buffer);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
