use std::io::{self, Read};

use super::*;

// === SliceFeed ===

#[test]
fn slice_feed_hands_out_everything_then_sentinel() {
    let mut feed = SliceFeed::new("abc");
    let mut buf = [0xFF; 8];
    assert_eq!(feed.fetch(&mut buf), 3);
    assert_eq!(&buf[..3], b"abc");
    assert_eq!(feed.fetch(&mut buf), 1);
    assert_eq!(buf[0], EOF);
    // Stays exhausted.
    assert_eq!(feed.fetch(&mut buf), 1);
    assert_eq!(buf[0], EOF);
}

#[test]
fn slice_feed_respects_buffer_size() {
    let mut feed = SliceFeed::new("abcdef");
    let mut buf = [0; 4];
    assert_eq!(feed.fetch(&mut buf), 4);
    assert_eq!(&buf, b"abcd");
    assert_eq!(feed.fetch(&mut buf), 2);
    assert_eq!(&buf[..2], b"ef");
}

#[test]
fn slice_feed_chunk_cap() {
    let mut feed = SliceFeed::new("abcdef").with_chunk_size(1);
    let mut buf = [0; 16];
    for expected in b"abcdef" {
        assert_eq!(feed.fetch(&mut buf), 1);
        assert_eq!(buf[0], *expected);
    }
    assert_eq!(feed.fetch(&mut buf), 1);
    assert_eq!(buf[0], EOF);
}

#[test]
fn slice_feed_zero_chunk_is_one() {
    let mut feed = SliceFeed::new("xy").with_chunk_size(0);
    let mut buf = [0; 4];
    assert_eq!(feed.fetch(&mut buf), 1);
}

#[test]
fn slice_feed_stops_at_interior_null() {
    let mut feed = SliceFeed::from_bytes(b"ab\0cd");
    assert_eq!(feed.remaining(), 2);
    let mut buf = [0; 8];
    assert_eq!(feed.fetch(&mut buf), 2);
    assert_eq!(feed.fetch(&mut buf), 1);
    assert_eq!(buf[0], EOF);
}

#[test]
fn empty_source_is_immediately_eof() {
    let mut feed = SliceFeed::new("");
    let mut buf = [7; 2];
    assert_eq!(feed.fetch(&mut buf), 1);
    assert_eq!(buf[0], EOF);
}

#[test]
fn mutable_reference_is_a_feed() {
    fn drain(mut feed: impl Feed) -> usize {
        let mut buf = [0; 8];
        feed.fetch(&mut buf)
    }
    let mut feed = SliceFeed::new("hello");
    assert_eq!(drain(&mut feed), 5);
    assert_eq!(feed.remaining(), 0);
}

// === ReaderFeed ===

#[test]
fn reader_feed_reads_then_sentinel() {
    let mut feed = ReaderFeed::new(io::Cursor::new(b"program".to_vec()));
    let mut buf = [0; 32];
    assert_eq!(feed.fetch(&mut buf), 7);
    assert_eq!(&buf[..7], b"program");
    assert_eq!(feed.fetch(&mut buf), 1);
    assert_eq!(buf[0], EOF);
    assert!(feed.take_error().is_none());
}

#[test]
fn reader_feed_truncates_at_null() {
    let mut feed = ReaderFeed::new(io::Cursor::new(b"ab\0cd".to_vec()));
    let mut buf = [0; 32];
    assert_eq!(feed.fetch(&mut buf), 2);
    assert_eq!(feed.fetch(&mut buf), 1);
    assert_eq!(buf[0], EOF);
}

struct Flaky {
    calls: usize,
}

impl Read for Flaky {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.calls += 1;
        match self.calls {
            1 => Err(io::Error::from(io::ErrorKind::Interrupted)),
            2 => {
                buf[0] = b'x';
                Ok(1)
            }
            _ => Err(io::Error::new(io::ErrorKind::Other, "disk on fire")),
        }
    }
}

#[test]
fn reader_feed_retries_interrupted_and_keeps_errors() {
    let mut feed = ReaderFeed::new(Flaky { calls: 0 });
    let mut buf = [0; 4];
    assert_eq!(feed.fetch(&mut buf), 1);
    assert_eq!(buf[0], b'x');
    assert_eq!(feed.fetch(&mut buf), 1);
    assert_eq!(buf[0], EOF);
    let err = feed.take_error();
    assert!(err.is_some_and(|e| e.to_string() == "disk on fire"));
}
