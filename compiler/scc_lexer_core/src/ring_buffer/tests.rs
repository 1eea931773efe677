use super::*;
use crate::{SliceFeed, EOF};

fn drain(ring: &mut RingBuffer, feed: &mut SliceFeed<'_>) -> Vec<u8> {
    let mut out = Vec::new();
    loop {
        if ring.is_drained() && ring.refill(feed) == 0 {
            break;
        }
        let Some(ch) = ring.at(0) else { break };
        ring.advance();
        if ch == EOF {
            break;
        }
        out.push(ch);
    }
    out
}

#[test]
fn new_ring_is_drained() {
    let ring = RingBuffer::new(8);
    assert!(ring.is_drained());
    assert_eq!(ring.capacity(), 8);
    assert_eq!(ring.half(), 4);
    assert_eq!(ring.at(0), None);
}

#[test]
fn refill_writes_at_most_half() {
    let mut ring = RingBuffer::new(8);
    let mut feed = SliceFeed::new("abcdefghij");
    assert_eq!(ring.refill(&mut feed), 4);
    assert_eq!(ring.fill(), 4);
    assert_eq!(ring.at(0), Some(b'a'));
}

#[test]
fn drains_across_wraparound() {
    let mut ring = RingBuffer::new(4);
    let mut feed = SliceFeed::new("the quick brown fox");
    assert_eq!(drain(&mut ring, &mut feed), b"the quick brown fox");
}

#[test]
fn history_survives_one_refill() {
    let mut ring = RingBuffer::new(8);
    let mut feed = SliceFeed::new("abcdefgh");
    ring.refill(&mut feed);
    for _ in 0..4 {
        ring.advance();
    }
    ring.refill(&mut feed);
    // head = 4, fill = 8: the previous half is still intact.
    assert_eq!(ring.at(4), Some(b'a'));
    assert_eq!(ring.at(1), Some(b'd'));
    assert_eq!(ring.at(0), Some(b'e'));
}

#[test]
fn overwritten_history_is_unavailable() {
    let mut ring = RingBuffer::new(4);
    let mut feed = SliceFeed::new("abcdef");
    ring.refill(&mut feed); // ab
    ring.advance();
    ring.advance();
    ring.refill(&mut feed); // cd
    ring.advance();
    ring.advance();
    ring.refill(&mut feed); // ef overwrites ab
    assert_eq!(ring.at(0), Some(b'e'));
    assert_eq!(ring.at(2), Some(b'c'));
    assert_eq!(ring.at(3), None);
    assert_eq!(ring.at(4), None);
}

#[test]
fn refill_stops_at_physical_end() {
    let mut ring = RingBuffer::new(6);
    let mut feed = SliceFeed::new("abcdefgh").with_chunk_size(2);
    ring.refill(&mut feed); // slots 0..2
    ring.advance();
    ring.advance();
    ring.refill(&mut feed); // slots 2..4
    ring.advance();
    ring.advance();
    // Only slots 4..6 remain before the wrap, even with a half of 3.
    assert_eq!(ring.refill(&mut feed), 2);
    assert_eq!(ring.fill(), 6);
}

#[test]
fn push_appends_sentinel() {
    let mut ring = RingBuffer::new(2);
    ring.push(EOF);
    assert_eq!(ring.at(0), Some(EOF));
    ring.advance();
    assert!(ring.is_drained());
}

#[test]
fn caller_storage_round_trips() {
    let storage = vec![9u8; 16];
    let mut ring = RingBuffer::with_storage(storage);
    assert_eq!(ring.capacity(), 16);
    let mut feed = SliceFeed::new("hi");
    ring.refill(&mut feed);
    let back = ring.into_storage();
    assert!(back.is_some_and(|s| s.len() == 16 && s[0] == b'h' && s[2] == 0));
}

#[test]
fn owned_storage_is_not_returned() {
    assert!(RingBuffer::new(4).into_storage().is_none());
}
