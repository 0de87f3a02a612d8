//! A fixed-capacity circular buffer of bytes with overwrite-on-overflow
//! semantics.
//!
//! [`ByteRing`] owns a contiguous byte region of fixed size and behaves as a
//! "last N bytes win" buffer: writes never block and never fail, and when
//! incoming data exceeds the free space the oldest unread bytes are evicted
//! first. Eviction is surfaced through a sticky overwritten flag with
//! read-and-reset query semantics, so callers capturing a bounded tail of a
//! stream can detect that unread data was lost.
//!
//! The buffer supports partial reads and discards, naive substring search
//! over the unread contents, and indexed access by logical offset (0 = oldest
//! unread byte).
//!
//! ```rust
//! use bytering::ByteRing;
//!
//! let mut ring = ByteRing::new(8);
//! ring.write(b"ABCDE");
//! ring.write(b"FGHIJ"); // 10 bytes total: the oldest two are evicted
//!
//! assert_eq!(ring.available(), 8);
//! assert!(ring.overwritten());
//!
//! let mut out = [0u8; 8];
//! let n = ring.read(&mut out);
//! assert_eq!(&out[..n], b"CDEFGHIJ");
//! ```
//!
//! The structure is single-threaded by design: no internal locking, no
//! atomics. Callers needing shared access wrap the whole instance in a lock.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod ring;


pub use ring::ByteRing;
