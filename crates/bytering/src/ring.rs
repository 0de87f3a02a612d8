//! Fixed-capacity byte ring with overwrite-on-overflow.
//!
//! # Invariants
//! - `available <= capacity`.
//! - `read < capacity` and `write < capacity` when `capacity > 0`; both stay
//!   at 0 for the degenerate zero-capacity buffer.
//! - The logical content is the `available` bytes starting at `read`,
//!   wrapping modulo `capacity`, ending just before `write` when
//!   `available > 0`.
//!
//! # Layout
//! Data lives in a circular `Vec<u8>` of fixed length. The unread bytes are
//! contiguous in logical order but may wrap in the underlying storage;
//! [`ByteRing::as_slices`] exposes up to two slices that, when concatenated,
//! yield the unread bytes in order.

use alloc::{vec, vec::Vec};
use core::{
    fmt,
    ops::{Index, IndexMut},
};

use bstr::BStr;

/// Fixed-capacity circular byte buffer that evicts the oldest unread bytes
/// on overflow.
///
/// Writes never fail: when incoming data exceeds [`free`](Self::free) space,
/// the oldest bytes are dropped first and the sticky overwritten flag is set.
/// The flag is observed and cleared with [`overwritten`](Self::overwritten),
/// and cleared by any [`read`](Self::read) or [`discard`](Self::discard).
///
/// The type is intentionally not `Clone`: it exclusively owns its backing
/// storage, and duplicating cursor state would alias the same logical stream.
pub struct ByteRing {
    storage: Vec<u8>,
    read: usize,
    write: usize,
    available: usize,
    overwritten: bool,
}

impl ByteRing {
    /// Creates an empty ring holding at most `capacity` bytes.
    ///
    /// A `capacity` of zero is a well-defined degenerate buffer: it accepts
    /// every operation, retains nothing, and never reports an overwrite.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity],
            read: 0,
            write: 0,
            available: 0,
            overwritten: false,
        }
    }

    /// Returns the fixed total number of byte slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of unread bytes currently held.
    #[must_use]
    pub fn available(&self) -> usize {
        self.available
    }

    /// Returns the number of bytes that can be written before eviction
    /// begins: `capacity() - available()`.
    #[must_use]
    pub fn free(&self) -> usize {
        self.capacity() - self.available
    }

    /// Returns true when no unread bytes are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available == 0
    }

    /// Returns true when `available() == capacity()`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available == self.capacity()
    }

    /// Reports whether unread data was destroyed by a write since the flag
    /// was last cleared, then clears it.
    ///
    /// The flag is also cleared by [`read`](Self::read) and
    /// [`discard`](Self::discard), so two consecutive calls return `true`
    /// at most once per overwrite.
    pub fn overwritten(&mut self) -> bool {
        let was = self.overwritten;
        self.overwritten = false;
        was
    }

    /// Appends `data` to the logical tail, evicting the oldest unread bytes
    /// on overflow.
    ///
    /// If `data.len()` exceeds [`capacity`](Self::capacity) the buffer is
    /// fully replaced with the last `capacity()` bytes of `data`; the
    /// overwritten flag is set only if unread data existed beforehand, and
    /// `capacity()` is returned. Otherwise all of `data` is copied (wrapping
    /// past the physical end if needed), the oldest excess bytes are evicted
    /// when the buffer overflows, and `data.len()` is returned.
    ///
    /// Complexity: O(n) for `n = data.len()`.
    pub fn write(&mut self, data: &[u8]) -> usize {
        if data.is_empty() {
            return 0;
        }

        let cap = self.capacity();
        if data.len() > cap {
            // Full replacement: only the last `cap` input bytes survive.
            self.overwritten = self.available > 0;
            self.read = 0;
            self.write = 0;
            self.available = cap;
            self.storage.copy_from_slice(&data[data.len() - cap..]);
            self.check_invariants();
            return cap;
        }

        let first = (cap - self.write).min(data.len());
        self.storage[self.write..self.write + first].copy_from_slice(&data[..first]);
        self.storage[..data.len() - first].copy_from_slice(&data[first..]);
        self.write = self.wrap(self.write, data.len());
        self.available += data.len();

        // Overflow: advance the read cursor past the bytes that no longer fit.
        if self.available > cap {
            self.read = self.wrap(self.read, self.available - cap);
            self.available = cap;
            self.overwritten = true;
        }

        self.check_invariants();
        data.len()
    }

    /// Copies up to `out.len()` unread bytes into `out`, oldest first, and
    /// consumes them.
    ///
    /// Clears the overwritten flag unconditionally, even when nothing is
    /// copied. Returns the number of bytes copied,
    /// `min(out.len(), available())`.
    pub fn read(&mut self, out: &mut [u8]) -> usize {
        self.overwritten = false;

        let len = out.len().min(self.available);
        let first = (self.capacity() - self.read).min(len);
        out[..first].copy_from_slice(&self.storage[self.read..self.read + first]);
        out[first..len].copy_from_slice(&self.storage[..len - first]);
        self.read = self.wrap(self.read, len);
        self.available -= len;

        self.check_invariants();
        len
    }

    /// Consumes up to `length` unread bytes without copying them.
    ///
    /// Identical to [`read`](Self::read) in its effect on cursors, the
    /// unread count, and the overwritten flag. Returns the number of bytes
    /// discarded, `min(length, available())`.
    pub fn discard(&mut self, length: usize) -> usize {
        self.overwritten = false;

        let len = length.min(self.available);
        self.read = self.wrap(self.read, len);
        self.available -= len;

        self.check_invariants();
        len
    }

    /// Returns the logical offset of the first occurrence of `needle` within
    /// the unread bytes, or `None` when `needle.len() > available()` or no
    /// occurrence exists.
    ///
    /// Offsets are relative to the oldest unread byte. An empty needle
    /// matches vacuously at offset 0, including on an empty buffer.
    ///
    /// This is a naive O(available × needle) scan; it assumes short needles
    /// found near the start, which is the framing/scanning case this buffer
    /// is built for.
    #[must_use]
    pub fn search(&self, needle: &[u8]) -> Option<usize> {
        if needle.len() > self.available {
            return None;
        }

        (0..=self.available - needle.len())
            .find(|&i| needle.iter().enumerate().all(|(j, &b)| self[i + j] == b))
    }

    /// Returns a reference to the byte at logical offset `i`, or `None` when
    /// `i >= available()`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&u8> {
        (i < self.available).then(|| &self.storage[self.wrap(self.read, i)])
    }

    /// Returns a mutable reference to the byte at logical offset `i`, or
    /// `None` when `i >= available()`.
    #[must_use]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut u8> {
        if i < self.available {
            let at = self.wrap(self.read, i);
            Some(&mut self.storage[at])
        } else {
            None
        }
    }

    /// Returns the unread bytes as up to two slices in logical order.
    ///
    /// The first slice starts at the read cursor; the second (possibly
    /// empty) slice holds the wrapped remainder. The slices are valid until
    /// the ring is mutated.
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let first = (self.capacity() - self.read).min(self.available);
        (
            &self.storage[self.read..self.read + first],
            &self.storage[..self.available - first],
        )
    }

    /// Iterates over the unread bytes in logical order without consuming
    /// them.
    pub fn iter(&self) -> impl Iterator<Item = &u8> {
        let (head, tail) = self.as_slices();
        head.iter().chain(tail.iter())
    }

    /// Drops all unread bytes and resets the cursors and the overwritten
    /// flag to the freshly-constructed state.
    pub fn clear(&mut self) {
        self.read = 0;
        self.write = 0;
        self.available = 0;
        self.overwritten = false;
    }

    /// Advances `cursor` by `n` slots, wrapping at `capacity`.
    ///
    /// Requires `n <= capacity` and `cursor < capacity` (or both 0), so a
    /// single conditional subtraction replaces the modulo.
    #[inline]
    fn wrap(&self, cursor: usize, n: usize) -> usize {
        debug_assert!(n <= self.capacity());
        let at = cursor + n;
        if at >= self.capacity() && self.capacity() > 0 {
            at - self.capacity()
        } else {
            at
        }
    }

    #[inline]
    fn check_invariants(&self) {
        debug_assert!(self.available <= self.capacity());
        debug_assert!(self.capacity() == 0 || self.read < self.capacity());
        debug_assert!(self.capacity() == 0 || self.write < self.capacity());
    }
}

impl Index<usize> for ByteRing {
    type Output = u8;

    /// Accesses the byte at logical offset `index`.
    ///
    /// # Panics
    /// Panics when `index >= available()`. Use [`ByteRing::get`] for the
    /// non-panicking variant.
    fn index(&self, index: usize) -> &u8 {
        assert!(
            index < self.available,
            "logical offset {index} out of bounds: {} bytes available",
            self.available
        );
        &self.storage[self.wrap(self.read, index)]
    }
}

impl IndexMut<usize> for ByteRing {
    /// Mutably accesses the byte at logical offset `index`.
    ///
    /// # Panics
    /// Panics when `index >= available()`. Use [`ByteRing::get_mut`] for the
    /// non-panicking variant.
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        assert!(
            index < self.available,
            "logical offset {index} out of bounds: {} bytes available",
            self.available
        );
        let at = self.wrap(self.read, index);
        &mut self.storage[at]
    }
}

impl fmt::Debug for ByteRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (head, tail) = self.as_slices();
        f.debug_struct("ByteRing")
            .field("capacity", &self.capacity())
            .field("available", &self.available)
            .field("overwritten", &self.overwritten)
            .field("head", &BStr::new(head))
            .field("tail", &BStr::new(tail))
            .finish()
    }
}
