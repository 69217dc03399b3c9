//! Fixed-capacity FIFO queue of bits.

use crate::StateError;
use std::fmt;

/// A fixed-capacity FIFO queue of bits, backed by a single `u64` ring buffer.
///
/// Index `0` is always the oldest entry that has not been popped yet. Entries can be read and
/// overwritten in place by index.
///
/// Exceeding the capacity, popping from an empty queue, or indexing past [`len`](Self::len) are
/// invariant violations and panic.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitQueue {
    bits: u64,
    len: u8,
    /// Physical index of the front entry; always less than [`CAPACITY`](Self::CAPACITY).
    offset: u8,
}

impl BitQueue {
    /// The maximum number of bits the queue can hold.
    pub const CAPACITY: usize = u64::BITS as usize;

    /// The number of bytes written by [`encode`](Self::encode).
    pub const ENCODED_LEN: usize = size_of::<u64>() + 2;

    /// Creates a new, empty queue.
    #[inline]
    pub const fn new() -> Self {
        Self { bits: 0, len: 0, offset: 0 }
    }

    /// Returns the number of bits in the queue.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` if the queue holds no bits.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no more bits can be pushed.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len() == Self::CAPACITY
    }

    /// Returns the bit at `index`, counting from the front.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    #[track_caller]
    pub fn get(&self, index: usize) -> bool {
        self.bits & self.mask(index) != 0
    }

    /// Overwrites the bit at `index`, counting from the front.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, index: usize, value: bool) {
        let mask = self.mask(index);
        if value {
            self.bits |= mask;
        } else {
            self.bits &= !mask;
        }
    }

    /// Appends a bit to the back of the queue.
    ///
    /// # Panics
    ///
    /// Panics if the queue is full.
    #[inline]
    #[track_caller]
    pub fn push_back(&mut self, value: bool) {
        assert!(!self.is_full(), "bit queue overflow: capacity is {}", Self::CAPACITY);
        self.len += 1;
        self.set(self.len() - 1, value);
    }

    /// Removes the bit at the front of the queue and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[inline]
    #[track_caller]
    pub fn pop_front(&mut self) -> bool {
        assert!(!self.is_empty(), "bit queue underflow: pop from an empty queue");
        let value = self.get(0);
        self.len -= 1;
        self.offset = (self.offset + 1) % Self::CAPACITY as u8;
        value
    }

    /// Removes the bit at the front of the queue and returns it, or `None` if the queue is empty.
    #[inline]
    pub fn try_pop_front(&mut self) -> Option<bool> {
        (!self.is_empty()).then(|| self.pop_front())
    }

    /// Removes all bits.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns an iterator over the bits, front to back.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        (0..self.len()).map(|i| self.get(i))
    }

    /// Returns the fixed-size encoding of the queue: the raw bit pattern as a little-endian
    /// `u64`, then the length, then the read offset.
    pub fn encode(&self) -> [u8; Self::ENCODED_LEN] {
        let mut out = [0; Self::ENCODED_LEN];
        out[..8].copy_from_slice(&self.bits.to_le_bytes());
        out[8] = self.len;
        out[9] = self.offset;
        out
    }

    /// Reads back a queue written by [`encode`](Self::encode).
    pub fn decode(bytes: &[u8; Self::ENCODED_LEN]) -> Result<Self, StateError> {
        let mut bits = [0; 8];
        bits.copy_from_slice(&bytes[..8]);
        let (len, offset) = (bytes[8], bytes[9]);
        if len as usize > Self::CAPACITY {
            return Err(StateError::LenOutOfRange { len: len as usize });
        }
        if offset as usize >= Self::CAPACITY {
            return Err(StateError::OffsetOutOfRange { offset: offset as usize });
        }
        Ok(Self { bits: u64::from_le_bytes(bits), len, offset })
    }

    #[inline]
    #[track_caller]
    fn mask(&self, index: usize) -> u64 {
        assert!(index < self.len(), "bit queue index out of bounds: {index} >= {}", self.len);
        1 << ((index + self.offset as usize) % Self::CAPACITY)
    }
}

/// Renders as `len:` followed by `#` for each set bit and `.` for each clear bit.
impl fmt::Display for BitQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.len)?;
        for bit in self.iter() {
            f.write_str(if bit { "#" } else { "." })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitQueue").field(&format_args!("{self}")).finish()
    }
}
