//! One-byte-at-a-time traversal over a borrowed buffer.

/// A moving reader over a borrowed byte slice.
///
/// The cursor starts at the slice's base and advances by one byte per
/// read. It replaces raw pointer arithmetic with an index over the
/// borrowed slice, so it can never read out of bounds: once the slice
/// is exhausted, `next()` returns `None`.
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    /// Next position to read. Advances by one per yielded byte.
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the base of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Number of bytes read so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

impl Iterator for ByteCursor<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.remaining();
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for ByteCursor<'_> {}
