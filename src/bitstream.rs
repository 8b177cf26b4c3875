//! Append-only bit writer over a borrowed byte buffer.

/// Writes bits most-significant first into a byte slice.
///
/// The buffer is zero-filled on construction and the cursor only moves forward. Writing past
/// the end of the buffer is a contract violation; callers size the buffer from the capacity
/// tables before encoding.
pub struct BitStream<'a> {
    data: &'a mut [u8],
    length: usize,
}

impl<'a> BitStream<'a> {
    /// Wraps `buffer`, clearing it and resetting the cursor to bit 0.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        buffer.fill(0);
        Self { data: buffer, length: 0 }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Total number of bits the buffer can hold.
    pub fn capacity_bits(&self) -> usize {
        self.data.len() * 8
    }

    /// Appends the low `len` bits of `val`, most significant bit first.
    pub fn append_bits(&mut self, val: u32, len: u8) {
        debug_assert!(len <= 31 && (val >> len) == 0);
        debug_assert!(self.length + usize::from(len) <= self.capacity_bits());
        for i in (0..len).rev() {
            let bit = ((val >> i) & 1) as u8;
            self.data[self.length >> 3] |= bit << (7 - (self.length & 7));
            self.length += 1;
        }
    }

    /// The written bytes, including the partially filled last byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.length.div_ceil(8)]
    }
}
