//! Square grid of single-bit modules packed into bytes.
//!
//! Layout is row-major and MSB-first within each byte: module `(x, y)` lives at bit index
//! `y * size + x`. This is the layout handed back to callers through
//! [`Symbol::modules`](crate::Symbol::modules).

/// Number of bytes needed to hold a `size` x `size` grid.
pub const fn grid_len(size: u8) -> usize {
    let size = size as usize;
    (size * size).div_ceil(8)
}

/// A borrowed bit grid. Coordinates are unchecked by contract; callers keep them below `size`.
pub struct BitGrid<'a> {
    data: &'a mut [u8],
    size: u8,
}

impl<'a> BitGrid<'a> {
    /// Wraps the first [`grid_len`] bytes of `buffer` and clears them.
    pub fn new(buffer: &'a mut [u8], size: u8) -> Self {
        let data = &mut buffer[..grid_len(size)];
        data.fill(0);
        Self { data, size }
    }

    /// Wraps the first [`grid_len`] bytes of `buffer` as they are, e.g. a finished symbol.
    pub fn from_bytes(buffer: &'a mut [u8], size: u8) -> Self {
        Self { data: &mut buffer[..grid_len(size)], size }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn get(&self, x: u8, y: u8) -> bool {
        let (index, mask) = self.locate(x, y);
        self.data[index] & mask != 0
    }

    pub fn set(&mut self, x: u8, y: u8, on: bool) {
        let (index, mask) = self.locate(x, y);
        if on {
            self.data[index] |= mask;
        } else {
            self.data[index] &= !mask;
        }
    }

    /// Flips the module when `invert` is true; leaves it alone otherwise.
    pub fn invert(&mut self, x: u8, y: u8, invert: bool) {
        if invert {
            let (index, mask) = self.locate(x, y);
            self.data[index] ^= mask;
        }
    }

    /// Number of dark modules. Padding bits after the last module are not counted.
    pub fn dark_count(&self) -> u32 {
        let total = usize::from(self.size) * usize::from(self.size);
        let (full, tail) = self.data.split_at(total / 8);
        let whole: u32 = full.iter().map(|b| b.count_ones()).sum();
        let partial = match (tail.first(), total % 8) {
            (Some(&last), rem) if rem > 0 => (last & !(0xff >> rem)).count_ones(),
            _ => 0,
        };
        whole + partial
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }

    /// Releases the grid, handing back the underlying bytes for the full borrow.
    pub fn into_bytes(self) -> &'a mut [u8] {
        self.data
    }

    fn locate(&self, x: u8, y: u8) -> (usize, u8) {
        debug_assert!(x < self.size && y < self.size);
        let offset = usize::from(y) * usize::from(self.size) + usize::from(x);
        (offset >> 3, 0x80 >> (offset & 7))
    }
}
