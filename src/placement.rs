//! Zigzag placement of the codeword stream into the data modules.

use crate::patterns::Canvas;

/// Streams the first `bitlen` bits of `data` (MSB first within each byte) into every
/// non-function module, walking column pairs from the right edge leftward. Column 6 holds the
/// vertical timing pattern and is skipped.
///
/// Data modules left over once the stream runs out keep whatever value they had, which is
/// light on a freshly cleared grid. Returns the number of bits placed.
pub fn draw_codewords(canvas: &mut Canvas<'_, '_>, data: &[u8], bitlen: usize) -> usize {
    debug_assert!(bitlen <= data.len() * 8);
    let size = i16::from(canvas.size());
    let mut i: usize = 0;
    let mut right = size - 1;
    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        for vert in 0..size {
            for j in 0..2 {
                let x = right - j;
                let upward = ((right & 2) == 0) ^ (x < 6);
                let y = if upward { size - 1 - vert } else { vert };
                let (x, y) = (x as u8, y as u8);
                if !canvas.function.get(x, y) && i < bitlen {
                    let bit = (data[i >> 3] >> (7 - (i & 7))) & 1 != 0;
                    canvas.modules.set(x, y, bit);
                    i += 1;
                }
            }
        }
        right -= 2;
    }
    i
}
