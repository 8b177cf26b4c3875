//! Function patterns: finders, alignment, timing, format and version information.
//!
//! Everything drawn here is also marked in the function mask so that codeword placement and
//! masking skip it.

use crate::grid::BitGrid;
use crate::mask::Mask;
use crate::qrcode::{EccLevel, Version};

/// The symbol's module grid paired with its function mask.
pub struct Canvas<'m, 'f> {
    pub modules: BitGrid<'m>,
    pub function: BitGrid<'f>,
}

impl<'m, 'f> Canvas<'m, 'f> {
    pub fn new(modules: BitGrid<'m>, function: BitGrid<'f>) -> Self {
        debug_assert_eq!(modules.size(), function.size());
        Self { modules, function }
    }

    pub fn size(&self) -> u8 {
        self.modules.size()
    }

    fn set_function_module(&mut self, x: u8, y: u8, isdark: bool) {
        self.modules.set(x, y, isdark);
        self.function.set(x, y, true);
    }

    /// Draws every function pattern. Format information is drawn with a placeholder mask
    /// of 0 and rewritten once the real mask is known.
    pub fn draw_function_patterns(&mut self, version: Version, ecl: EccLevel) {
        let size = self.size();
        for i in 0..size {
            self.set_function_module(6, i, i % 2 == 0);
            self.set_function_module(i, 6, i % 2 == 0);
        }

        // Overwrites some timing modules
        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        let mut alignpatposbuf = [0u8; 7];
        let alignpatpos = alignment_pattern_positions(version, &mut alignpatposbuf);
        let last = alignpatpos.len().saturating_sub(1);
        for (i, &pos0) in alignpatpos.iter().enumerate() {
            for (j, &pos1) in alignpatpos.iter().enumerate() {
                // Skip the three finder corners
                if (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0) {
                    continue;
                }
                self.draw_alignment_pattern(pos0, pos1);
            }
        }

        self.draw_format_bits(ecl, Mask::new(0));
        self.draw_version(version);
    }

    /// 9x9 finder pattern including its separator, centered on `(x, y)`. Modules falling
    /// outside the grid are clipped.
    fn draw_finder_pattern(&mut self, x: u8, y: u8) {
        let size = i16::from(self.size());
        for dy in -4i16..=4 {
            for dx in -4i16..=4 {
                let xx = i16::from(x) + dx;
                let yy = i16::from(y) + dy;
                if (0..size).contains(&xx) && (0..size).contains(&yy) {
                    let dist = dx.abs().max(dy.abs());
                    self.set_function_module(xx as u8, yy as u8, dist != 2 && dist != 4);
                }
            }
        }
    }

    /// 5x5 alignment pattern centered on `(x, y)`.
    fn draw_alignment_pattern(&mut self, x: u8, y: u8) {
        for dy in -2i16..=2 {
            for dx in -2i16..=2 {
                let xx = (i16::from(x) + dx) as u8;
                let yy = (i16::from(y) + dy) as u8;
                self.set_function_module(xx, yy, dx.abs().max(dy.abs()) != 1);
            }
        }
    }

    /// Draws both copies of the 15-bit format information for `ecl` and `mask`.
    pub fn draw_format_bits(&mut self, ecl: EccLevel, mask: Mask) {
        let bits = format_bits(ecl, mask);
        let bit = |i: u8| get_bit(bits, i);

        // Around the top-left finder
        for i in 0..6 {
            self.set_function_module(8, i, bit(i));
        }
        self.set_function_module(8, 7, bit(6));
        self.set_function_module(8, 8, bit(7));
        self.set_function_module(7, 8, bit(8));
        for i in 9..15 {
            self.set_function_module(14 - i, 8, bit(i));
        }

        // Split between the other two finders
        let size = self.size();
        for i in 0..8 {
            self.set_function_module(size - 1 - i, 8, bit(i));
        }
        for i in 8..15 {
            self.set_function_module(8, size - 15 + i, bit(i));
        }
        // Always dark
        self.set_function_module(8, size - 8, true);
    }

    /// Draws both 3x6 copies of the version information. No-op below version 7.
    fn draw_version(&mut self, version: Version) {
        if version.value() < 7 {
            return;
        }
        let bits = version_bits(version);
        let size = self.size();
        for i in 0u8..18 {
            let bit = get_bit(bits, i);
            let a = size - 11 + i % 3;
            let b = i / 3;
            self.set_function_module(a, b, bit);
            self.set_function_module(b, a, bit);
        }
    }
}

/// 15-bit format word: 2 ECC bits and 3 mask bits, a 10-bit BCH remainder, then the fixed
/// XOR mask.
pub fn format_bits(ecl: EccLevel, mask: Mask) -> u32 {
    let data = u32::from((ecl.format_bits() << 3) | mask.value());
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * 0x537);
    }
    ((data << 10) | rem) ^ 0x5412
}

/// 18-bit version word: 6 version bits followed by a 12-bit BCH remainder.
pub fn version_bits(version: Version) -> u32 {
    let ver = u32::from(version.value());
    let mut rem = ver;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * 0x1f25);
    }
    (ver << 12) | rem
}

/// Alignment pattern center coordinates in ascending order, written into `resultbuf`.
/// Empty for version 1; at most 7 entries at version 40.
pub fn alignment_pattern_positions(version: Version, resultbuf: &mut [u8; 7]) -> &[u8] {
    let ver = version.value();
    if ver == 1 {
        return &resultbuf[..0];
    }
    let numalign = ver / 7 + 2;
    let step = if ver == 32 {
        26
    } else {
        (ver * 4 + numalign * 2 + 1) / (numalign * 2 - 2) * 2
    };
    let last = version.size() - 7;
    let result = &mut resultbuf[..usize::from(numalign)];
    result[0] = 6;
    for i in 1..numalign {
        result[usize::from(i)] = last - (numalign - 1 - i) * step;
    }
    result
}

fn get_bit(x: u32, i: u8) -> bool {
    (x >> i) & 1 != 0
}
