//! Data masking and the penalty heuristic used to pick a mask.

use tracing::trace;

use crate::grid::BitGrid;
use crate::patterns::Canvas;
use crate::qrcode::EccLevel;

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// Dark-light-dark-dark-dark-light-dark preceded or followed by four light modules.
const FINDER_LIKE: [u16; 2] = [0b000_0101_1101, 0b101_1101_0000];

/// A mask pattern (0–7).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Mask(u8);

impl Mask {
    /// All eight patterns, in index order.
    pub const ALL: [Mask; 8] = [Mask(0), Mask(1), Mask(2), Mask(3), Mask(4), Mask(5), Mask(6), Mask(7)];

    /// Creates a mask object from the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is outside the range [0, 7].
    pub const fn new(mask: u8) -> Self {
        assert!(mask <= 7, "Mask value out of range");
        Self(mask)
    }

    /// Returns the value, which is in the range [0, 7].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this pattern inverts the module at `(x, y)`.
    pub fn inverts(self, x: u8, y: u8) -> bool {
        let x = u32::from(x);
        let y = u32::from(y);
        match self.0 {
            0 => (x + y) % 2 == 0,
            1 => y % 2 == 0,
            2 => x % 3 == 0,
            3 => (x + y) % 3 == 0,
            4 => (x / 3 + y / 2) % 2 == 0,
            5 => (x * y) % 2 + (x * y) % 3 == 0,
            6 => ((x * y) % 2 + (x * y) % 3) % 2 == 0,
            7 => ((x + y) % 2 + (x * y) % 3) % 2 == 0,
            _ => unreachable!(),
        }
    }
}

/// XORs every non-function module with `mask`. Applying the same mask twice restores the grid.
pub fn apply_mask(canvas: &mut Canvas<'_, '_>, mask: Mask) {
    let size = canvas.size();
    for y in 0..size {
        for x in 0..size {
            if canvas.function.get(x, y) {
                continue;
            }
            canvas.modules.invert(x, y, mask.inverts(x, y));
        }
    }
}

/// Scores each mask with format information drawn for it, restoring the grid after each.
pub fn evaluate(canvas: &mut Canvas<'_, '_>, ecl: EccLevel) -> [u32; 8] {
    Mask::ALL.map(|mask| {
        canvas.draw_format_bits(ecl, mask);
        apply_mask(canvas, mask);
        let penalty = penalty_score(&canvas.modules);
        // Undoes the mask due to XOR
        apply_mask(canvas, mask);
        trace!(mask = mask.value(), penalty, "mask candidate");
        penalty
    })
}

/// Picks the mask with the lowest penalty (lowest index on ties), then draws its format
/// information and applies it for good.
pub fn choose_and_apply(canvas: &mut Canvas<'_, '_>, ecl: EccLevel) -> Mask {
    let scores = evaluate(canvas, ecl);
    let mut best = Mask::new(0);
    let mut minpenalty = u32::MAX;
    for (mask, &penalty) in Mask::ALL.iter().zip(scores.iter()) {
        if penalty < minpenalty {
            best = *mask;
            minpenalty = penalty;
        }
    }
    finish(canvas, ecl, best);
    best
}

/// Draws the final format information and applies `mask`.
pub fn finish(canvas: &mut Canvas<'_, '_>, ecl: EccLevel, mask: Mask) {
    canvas.draw_format_bits(ecl, mask);
    apply_mask(canvas, mask);
}

/// Penalty of the grid as it stands: same-color runs, 2x2 blocks, finder-like sequences and
/// dark/light imbalance.
pub fn penalty_score(modules: &BitGrid<'_>) -> u32 {
    let size = modules.size();
    let mut result: u32 = 0;

    // Runs of five or more in rows and columns
    for a in 0..size {
        let mut rowcolor = modules.get(0, a);
        let mut colcolor = modules.get(a, 0);
        let mut runx = 1;
        let mut runy = 1;
        for b in 1..size {
            let cx = modules.get(b, a);
            if cx != rowcolor {
                rowcolor = cx;
                runx = 1;
            } else {
                runx += 1;
                result += run_penalty(runx);
            }
            let cy = modules.get(a, b);
            if cy != colcolor {
                colcolor = cy;
                runy = 1;
            } else {
                runy += 1;
                result += run_penalty(runy);
            }
        }
    }

    for y in 0..size {
        let mut bitsrow: u16 = 0;
        let mut bitscol: u16 = 0;
        for x in 0..size {
            let color = modules.get(x, y);

            if x > 0 && y > 0 {
                let upleft = modules.get(x - 1, y - 1);
                let up = modules.get(x, y - 1);
                let left = modules.get(x - 1, y);
                if color == upleft && color == up && color == left {
                    result += PENALTY_N2;
                }
            }

            // 11-module windows along row y and column y
            bitsrow = ((bitsrow << 1) & 0x7ff) | u16::from(color);
            bitscol = ((bitscol << 1) & 0x7ff) | u16::from(modules.get(y, x));
            if x >= 10 {
                result += PENALTY_N3 * FINDER_LIKE.iter().filter(|&&p| p == bitsrow).count() as u32;
                result += PENALTY_N3 * FINDER_LIKE.iter().filter(|&&p| p == bitscol).count() as u32;
            }
        }
    }

    // Smallest k such that (45-5k)% <= dark <= (55+5k)%
    let total = i64::from(size) * i64::from(size);
    let dark = i64::from(modules.dark_count());
    let mut k: i64 = 0;
    while dark * 20 < (9 - k) * total || dark * 20 > (11 + k) * total {
        result += PENALTY_N4;
        k += 1;
    }
    result
}

fn run_penalty(run: u32) -> u32 {
    match run {
        5 => PENALTY_N1,
        r if r > 5 => 1,
        _ => 0,
    }
}
