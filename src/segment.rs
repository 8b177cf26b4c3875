//! Mode selection and bit packing of the payload into a single segment.

use crate::bitstream::BitStream;
use crate::qrcode::Version;

static ALPHANUMERIC_CHARSET: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Data encoding mode of a segment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    /// Decimal digits, three per 10 bits.
    Numeric,
    /// The 45-symbol set `0-9A-Z $%*+-./:`, two per 11 bits.
    Alphanumeric,
    /// Arbitrary bytes, eight bits each.
    Byte,
}

impl Mode {
    /// Picks the densest mode able to represent every byte of `data`.
    pub fn classify(data: &[u8]) -> Self {
        if is_numeric(data) {
            Mode::Numeric
        } else if is_alphanumeric(data) {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }

    /// The 4-bit mode indicator.
    pub fn mode_bits(self) -> u32 {
        match self {
            Mode::Numeric => 0x1,
            Mode::Alphanumeric => 0x2,
            Mode::Byte => 0x4,
        }
    }

    /// Width of the character count field, by version tier 1-9, 10-26, 27-40.
    pub fn num_char_count_bits(self, ver: Version) -> u8 {
        let tier = match ver.value() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        (match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
        })[tier]
    }
}

/// A payload paired with the mode it will be packed in.
#[derive(Clone, Copy, Debug)]
pub struct Segment<'a> {
    mode: Mode,
    data: &'a [u8],
}

impl<'a> Segment<'a> {
    /// Classifies `data` and wraps it.
    pub fn new(data: &'a [u8]) -> Self {
        Self { mode: Mode::classify(data), data }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn num_chars(&self) -> usize {
        self.data.len()
    }

    /// Bits this segment occupies at `version`: mode indicator, count field and payload.
    ///
    /// Returns `None` when the character count does not fit the count field.
    pub fn bit_length(&self, version: Version) -> Option<usize> {
        let ccbits = self.mode.num_char_count_bits(version);
        if self.num_chars() >> ccbits != 0 {
            return None;
        }
        let n = self.num_chars();
        let payload = match self.mode {
            Mode::Numeric => n / 3 * 10 + [0, 4, 7][n % 3],
            Mode::Alphanumeric => n / 2 * 11 + (n % 2) * 6,
            Mode::Byte => n.checked_mul(8)?,
        };
        Some(4 + usize::from(ccbits) + payload)
    }

    /// Writes the segment into `bb`. The caller has already checked [`Self::bit_length`]
    /// against the stream's capacity.
    pub fn write_to(&self, bb: &mut BitStream<'_>, version: Version) {
        bb.append_bits(self.mode.mode_bits(), 4);
        bb.append_bits(self.num_chars() as u32, self.mode.num_char_count_bits(version));
        match self.mode {
            Mode::Numeric => {
                for chunk in self.data.chunks(3) {
                    let value = chunk.iter().fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'));
                    bb.append_bits(value, chunk.len() as u8 * 3 + 1);
                }
            }
            Mode::Alphanumeric => {
                for chunk in self.data.chunks(2) {
                    let value = chunk
                        .iter()
                        .fold(0u32, |acc, &b| acc * 45 + u32::from(alphanumeric_value(b).unwrap_or(0)));
                    bb.append_bits(value, if chunk.len() == 2 { 11 } else { 6 });
                }
            }
            Mode::Byte => {
                for &b in self.data {
                    bb.append_bits(b.into(), 8);
                }
            }
        }
    }
}

/// Index of `b` in the alphanumeric character set.
pub fn alphanumeric_value(b: u8) -> Option<u8> {
    ALPHANUMERIC_CHARSET.iter().position(|&c| c == b).map(|i| i as u8)
}

pub fn is_numeric(data: &[u8]) -> bool {
    data.iter().all(u8::is_ascii_digit)
}

pub fn is_alphanumeric(data: &[u8]) -> bool {
    data.iter().all(|&b| alphanumeric_value(b).is_some())
}
