//! Capacity tables and the per-symbol block layout derived from them.
//!
//! Rows are indexed by [`EccLevel::format_bits`], which orders them Medium, Low, High,
//! Quartile. Columns are indexed by `version - 1`.

use crate::qrcode::{EccLevel, Version};

/// Capacity figures for one (version, ECC level) pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockLayout {
    /// Modules available for data and error correction codewords, remainder bits included.
    pub(crate) raw_modules: u16,
    /// Error correction codewords summed over all blocks.
    pub(crate) ecc_codewords: u16,
    /// Number of Reed-Solomon blocks.
    pub(crate) num_blocks: u8,
}

impl BlockLayout {
    /// Whole codewords that fit in the data region.
    pub const fn raw_codewords(self) -> usize {
        self.raw_modules as usize / 8
    }

    /// Data codewords left after error correction is reserved.
    pub const fn data_capacity_bytes(self) -> usize {
        self.raw_codewords() - self.ecc_codewords as usize
    }

    /// Error correction codewords carried by every block.
    pub const fn block_ecc_len(self) -> usize {
        self.ecc_codewords as usize / self.num_blocks as usize
    }

    /// Blocks that carry `short_data_len` data codewords; the rest carry one more.
    pub const fn num_short_blocks(self) -> usize {
        self.num_blocks as usize - self.raw_codewords() % self.num_blocks as usize
    }

    /// Total codewords (data plus error correction) in a short block.
    pub const fn short_block_len(self) -> usize {
        self.raw_codewords() / self.num_blocks as usize
    }

    pub const fn short_data_len(self) -> usize {
        self.short_block_len() - self.block_ecc_len()
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::AllVersions {}
    impl Sealed for super::LockedVersion {}
}

/// Source of [`BlockLayout`]s for an encoder.
///
/// Implementations decide which versions they can serve; the encoder rejects anything else
/// with [`EncodeError::InvalidVersion`](crate::EncodeError::InvalidVersion) before any lookup.
/// Only [`AllVersions`] and [`LockedVersion`] implement it.
///
/// ```compile_fail
/// use qrpack::{BlockLayout, CapacityTable, EccLevel, Version};
///
/// struct Custom;
///
/// impl CapacityTable for Custom {
///     fn supports(&self, _version: Version) -> bool {
///         true
///     }
///
///     fn layout(&self, version: Version, ecc: EccLevel) -> BlockLayout {
///         qrpack::AllVersions::lookup(version, ecc)
///     }
/// }
/// ```
pub trait CapacityTable: sealed::Sealed {
    fn supports(&self, version: Version) -> bool;

    /// Layout for a supported version. Behavior for unsupported versions is unspecified.
    fn layout(&self, version: Version, ecc: EccLevel) -> BlockLayout;
}

/// The full table-driven capacity set, versions 1 through 40.
#[derive(Clone, Copy, Default, Debug)]
pub struct AllVersions;

impl AllVersions {
    pub const fn lookup(version: Version, ecc: EccLevel) -> BlockLayout {
        let row = ecc.format_bits() as usize;
        let col = version.value() as usize - 1;
        BlockLayout {
            raw_modules: NUM_RAW_DATA_MODULES[col],
            ecc_codewords: NUM_ERROR_CORRECTION_CODEWORDS[row][col],
            num_blocks: NUM_ERROR_CORRECTION_BLOCKS[row][col],
        }
    }
}

impl CapacityTable for AllVersions {
    fn supports(&self, _version: Version) -> bool {
        true
    }

    fn layout(&self, version: Version, ecc: EccLevel) -> BlockLayout {
        Self::lookup(version, ecc)
    }
}

/// A single version's four layouts, resolved once when the encoder is built.
#[derive(Clone, Copy, Debug)]
pub struct LockedVersion {
    version: Version,
    layouts: [BlockLayout; 4],
}

impl LockedVersion {
    pub const fn new(version: Version) -> Self {
        // Indexed by format bits, like the full tables.
        let layouts = [
            AllVersions::lookup(version, EccLevel::Medium),
            AllVersions::lookup(version, EccLevel::Low),
            AllVersions::lookup(version, EccLevel::High),
            AllVersions::lookup(version, EccLevel::Quartile),
        ];
        Self { version, layouts }
    }

    pub const fn version(&self) -> Version {
        self.version
    }
}

impl CapacityTable for LockedVersion {
    fn supports(&self, version: Version) -> bool {
        version == self.version
    }

    fn layout(&self, version: Version, ecc: EccLevel) -> BlockLayout {
        debug_assert_eq!(version, self.version);
        self.layouts[usize::from(ecc.format_bits())]
    }
}

#[rustfmt::skip]
const NUM_ERROR_CORRECTION_CODEWORDS: [[u16; 40]; 4] = [
    // 1,  2,  3,  4,  5,   6,   7,   8,   9,  10,  11,  12,  13,  14,  15,  16,  17,  18,  19,  20,  21,  22,  23,  24,   25,   26,   27,   28,   29,   30,   31,   32,   33,   34,   35,   36,   37,   38,   39,   40
    [10, 16, 26, 36, 48,  64,  72,  88, 110, 130, 150, 176, 198, 216, 240, 280, 308, 338, 364, 416, 442, 476, 504, 560,  588,  644,  700,  728,  784,  812,  868,  924,  980, 1036, 1064, 1120, 1204, 1260, 1316, 1372], // Medium
    [ 7, 10, 15, 20, 26,  36,  40,  48,  60,  72,  80,  96, 104, 120, 132, 144, 168, 180, 196, 224, 224, 252, 270, 300,  312,  336,  360,  390,  420,  450,  480,  510,  540,  570,  570,  600,  630,  660,  720,  750], // Low
    [17, 28, 44, 64, 88, 112, 130, 156, 192, 224, 264, 308, 352, 384, 432, 480, 532, 588, 650, 700, 750, 816, 900, 960, 1050, 1110, 1200, 1260, 1350, 1440, 1530, 1620, 1710, 1800, 1890, 1980, 2100, 2220, 2310, 2430], // High
    [13, 22, 36, 52, 72,  96, 108, 132, 160, 192, 224, 260, 288, 320, 360, 408, 448, 504, 546, 600, 644, 690, 750, 810,  870,  952, 1020, 1050, 1140, 1200, 1290, 1350, 1440, 1530, 1590, 1680, 1770, 1860, 1950, 2040], // Quartile
];

#[rustfmt::skip]
const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 40]; 4] = [
    // 1, 2, 3, 4, 5, 6, 7, 8, 9,10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40
    [  1, 1, 1, 2, 2, 4, 4, 4, 5, 5,  5,  8,  9,  9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49], // Medium
    [  1, 1, 1, 1, 1, 2, 2, 2, 2, 4,  4,  4,  4,  4,  6,  6,  6,  6,  7,  8,  8,  9,  9, 10, 12, 12, 12, 13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25], // Low
    [  1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81], // High
    [  1, 1, 2, 2, 4, 4, 6, 6, 8, 8,  8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68], // Quartile
];

#[rustfmt::skip]
const NUM_RAW_DATA_MODULES: [u16; 40] = [
    //  1,     2,     3,     4,     5,     6,     7,     8,     9,    10,
      208,   359,   567,   807,  1079,  1383,  1568,  1936,  2336,  2768,
    // 11,    12,    13,    14,    15,    16,    17,    18,    19,    20,
     3232,  3728,  4256,  4651,  5243,  5867,  6523,  7211,  7931,  8683,
    // 21,    22,    23,    24,    25,    26,    27,    28,    29,    30,
     9252, 10068, 10916, 11796, 12708, 13652, 14628, 15371, 16411, 17483,
    // 31,    32,    33,    34,    35,    36,    37,    38,    39,    40
    18587, 19723, 20891, 22091, 23008, 24272, 25568, 26896, 28256, 29648,
];
