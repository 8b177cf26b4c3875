#![forbid(unsafe_code)]
//! QR code encoding.
//!
//! Sequences the pipeline for one symbol: segment encoding, terminator and padding, error
//! correction and interleaving, function patterns, zigzag placement and masking. The module
//! grid is written into a buffer owned by the caller; all other buffers are scratch that is
//! dropped before the call returns.
use core::convert::TryFrom;

use tracing::{debug, warn};

use crate::bitstream::BitStream;
use crate::error::{EncodeError, Result};
use crate::grid::{grid_len, BitGrid};
use crate::interleave::add_ecc_and_interleave;
use crate::mask::{choose_and_apply, finish, Mask};
use crate::patterns::Canvas;
use crate::placement::draw_codewords;
use crate::segment::{Mode, Segment};
use crate::tables::{AllVersions, BlockLayout, CapacityTable, LockedVersion};

/// A finished QR Code symbol.
///
/// The modules live in the caller's buffer, packed row-major and MSB-first: module `(x, y)` is
/// bit `y * size + x`. The symbol only borrows that buffer and cannot be modified once built.
///
/// # Example
///
/// ```rust
/// use qrpack::{buffer_size_bytes, encode_text, EccLevel, Mode, Version};
///
/// let version = Version::new(1);
/// let mut outbuffer = vec![0u8; buffer_size_bytes(version)];
/// let qr = encode_text(version, EccLevel::Low, "HELLO WORLD", &mut outbuffer).unwrap();
///
/// assert_eq!(qr.size(), 21);
/// assert_eq!(qr.mode(), Mode::Alphanumeric);
/// assert!(qr.get_module(0, 0));
/// assert!(!qr.get_module(21, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Symbol<'a> {
    version: Version,
    ecc: EccLevel,
    mode: Mode,
    mask: Mask,
    modules: &'a [u8],
}

impl<'a> Symbol<'a> {
    /// Returns this QR Code's version, in the range [1, 40].
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns this QR Code's size, in the range [21, 177].
    pub fn size(&self) -> i32 {
        i32::from(self.version.size())
    }

    /// Returns this QR Code's error correction level.
    pub fn ecc(&self) -> EccLevel {
        self.ecc
    }

    /// Returns the mode the payload was packed in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns this QR Code's mask, in the range [0, 7].
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// The packed module grid, exactly [`Version::buffer_len`] bytes.
    pub fn modules(&self) -> &'a [u8] {
        self.modules
    }

    /// Returns the color of the module at the given coordinates.
    ///
    /// Returns `true` for dark modules and `false` for light modules. Coordinates outside the
    /// QR code's bounds return `false`.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        let range = 0..self.size();
        if !range.contains(&x) || !range.contains(&y) {
            return false;
        }
        let index = y as usize * self.size() as usize + x as usize;
        self.modules[index >> 3] & (0x80 >> (index & 7)) != 0
    }
}

/// Encoder configuration: which versions it serves and how the mask is chosen.
///
/// [`Encoder::new`] looks every version up in the full capacity tables. [`Encoder::locked`]
/// resolves one version's layouts up front and refuses any other version, for deployments
/// that only ever print one symbol size.
///
/// # Example
///
/// ```rust
/// use qrpack::{EccLevel, EncodeError, Encoder, Version};
///
/// let encoder = Encoder::locked(Version::new(3));
/// let mut outbuffer = vec![0u8; Version::new(3).buffer_len()];
/// let qr = encoder.encode_text(Version::new(3), EccLevel::High, "QR", &mut outbuffer).unwrap();
/// assert_eq!(qr.size(), 29);
///
/// let err = encoder.encode_text(Version::new(4), EccLevel::High, "QR", &mut outbuffer);
/// assert_eq!(err.unwrap_err(), EncodeError::InvalidVersion(4));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Encoder<T: CapacityTable = AllVersions> {
    table: T,
    mask: Option<Mask>,
}

impl Encoder<AllVersions> {
    /// An encoder for every version from 1 to 40 with automatic mask selection.
    pub const fn new() -> Self {
        Self { table: AllVersions, mask: None }
    }
}

impl Default for Encoder<AllVersions> {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder<LockedVersion> {
    /// An encoder that only produces symbols of `version`.
    pub const fn locked(version: Version) -> Self {
        Self { table: LockedVersion::new(version), mask: None }
    }
}

impl<T: CapacityTable> Encoder<T> {
    /// Always use `mask` instead of searching for the lowest penalty.
    pub fn with_fixed_mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Capacity layout for `version` and `ecc`, if this encoder serves that version.
    pub fn layout(&self, version: Version, ecc: EccLevel) -> Result<BlockLayout> {
        if !self.table.supports(version) {
            return Err(EncodeError::InvalidVersion(version.value()));
        }
        Ok(self.table.layout(version, ecc))
    }

    /// Encodes `text` as raw bytes, stopping at the first NUL if there is one.
    pub fn encode_text<'a>(
        &self,
        version: Version,
        ecc: EccLevel,
        text: &str,
        outbuffer: &'a mut [u8],
    ) -> Result<Symbol<'a>> {
        let bytes = text.as_bytes();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        self.encode_bytes(version, ecc, &bytes[..end], outbuffer)
    }

    /// Encodes `data` into the first [`Version::buffer_len`] bytes of `outbuffer`.
    ///
    /// The densest mode able to carry all of `data` is selected. On error nothing has been
    /// written to `outbuffer`.
    pub fn encode_bytes<'a>(
        &self,
        version: Version,
        ecc: EccLevel,
        data: &[u8],
        outbuffer: &'a mut [u8],
    ) -> Result<Symbol<'a>> {
        let layout = self.layout(version, ecc)?;
        let required = version.buffer_len();
        if outbuffer.len() < required {
            return Err(EncodeError::BufferTooSmall { required, actual: outbuffer.len() });
        }

        let seg = Segment::new(data);
        let capacitybits = layout.data_capacity_bytes() * 8;
        match seg.bit_length(version) {
            Some(n) if n <= capacitybits => {}
            required_bits => {
                debug!(?required_bits, capacitybits, "data does not fit");
                return Err(EncodeError::DataTooLarge { required_bits, capacity_bits: capacitybits });
            }
        }

        // Data codewords followed by the interleaved stream, plus the function mask
        let rawlen = usize::from(layout.raw_modules).div_ceil(8);
        let mut codewords = scratch(rawlen * 2)?;
        let mut funcmods = scratch(required)?;
        let (databuf, allcodewords) = codewords.split_at_mut(rawlen);
        let datalen = layout.data_capacity_bytes();
        write_data_codewords(&seg, version, &mut databuf[..datalen]);
        add_ecc_and_interleave(&databuf[..datalen], layout, allcodewords);

        let size = version.size();
        let (gridbytes, _) = outbuffer.split_at_mut(required);
        let mut canvas = Canvas::new(BitGrid::new(gridbytes, size), BitGrid::new(&mut funcmods, size));
        canvas.draw_function_patterns(version, ecc);
        let placed = draw_codewords(&mut canvas, allcodewords, usize::from(layout.raw_modules));
        debug_assert_eq!(placed, usize::from(layout.raw_modules));

        let mask = match self.mask {
            Some(mask) => {
                finish(&mut canvas, ecc, mask);
                mask
            }
            None => choose_and_apply(&mut canvas, ecc),
        };
        let Canvas { modules, .. } = canvas;
        debug!(
            version = version.value(),
            ?ecc,
            mode = ?seg.mode(),
            mask = mask.value(),
            "encoded symbol"
        );
        Ok(Symbol { version, ecc, mode: seg.mode(), mask, modules: modules.into_bytes() })
    }
}

/// Writes the segment, terminator and pad bytes so that `buf` is exactly filled.
/// Returns the number of bits written, always `buf.len() * 8`.
pub(crate) fn write_data_codewords(seg: &Segment<'_>, version: Version, buf: &mut [u8]) -> usize {
    let mut bb = BitStream::new(buf);
    let capacitybits = bb.capacity_bits();
    seg.write_to(&mut bb, version);

    // Add terminator and pad up to a byte if applicable
    let numzerobits = core::cmp::min(4, capacitybits - bb.len());
    bb.append_bits(0, numzerobits as u8);
    let numzerobits = bb.len().wrapping_neg() & 7;
    bb.append_bits(0, numzerobits as u8);
    debug_assert_eq!(bb.len() % 8, 0);

    // Pad with alternating bytes until data capacity is reached
    for &padbyte in [0xec, 0x11].iter().cycle() {
        if bb.len() >= capacitybits {
            break;
        }
        bb.append_bits(padbyte, 8);
    }
    bb.len()
}

fn scratch(len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    if buf.try_reserve_exact(len).is_err() {
        warn!(len, "No memory for scratch buffer");
        return Err(EncodeError::OutOfMemory);
    }
    buf.resize(len, 0);
    Ok(buf)
}

/// Bytes a module buffer must have to hold a symbol of `version`.
pub fn buffer_size_bytes(version: Version) -> usize {
    version.buffer_len()
}

/// Encodes `data` with the full-range encoder and automatic mask selection.
///
/// See [`Encoder::encode_bytes`].
pub fn encode_bytes<'a>(
    version: Version,
    ecc: EccLevel,
    data: &[u8],
    outbuffer: &'a mut [u8],
) -> Result<Symbol<'a>> {
    Encoder::new().encode_bytes(version, ecc, data, outbuffer)
}

/// Encodes `text` with the full-range encoder and automatic mask selection.
///
/// See [`Encoder::encode_text`].
pub fn encode_text<'a>(
    version: Version,
    ecc: EccLevel,
    text: &str,
    outbuffer: &'a mut [u8],
) -> Result<Symbol<'a>> {
    Encoder::new().encode_text(version, ecc, text, outbuffer)
}

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum EccLevel {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl EccLevel {
    /// Returns the 2-bit value recorded in the format information. This is also the row
    /// index into the capacity tables.
    pub const fn format_bits(self) -> u8 {
        match self {
            EccLevel::Low => 1,
            EccLevel::Medium => 0,
            EccLevel::Quartile => 3,
            EccLevel::High => 2,
        }
    }
}

impl TryFrom<u8> for EccLevel {
    type Error = EncodeError;

    /// 0 = Low, 1 = Medium, 2 = Quartile, 3 = High.
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(EccLevel::Low),
            1 => Ok(EccLevel::Medium),
            2 => Ok(EccLevel::Quartile),
            3 => Ok(EccLevel::High),
            other => Err(EncodeError::InvalidEccLevel(other)),
        }
    }
}

/// A QR code version (1–40).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported in the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported in the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is outside the range [1, 40]. Use [`Version::try_from`] for
    /// numbers that come from outside the program.
    pub const fn new(ver: u8) -> Self {
        assert!(
            Version::MIN.value() <= ver && ver <= Version::MAX.value(),
            "Version number out of range"
        );
        Self(ver)
    }

    /// Returns the value, which is in the range [1, 40].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Side length in modules, `4 * version + 17`.
    pub const fn size(self) -> u8 {
        self.0 * 4 + 17
    }

    /// Returns the minimum length of the module buffer for a QR Code of this version number.
    pub const fn buffer_len(self) -> usize {
        grid_len(self.size())
    }
}

impl TryFrom<u8> for Version {
    type Error = EncodeError;

    fn try_from(ver: u8) -> Result<Self> {
        if (Version::MIN.value()..=Version::MAX.value()).contains(&ver) {
            Ok(Version(ver))
        } else {
            Err(EncodeError::InvalidVersion(ver))
        }
    }
}
