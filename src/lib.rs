//! # qrpack
//!
//! A deterministic QR Code Model 2 encoder that writes straight into a buffer you own.
//!
//! `qrpack` encodes text or binary data into a single numeric, alphanumeric or byte segment at
//! the version and error correction level you choose, then picks the mask with the lowest
//! penalty. The finished symbol is a packed bit grid, row-major and MSB-first, so it can be
//! stored or sent as-is and rendered by anything that understands that layout.
//!
//! ## Features
//!
//! - Versions 1 to 40 and all four error correction levels: Low, Medium, Quartile, High.
//! - The caller sizes and owns the output buffer; scratch memory is released before returning.
//! - Nothing is written to the output buffer when encoding fails.
//! - An encoder locked to a single version for constrained deployments.
//! - Optional grayscale image output (`image` feature, on by default).
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrpack = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! ```rust
//! use qrpack::{buffer_size_bytes, encode_text, EccLevel, Version};
//!
//! let version = Version::new(2);
//! let mut outbuffer = vec![0u8; buffer_size_bytes(version)];
//! let qr = encode_text(version, EccLevel::Medium, "https://example.com", &mut outbuffer).unwrap();
//!
//! for y in 0..qr.size() {
//!     let row: String = (0..qr.size())
//!         .map(|x| if qr.get_module(x, y) { "##" } else { "  " })
//!         .collect();
//!     println!("{}", row);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`qrcode`]: Encoding entry points and the symbol type.
//! - [`segment`], [`reed_solomon`], [`interleave`], [`patterns`], [`placement`], [`mask`]: the
//!   stages of the pipeline, in order.
//! - [`render`]: Image output for finished symbols.

pub mod bitstream;
pub mod error;
pub mod grid;
pub mod interleave;
pub mod mask;
pub mod patterns;
pub mod placement;
pub mod qrcode;
pub mod reed_solomon;
#[cfg(feature = "image")]
pub mod render;
pub mod segment;
pub mod tables;

pub use crate::error::{EncodeError, Result};
pub use crate::mask::Mask;
pub use crate::qrcode::{buffer_size_bytes, encode_bytes, encode_text, EccLevel, Encoder, Symbol, Version};
pub use crate::segment::Mode;
pub use crate::tables::{AllVersions, BlockLayout, CapacityTable, LockedVersion};
