//! Whole-symbol comparisons against grids produced by the reference C encoder
//! for the same (version, ECC level, payload) triples.

use qrpack::{buffer_size_bytes, encode_text, EccLevel, Encoder, Mask, Mode, Version};

fn check(version: u8, ecc: EccLevel, text: &str, mode: Mode, mask: u8, expected: &[u8]) {
    let version = Version::new(version);
    let mut outbuffer = vec![0u8; buffer_size_bytes(version)];
    let qr = encode_text(version, ecc, text, &mut outbuffer).unwrap();
    assert_eq!(qr.mode(), mode);
    assert_eq!(qr.mask(), Mask::new(mask));
    assert_eq!(qr.modules(), expected);
}

#[rustfmt::skip]
const HELLO_WORLD_V1_LOW: &[u8] = &[
    0xfe, 0x2b, 0xfc, 0x15, 0x50, 0x6e, 0xac, 0xbb, 0x74, 0x15, 0xdb, 0xaf,
    0xae, 0xc1, 0x71, 0x07, 0xfa, 0xaf, 0xe0, 0x10, 0x00, 0xd3, 0x3b, 0xb7,
    0x65, 0x84, 0x68, 0x95, 0x95, 0x7b, 0x9e, 0x71, 0xf7, 0x3a, 0x80, 0x43,
    0x5f, 0xfa, 0x6c, 0xb0, 0x44, 0x68, 0xba, 0x6f, 0x6d, 0xd5, 0x3a, 0xee,
    0x8d, 0xd3, 0x05, 0x71, 0x9f, 0xea, 0x54, 0x00,
];

#[test]
fn hello_world_v1_low() {
    check(1, EccLevel::Low, "HELLO WORLD", Mode::Alphanumeric, 7, HELLO_WORLD_V1_LOW);
}

#[rustfmt::skip]
const DIGITS_V1_MEDIUM: &[u8] = &[
    0xfe, 0x3b, 0xfc, 0x17, 0x10, 0x6e, 0x98, 0xbb, 0x74, 0xb5, 0xdb, 0xad,
    0xae, 0xc1, 0x09, 0x07, 0xfa, 0xaf, 0xe0, 0x00, 0x00, 0xaa, 0x28, 0x96,
    0x85, 0xa8, 0x86, 0xed, 0xdd, 0x9a, 0xbb, 0x22, 0x77, 0x70, 0x80, 0x51,
    0x0b, 0xf8, 0x22, 0x30, 0x44, 0x4b, 0xba, 0xea, 0xed, 0xd2, 0xab, 0xae,
    0xb5, 0xcb, 0x04, 0x3b, 0x8f, 0xe9, 0x72, 0x80,
];

#[test]
fn digits_v1_medium() {
    check(1, EccLevel::Medium, "01234567", Mode::Numeric, 0, DIGITS_V1_MEDIUM);
}

#[rustfmt::skip]
const SHORT_ALNUM_V3_HIGH: &[u8] = &[
    0xfe, 0x3b, 0x6b, 0xfc, 0x12, 0x79, 0xd0, 0x6e, 0x86, 0x92, 0xbb, 0x74,
    0x64, 0x35, 0xdb, 0xa9, 0xcc, 0xae, 0xc1, 0x26, 0x8d, 0x07, 0xfa, 0xaa,
    0xaf, 0xe0, 0x15, 0x7d, 0x00, 0x33, 0xb4, 0x1e, 0x81, 0x2b, 0x3a, 0x04,
    0x2f, 0x87, 0xb0, 0x1e, 0x10, 0xf4, 0xec, 0x8e, 0xad, 0xec, 0x4d, 0x9e,
    0x9e, 0xc2, 0x51, 0xac, 0x8b, 0x13, 0x57, 0x9b, 0xdb, 0xe3, 0x73, 0xc0,
    0x5f, 0x3b, 0xe4, 0x8c, 0xdd, 0x64, 0x95, 0x24, 0x88, 0x68, 0x53, 0x25,
    0xa5, 0xff, 0x36, 0xfc, 0x80, 0x7f, 0xac, 0x73, 0xfa, 0x01, 0xaa, 0x10,
    0x49, 0x7b, 0x17, 0xba, 0x5c, 0x2f, 0x95, 0xd4, 0x43, 0xf1, 0x2e, 0xa7,
    0xdc, 0x83, 0x04, 0x4f, 0x6b, 0x3f, 0xe1, 0xbe, 0xd6, 0x00,
];

#[test]
fn short_alnum_v3_high() {
    check(3, EccLevel::High, "QR", Mode::Alphanumeric, 3, SHORT_ALNUM_V3_HIGH);
}

#[rustfmt::skip]
const MIXED_BLOCKS_V5_QUARTILE: &[u8] = &[
    0xfe, 0x83, 0x58, 0x9b, 0xfc, 0x16, 0x19, 0xee, 0x90, 0x6e, 0xa1, 0x7a,
    0xa6, 0xbb, 0x75, 0x59, 0x17, 0xa5, 0xdb, 0xae, 0x27, 0xa9, 0x2e, 0xc1,
    0x11, 0xde, 0xe9, 0x07, 0xfa, 0xaa, 0xaa, 0xaf, 0xe0, 0x13, 0x5a, 0xee,
    0x00, 0x6b, 0x32, 0x9a, 0xaa, 0xf8, 0x0c, 0x27, 0x9d, 0xc9, 0xb0, 0xa6,
    0x89, 0x67, 0x65, 0x78, 0x7e, 0xa1, 0x9a, 0x71, 0xf4, 0x3d, 0x9d, 0xfb,
    0x02, 0x8a, 0x74, 0x2f, 0xbe, 0x0e, 0x38, 0x91, 0xee, 0xf7, 0xb6, 0x2a,
    0x1d, 0x21, 0x1e, 0xc5, 0xc0, 0xb2, 0x11, 0xa8, 0xc1, 0x6c, 0x3a, 0xbf,
    0xe9, 0xab, 0xf1, 0x56, 0x32, 0xc5, 0xa9, 0x2e, 0x1a, 0x2f, 0x3b, 0x58,
    0xc1, 0xa6, 0x8c, 0x44, 0xc2, 0x23, 0x7e, 0x9e, 0xb7, 0x33, 0xa4, 0x24,
    0x6e, 0x13, 0xd8, 0xbe, 0x32, 0xf9, 0x14, 0xea, 0xa1, 0x2a, 0x68, 0xa6,
    0x2f, 0xd7, 0xba, 0x91, 0x1a, 0x81, 0xb2, 0x3e, 0xe5, 0x8b, 0xa5, 0x1a,
    0xac, 0xfe, 0x80, 0x5e, 0xb3, 0x44, 0x4f, 0xfb, 0x2b, 0xeb, 0x2b, 0xf0,
    0x48, 0xa1, 0xd3, 0x12, 0xba, 0xc1, 0xbb, 0x0f, 0x95, 0xd3, 0xe3, 0xda,
    0x2b, 0x2e, 0xb3, 0xb7, 0x0a, 0x53, 0x05, 0x4b, 0x12, 0xdb, 0x2f, 0xe6,
    0x03, 0x82, 0xb5, 0x80,
];

#[test]
fn mixed_blocks_v5_quartile() {
    check(5, EccLevel::Quartile, "Hello, long blocks! 123", Mode::Byte, 0, MIXED_BLOCKS_V5_QUARTILE);
}

#[rustfmt::skip]
const VERSION_INFO_V7_LOW: &[u8] = &[
    0xfe, 0x70, 0xe5, 0xfb, 0x0b, 0xfc, 0x14, 0x4e, 0x84, 0x72, 0x90, 0x6e,
    0x91, 0x21, 0x78, 0x84, 0xbb, 0x75, 0x32, 0xa1, 0x6f, 0x35, 0xdb, 0xa6,
    0x4a, 0xfe, 0x2f, 0xae, 0xc1, 0x64, 0xe4, 0x4b, 0xe1, 0x07, 0xfa, 0xaa,
    0xaa, 0xaa, 0xaf, 0xe0, 0x06, 0x93, 0x10, 0x86, 0x00, 0xfb, 0xa8, 0x4f,
    0xd1, 0x85, 0x53, 0xa2, 0xa9, 0x14, 0x26, 0xe1, 0xd8, 0xe9, 0x89, 0xd4,
    0xfc, 0xdd, 0x28, 0xf6, 0xf4, 0x2a, 0xa2, 0x40, 0xb6, 0x62, 0xd4, 0x81,
    0xcf, 0x62, 0xd8, 0xbd, 0x4e, 0xa4, 0xd0, 0xea, 0xd8, 0x9d, 0x28, 0x72,
    0xe5, 0x9e, 0x6f, 0x4e, 0x45, 0xfd, 0x42, 0xdf, 0x2d, 0x2e, 0x24, 0x5d,
    0x64, 0x47, 0xef, 0xdc, 0xea, 0xe6, 0xc0, 0x74, 0x23, 0xcd, 0xe5, 0xb1,
    0xb9, 0x0b, 0xc4, 0x5c, 0x84, 0xff, 0x95, 0xfb, 0x7e, 0xfb, 0x14, 0x5e,
    0x54, 0x71, 0x54, 0x58, 0x2b, 0xa7, 0x2a, 0x5f, 0x6b, 0x05, 0x15, 0x91,
    0x10, 0xbb, 0x16, 0x3f, 0x88, 0x5f, 0xd0, 0x0f, 0xc2, 0x4a, 0xa9, 0x04,
    0x28, 0x99, 0xc4, 0x91, 0x8b, 0x74, 0xef, 0x9c, 0xc9, 0x26, 0xc1, 0x2a,
    0xa2, 0x4f, 0x68, 0xe2, 0x5c, 0x80, 0x8e, 0xdc, 0x98, 0xb4, 0x4e, 0xa8,
    0x03, 0xe9, 0x18, 0xcb, 0x28, 0x50, 0x6c, 0x1e, 0x6f, 0xee, 0x79, 0x45,
    0x9f, 0x5f, 0x32, 0x2e, 0x61, 0x1d, 0x28, 0x47, 0x6b, 0xd2, 0x66, 0x42,
    0xe6, 0x74, 0xa3, 0xca, 0x64, 0xf0, 0xd9, 0x3e, 0xc4, 0x79, 0xb9, 0xbd,
    0x95, 0xfb, 0x7e, 0xfa, 0x80, 0x66, 0x5c, 0x71, 0x5c, 0x6b, 0xfa, 0x67,
    0x2a, 0x5f, 0x2b, 0x10, 0x41, 0x91, 0x10, 0x97, 0x16, 0xba, 0xa8, 0x4f,
    0xd1, 0x2f, 0x85, 0xd4, 0xa9, 0x90, 0x28, 0x7d, 0xae, 0xb9, 0x89, 0x54,
    0xbc, 0x19, 0x05, 0x26, 0xeb, 0x2a, 0x89, 0x4f, 0xe8, 0xe2, 0x0c, 0x81,
    0x2f, 0x00,
];

#[test]
fn version_info_v7_low() {
    check(7, EccLevel::Low, "https://example.com/qr?id=7", Mode::Byte, 2, VERSION_INFO_V7_LOW);
}

#[test]
fn locked_encoder_matches_generic() {
    let version = Version::new(3);
    let mut outbuffer = vec![0u8; buffer_size_bytes(version)];
    let qr = Encoder::locked(version)
        .encode_text(version, EccLevel::High, "QR", &mut outbuffer)
        .unwrap();
    assert_eq!(qr.mask(), Mask::new(3));
    assert_eq!(qr.modules(), SHORT_ALNUM_V3_HIGH);
}

#[test]
fn pinned_mask_of_the_winner_matches_search() {
    let version = Version::new(5);
    let mut outbuffer = vec![0u8; buffer_size_bytes(version)];
    let qr = Encoder::new()
        .with_fixed_mask(Mask::new(0))
        .encode_text(version, EccLevel::Quartile, "Hello, long blocks! 123", &mut outbuffer)
        .unwrap();
    assert_eq!(qr.modules(), MIXED_BLOCKS_V5_QUARTILE);
}
