//! Raster output for finished symbols.

use image::{GrayImage, ImageBuffer, Luma};

use crate::qrcode::Symbol;

const DARK: Luma<u8> = Luma([0u8]);
const LIGHT: Luma<u8> = Luma([255u8]);

/// Widest quiet zone drawn, in modules.
pub const MAX_BORDER: u32 = 256;

/// Largest pixel size of one module.
pub const MAX_SCALE: u32 = 64;

/// Converts a symbol to a grayscale image.
///
/// Each module becomes a `scale` x `scale` square of pixels, and the symbol is surrounded by
/// `border` light modules of quiet zone. `border` is clamped to [`MAX_BORDER`] and `scale` to
/// `1..=`[`MAX_SCALE`], so the image side never exceeds `(177 + 2 * 256) * 64` pixels.
///
/// # Example
///
/// ```rust
/// use qrpack::{encode_text, render::to_image, EccLevel, Version};
///
/// let mut outbuffer = vec![0u8; Version::new(1).buffer_len()];
/// let qr = encode_text(Version::new(1), EccLevel::Low, "Hello, world!", &mut outbuffer).unwrap();
/// let img = to_image(&qr, 4, 1);
/// assert_eq!(img.dimensions(), (29, 29));
/// ```
pub fn to_image(qr: &Symbol<'_>, border: u32, scale: u32) -> GrayImage {
    let scale = scale.clamp(1, MAX_SCALE);
    let border = border.min(MAX_BORDER);
    let modules = qr.size() as u32 + 2 * border;
    let side = modules * scale;
    ImageBuffer::from_fn(side, side, |x, y| {
        let qr_x = (x / scale) as i32 - border as i32;
        let qr_y = (y / scale) as i32 - border as i32;
        if qr.get_module(qr_x, qr_y) {
            DARK
        } else {
            LIGHT
        }
    })
}
