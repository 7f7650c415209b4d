//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//! Byte-indexed decoding goes through a precomputed table (see [`crate::lut`]);
//! encoding to integers rounds half-up and clamps at the range boundaries.
//!
//! # Range
//!
//! - [`eotf`] / [`oetf`]: input and output nominally [0, 1], never clamped
//! - [`eotf_u8`] / [`oetf_u8`]: full u8 range, clamped at the boundaries
//! - [`eotf_u16`] / [`oetf_u16`]: full u16 range, clamped at the boundaries
//!
//! NaN and infinite inputs fall through the IEEE-754 comparisons below;
//! the result is unspecified but never a panic.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use crate::lut::srgb_to_linear_lut;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// Converts gamma-encoded sRGB [0, 1] to linear [0, 1]. Inputs outside
/// [0, 1] produce unclamped outputs.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use lux_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// Converts linear [0, 1] to gamma-encoded sRGB [0, 1]. Inputs outside
/// [0, 1] produce unclamped outputs; quantized callers get clamping from
/// [`oetf_u8`] / [`oetf_u16`] instead.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use lux_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Encodes linear light to an sRGB byte.
///
/// Clamps at the boundaries (`l >= 1` gives 255, `l <= 0` gives 0) and
/// rounds half-up in between.
///
/// # Example
///
/// ```rust
/// use lux_transfer::srgb::oetf_u8;
///
/// assert_eq!(oetf_u8(0.5), 188);
/// assert_eq!(oetf_u8(1.5), 255);
/// assert_eq!(oetf_u8(-0.5), 0);
/// ```
#[inline]
pub fn oetf_u8(l: f32) -> u8 {
    if l >= 1.0 {
        255
    } else if l <= 0.0 {
        0
    } else {
        (oetf(l) * 255.0 + 0.5) as u8
    }
}

/// Encodes linear light to a 16-bit sRGB value.
///
/// Same policy as [`oetf_u8`] scaled to [0, 65535].
#[inline]
pub fn oetf_u16(l: f32) -> u16 {
    if l >= 1.0 {
        65535
    } else if l <= 0.0 {
        0
    } else {
        (oetf(l) * 65535.0 + 0.5) as u16
    }
}

/// Decodes an sRGB byte to linear light.
///
/// O(1) lookup in the precomputed table; equivalent to `eotf(b / 255)`
/// except that the table pins entries 0 and 255 to exactly `0.0` and `1.0`.
///
/// # Example
///
/// ```rust
/// use lux_transfer::srgb::eotf_u8;
///
/// assert_eq!(eotf_u8(0), 0.0);
/// assert_eq!(eotf_u8(255), 1.0);
/// assert!((eotf_u8(127) - 0.212231).abs() < 1e-5);
/// ```
#[inline]
pub fn eotf_u8(b: u8) -> f32 {
    srgb_to_linear_lut()[b as usize]
}

/// Decodes a 16-bit sRGB value to linear light.
///
/// Computed directly; a 65536-entry table would cost more than the pow call
/// saves.
#[inline]
pub fn eotf_u16(v: u16) -> f32 {
    eotf(v as f32 / 65535.0)
}

/// Applies the sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Applies the sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}
