//! Four-component color types with alpha.
//!
//! Same split as [`crate::rgb`]: [`EncodedRgba`] is the byte storage form,
//! [`LinearRgba`] the arithmetic form. Alpha is conceptually independent of
//! the transfer function: the RGB components pass through the sRGB curve on
//! conversion, alpha is quantized straight to and from its byte.
//!
//! Alpha here is straight (not premultiplied). Premultiplied values live in
//! their own type, [`crate::Premultiplied`].

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use lux_transfer::{eotf_u8, oetf_u8, unit_from_u8, unit_to_u8};

use crate::premultiplied::Premultiplied;
use crate::rgb::{EncodedRgb, LinearRgb, LUMA_B, LUMA_G, LUMA_R};

/// sRGB-encoded color with a linear alpha byte.
///
/// RGB components sit on the sRGB gamma curve; alpha is a plain coverage
/// byte with its full dynamic range, never gamma-encoded.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodedRgba {
    /// Red channel, sRGB-encoded.
    pub r: u8,
    /// Green channel, sRGB-encoded.
    pub g: u8,
    /// Blue channel, sRGB-encoded.
    pub b: u8,
    /// Alpha channel, linear.
    pub a: u8,
}

impl EncodedRgba {
    /// Creates a new encoded color with alpha.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates from RGB with the given alpha.
    #[inline]
    pub const fn with_alpha(rgb: EncodedRgb, a: u8) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, a)
    }

    /// Creates a fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Drops the alpha component.
    #[inline]
    pub const fn rgb(self) -> EncodedRgb {
        EncodedRgb::new(self.r, self.g, self.b)
    }

    /// Components as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Decodes to linear light.
    ///
    /// RGB goes through the sRGB EOTF table; alpha maps straight to
    /// `a / 255`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lux_color::EncodedRgba;
    ///
    /// let c = EncodedRgba::new(255, 255, 255, 51).to_linear();
    /// assert_eq!(c.r, 1.0);
    /// assert!((c.a - 0.2).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn to_linear(self) -> LinearRgba {
        LinearRgba::new(
            eotf_u8(self.r),
            eotf_u8(self.g),
            eotf_u8(self.b),
            unit_from_u8(self.a),
        )
    }
}

impl fmt::Display for EncodedRgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sRGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for EncodedRgba {
    #[inline]
    fn from(arr: [u8; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<EncodedRgba> for [u8; 4] {
    #[inline]
    fn from(c: EncodedRgba) -> [u8; 4] {
        c.to_array()
    }
}

/// Linear-light color with straight alpha.
///
/// Components are nominally in [0, 1]; operations do not clamp unless
/// documented. Alpha participates in [`blend`](LinearRgba::blend), scaling
/// and [`clamp01`](LinearRgba::clamp01) like any other component.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LinearRgba {
    /// Red channel, linear light.
    pub r: f32,
    /// Green channel, linear light.
    pub g: f32,
    /// Blue channel, linear light.
    pub b: f32,
    /// Alpha channel, straight (not premultiplied).
    pub a: f32,
}

impl LinearRgba {
    /// Creates a new linear color with alpha.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates from RGB with the given alpha.
    #[inline]
    pub const fn with_alpha(rgb: LinearRgb, a: f32) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, a)
    }

    /// Creates from RGB, fully opaque.
    #[inline]
    pub const fn from_rgb(rgb: LinearRgb) -> Self {
        Self::with_alpha(rgb, 1.0)
    }

    /// Fully transparent black.
    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Opaque white.
    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Drops the alpha component.
    #[inline]
    pub const fn rgb(self) -> LinearRgb {
        LinearRgb::new(self.r, self.g, self.b)
    }

    /// Components as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Encodes to sRGB bytes.
    ///
    /// RGB goes through the sRGB OETF; alpha is quantized straight to its
    /// byte, clamped and rounded half-up.
    #[inline]
    pub fn to_encoded(self) -> EncodedRgba {
        EncodedRgba::new(
            oetf_u8(self.r),
            oetf_u8(self.g),
            oetf_u8(self.b),
            unit_to_u8(self.a),
        )
    }

    /// Relative luminance (Rec.709 coefficients) scaled by alpha.
    #[inline]
    pub fn luminance(self) -> f32 {
        (self.r * LUMA_R + self.g * LUMA_G + self.b * LUMA_B) * self.a
    }

    /// Luminance with caller-supplied coefficients, scaled by alpha.
    ///
    /// The weights are used as given; nothing checks that they sum to one.
    #[inline]
    pub fn luminance_weighted(self, wr: f32, wg: f32, wb: f32) -> f32 {
        (self.r * wr + self.g * wg + self.b * wb) * self.a
    }

    /// Interpolates toward `other` by `t`, alpha included.
    ///
    /// `t` is clamped to [0, 1] first.
    #[inline]
    pub fn blend(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        Self::new(
            self.r * inv + other.r * t,
            self.g * inv + other.g * t,
            self.b * inv + other.b * t,
            self.a * inv + other.a * t,
        )
    }

    /// Clamps each component to [0, 1], alpha included.
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Scales RGB by alpha, moving into the premultiplied representation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lux_color::LinearRgba;
    ///
    /// let c = LinearRgba::new(1.0, 0.5, 0.25, 0.5);
    /// let p = c.premultiply();
    /// assert_eq!(p.raw().r, 0.5);
    /// assert_eq!(p.unpremultiply(), c);
    /// ```
    #[inline]
    pub fn premultiply(self) -> Premultiplied {
        Premultiplied::from_raw(Self::new(
            self.r * self.a,
            self.g * self.a,
            self.b * self.a,
            self.a,
        ))
    }

    /// Converts to a glam vector.
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.r, self.g, self.b, self.a)
    }

    /// Creates from a glam vector.
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl fmt::Display for LinearRgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Add for LinearRgba {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Sub for LinearRgba {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.r - rhs.r,
            self.g - rhs.g,
            self.b - rhs.b,
            self.a - rhs.a,
        )
    }
}

// Scale multiplies every component, alpha included.
impl Mul<f32> for LinearRgba {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Mul<LinearRgba> for f32 {
    type Output = LinearRgba;

    #[inline]
    fn mul(self, rhs: LinearRgba) -> LinearRgba {
        rhs * self
    }
}

impl Index<usize> for LinearRgba {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("LinearRgba index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for LinearRgba {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("LinearRgba index out of bounds: {}", i),
        }
    }
}

impl From<[f32; 4]> for LinearRgba {
    #[inline]
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<LinearRgba> for [f32; 4] {
    #[inline]
    fn from(c: LinearRgba) -> [f32; 4] {
        c.to_array()
    }
}

impl From<glam::Vec4> for LinearRgba {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Self::from_glam(v)
    }
}

impl From<LinearRgba> for glam::Vec4 {
    #[inline]
    fn from(c: LinearRgba) -> glam::Vec4 {
        c.to_glam()
    }
}
