//! # lux-color
//!
//! Linear and sRGB-encoded color vectors for rendering pipelines.
//!
//! Arithmetic on gamma-encoded components is wrong: blending two sRGB bytes
//! halfway does not produce the color halfway between them in light. This
//! crate keeps the two representations in separate types so the mistake
//! cannot be made silently:
//!
//! - [`EncodedRgb`] / [`EncodedRgba`] - bytes on the sRGB curve, the
//!   storage and display form
//! - [`LinearRgb`] / [`LinearRgba`] - linear-light floats, the form
//!   blending, luminance and compositing are correct on
//! - [`Premultiplied`] - linear RGBA whose RGB is scaled by alpha, tagged
//!   so the status travels with the value
//!
//! Alpha, where present, is never on the gamma curve: it decodes and
//! encodes as a plain coverage fraction.
//!
//! # Usage
//!
//! ```rust
//! use lux_color::{EncodedRgb, LinearRgb};
//!
//! // Decode, blend in linear light, re-encode
//! let a = EncodedRgb::new(255, 0, 0).to_linear();
//! let b = EncodedRgb::new(0, 0, 255).to_linear();
//! let mixed = a.blend(b, 0.5).to_encoded();
//! assert!(mixed.r > 127); // linear mixing keeps more energy than byte mixing
//! ```
//!
//! # Clamping policy
//!
//! Operations do not clamp unless documented. Sums, differences and scales
//! may leave [0, 1] and stay valid intermediates; [`LinearRgb::clamp01`] /
//! [`LinearRgba::clamp01`] apply the clamp where a caller needs it, and the
//! byte encoders clamp at their boundaries. `blend` clamps its factor, and
//! nothing else, implicitly.
//!
//! # Dependencies
//!
//! - [`lux_transfer`] - the scalar transfer functions and tables
//! - [`glam`] - vector interop with host math code

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod premultiplied;
pub mod rgb;
pub mod rgba;

pub use premultiplied::Premultiplied;
pub use rgb::{EncodedRgb, LinearRgb, LUMA, LUMA_B, LUMA_G, LUMA_R};
pub use rgba::{EncodedRgba, LinearRgba};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use lux_color::prelude::*;
/// ```
pub mod prelude {
    pub use crate::premultiplied::Premultiplied;
    pub use crate::rgb::{EncodedRgb, LinearRgb, LUMA, LUMA_B, LUMA_G, LUMA_R};
    pub use crate::rgba::{EncodedRgba, LinearRgba};
}
