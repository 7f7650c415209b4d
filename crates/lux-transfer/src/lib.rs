//! # lux-transfer
//!
//! sRGB transfer functions and lookup tables for linear-light pipelines.
//!
//! Rendering and image-processing code must do its arithmetic (blending,
//! luminance, compositing) on linear-light values, while storage and display
//! use gamma-encoded sRGB. This crate is the numeric engine for moving
//! between the two: scalar transfer functions, quantized 8-bit and 16-bit
//! entry points, and slice-level conversion for raw component buffers.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **Unit value**: a [0, 1] float that is not on the gamma curve at all
//!   (alpha/coverage takes this path)
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`srgb`] | Scalar OETF/EOTF at f32, u8 and u16 precision |
//! | [`lut`] | Process-wide 256-entry byte-decode tables |
//! | [`quantize`] | Unit-range byte/u16 quantization (the alpha path) |
//! | [`bulk`] | In-place and allocating slice conversion |
//!
//! # Usage
//!
//! ```rust
//! use lux_transfer::srgb;
//!
//! // Decode an sRGB byte to linear light (table lookup)
//! let linear = srgb::eotf_u8(127);
//!
//! // Encode linear light back to a byte
//! let byte = srgb::oetf_u8(linear);
//! assert_eq!(byte, 127);
//! ```
//!
//! # Totality
//!
//! Nothing in this crate panics or returns an error: out-of-range inputs are
//! handled by boundary clamping at the quantized entry points, and the float
//! paths pass values through unclamped. NaN and infinite inputs land in
//! whatever the IEEE-754 comparisons produce and are not specified.
//!
//! # Used By
//!
//! - `lux-color` - color-vector algebra over these functions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bulk;
pub mod lut;
pub mod quantize;
pub mod srgb;

// Re-export the scalar entry points; bulk ops stay namespaced.
pub use lut::{srgb_to_linear_lut, unit_lut};
pub use quantize::{unit_from_u8, unit_from_u16, unit_to_u8, unit_to_u16};
pub use srgb::{eotf, eotf_u8, eotf_u16, oetf, oetf_u8, oetf_u16};
