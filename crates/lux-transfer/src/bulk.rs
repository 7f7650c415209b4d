//! Bulk conversion over raw component buffers.
//!
//! Slice-level application of the transfer functions for adapter code that
//! works on flat buffers rather than color values. In-place variants mutate
//! their input; allocating variants return a new `Vec`, and an empty input
//! yields an empty `Vec`. Results are identical either way, element for
//! element.
//!
//! The float paths carry a pow call per element and are fanned out across
//! chunks with rayon; the byte paths are table lookups and stay sequential.
//!
//! # Example
//!
//! ```rust
//! use lux_transfer::bulk;
//!
//! let mut row = vec![0.25f32, 0.5, 0.75];
//! bulk::eotf_in_place(&mut row);
//! ```

use rayon::prelude::*;

use crate::lut::srgb_to_linear_lut;
use crate::srgb::{eotf, oetf, oetf_u8};

/// Chunk length for the parallel split.
const CHUNK: usize = 4096;

/// Decodes every element from sRGB to linear light, in place.
pub fn eotf_in_place(values: &mut [f32]) {
    values.par_chunks_mut(CHUNK).for_each(|chunk| {
        for v in chunk {
            *v = eotf(*v);
        }
    });
}

/// Encodes every element from linear light to sRGB, in place.
pub fn oetf_in_place(values: &mut [f32]) {
    values.par_chunks_mut(CHUNK).for_each(|chunk| {
        for v in chunk {
            *v = oetf(*v);
        }
    });
}

/// Decodes a buffer from sRGB to linear light into a new `Vec`.
pub fn eotf_to_vec(values: &[f32]) -> Vec<f32> {
    let mut out = values.to_vec();
    eotf_in_place(&mut out);
    out
}

/// Encodes a buffer from linear light to sRGB into a new `Vec`.
pub fn oetf_to_vec(values: &[f32]) -> Vec<f32> {
    let mut out = values.to_vec();
    oetf_in_place(&mut out);
    out
}

/// Decodes a buffer of sRGB bytes to linear light.
pub fn eotf_u8_to_vec(values: &[u8]) -> Vec<f32> {
    let table = srgb_to_linear_lut();
    values.iter().map(|&b| table[b as usize]).collect()
}

/// Encodes a buffer of linear-light values to sRGB bytes.
pub fn oetf_to_u8_vec(values: &[f32]) -> Vec<u8> {
    values.iter().map(|&v| oetf_u8(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srgb::eotf_u8;

    #[test]
    fn test_empty_inputs() {
        let mut nothing: [f32; 0] = [];
        eotf_in_place(&mut nothing);
        oetf_in_place(&mut nothing);
        assert!(eotf_to_vec(&[]).is_empty());
        assert!(oetf_to_vec(&[]).is_empty());
        assert!(eotf_u8_to_vec(&[]).is_empty());
        assert!(oetf_to_u8_vec(&[]).is_empty());
    }

    #[test]
    fn test_in_place_matches_scalar() {
        let src: Vec<f32> = (0..=100).map(|i| i as f32 / 100.0).collect();
        let mut linear = src.clone();
        eotf_in_place(&mut linear);
        for (v, l) in src.iter().zip(&linear) {
            assert_eq!(*l, eotf(*v));
        }

        let mut encoded = src.clone();
        oetf_in_place(&mut encoded);
        for (v, e) in src.iter().zip(&encoded) {
            assert_eq!(*e, oetf(*v));
        }
    }

    #[test]
    fn test_allocating_matches_in_place() {
        let src: Vec<f32> = (0..=100).map(|i| i as f32 / 100.0).collect();
        let alloc = eotf_to_vec(&src);
        let mut in_place = src.clone();
        eotf_in_place(&mut in_place);
        assert_eq!(alloc, in_place);
    }

    #[test]
    fn test_byte_paths_match_scalar() {
        let bytes: Vec<u8> = (0..=255).collect();
        let linear = eotf_u8_to_vec(&bytes);
        for (b, l) in bytes.iter().zip(&linear) {
            assert_eq!(*l, eotf_u8(*b));
        }

        let back = oetf_to_u8_vec(&linear);
        assert_eq!(back, bytes);
    }

    #[test]
    fn test_large_buffer_spans_chunks() {
        let src: Vec<f32> = (0..3 * CHUNK + 17).map(|i| (i % 251) as f32 / 250.0).collect();
        let out = oetf_to_vec(&src);
        assert_eq!(out.len(), src.len());
        for (v, e) in src.iter().zip(&out) {
            assert_eq!(*e, oetf(*v));
        }
    }
}
