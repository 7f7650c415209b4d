//! Precomputed byte-decode lookup tables.
//!
//! Two 256-entry tables memoize the per-byte conversions: one maps a byte
//! `b` to `b / 255`, the other runs that ratio through the sRGB EOTF. Both
//! are built once behind a [`OnceLock`] on first access and never mutated
//! afterwards, so any number of threads may read them concurrently and a
//! racing first access builds the table exactly once.
//!
//! # Table sizes
//!
//! 256 entries of f32 is 1KB per table. The 16-bit decode path stays
//! computed (see [`crate::srgb::eotf_u16`]); a 65536-entry table would not
//! pay for itself.

use std::sync::OnceLock;

static UNIT: OnceLock<[f32; 256]> = OnceLock::new();
static LINEAR: OnceLock<[f32; 256]> = OnceLock::new();

/// Table mapping a byte `b` to `b / 255`.
///
/// This is the non-gamma decode used for alpha components.
#[inline]
pub fn unit_lut() -> &'static [f32; 256] {
    UNIT.get_or_init(|| {
        let mut table = [0.0f32; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as f32 / 255.0;
        }
        table
    })
}

/// Table mapping an sRGB-encoded byte to its linear-light value.
///
/// Entries 0 and 255 are pinned to exactly `0.0` and `1.0`; the power curve
/// would otherwise leave transcendental round-off at the extremes and break
/// exact byte round-trips.
#[inline]
pub fn srgb_to_linear_lut() -> &'static [f32; 256] {
    LINEAR.get_or_init(|| {
        let mut table = [0.0f32; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = crate::srgb::eotf(i as f32 / 255.0);
        }
        table[0] = 0.0;
        table[255] = 1.0;
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srgb::eotf;

    #[test]
    fn test_unit_table() {
        let table = unit_lut();
        assert_eq!(table[0], 0.0);
        assert_eq!(table[255], 1.0);
        assert!((table[128] - 128.0 / 255.0).abs() < 1e-7);
    }

    #[test]
    fn test_linear_table_endpoints_exact() {
        let table = srgb_to_linear_lut();
        assert_eq!(table[0], 0.0);
        assert_eq!(table[255], 1.0);
    }

    #[test]
    fn test_linear_table_matches_eotf() {
        let table = srgb_to_linear_lut();
        for i in 1..255usize {
            let direct = eotf(i as f32 / 255.0);
            assert!(
                (table[i] - direct).abs() < 1e-7,
                "entry {}: table={}, direct={}",
                i,
                table[i],
                direct
            );
        }
    }

    #[test]
    fn test_linear_table_monotonic() {
        let table = srgb_to_linear_lut();
        for i in 1..256usize {
            assert!(table[i] > table[i - 1], "not increasing at {}", i);
        }
    }
}
