//! Reference validation for the sRGB transfer functions.
//!
//! Expected byte values come from evaluating the IEC 61966-2-1 formulas
//! independently; the byte round-trip must be exact for all 256 inputs.

use approx::assert_relative_eq;
use lux_transfer::srgb::{eotf, eotf_u8, oetf, oetf_u8};

#[test]
fn encode_reference_values() {
    let cases: [(f32, u8); 10] = [
        (1.0, 255),
        (0.999, 255),
        (0.99, 254),
        (0.75, 225),
        (0.5, 188),
        (0.212, 127),
        (1.0 / 255.0, 13),
        (0.001, 3),
        (0.0003, 1),
        (0.0, 0),
    ];
    for (linear, expected) in cases {
        assert_eq!(
            oetf_u8(linear),
            expected,
            "oetf_u8({}) should be {}",
            linear,
            expected
        );
    }
}

#[test]
fn decode_reference_values() {
    let cases: [(u8, f32); 9] = [
        (255, 1.0),
        (254, 0.991102),
        (225, 0.752942),
        (188, 0.502886),
        (127, 0.212231),
        (13, 0.004025),
        (3, 0.000911),
        (1, 0.000304),
        (0, 0.0),
    ];
    for (byte, expected) in cases {
        assert_relative_eq!(eotf_u8(byte), expected, epsilon = 1e-5, max_relative = 1e-3);
    }
}

#[test]
fn byte_roundtrip_is_exact() {
    for b in 0..=255u8 {
        let linear = eotf_u8(b);
        assert_eq!(oetf_u8(linear), b, "round-trip drifted for byte {}", b);
    }
}

#[test]
fn table_endpoints_are_exact() {
    assert_eq!(eotf_u8(0), 0.0);
    assert_eq!(eotf_u8(255), 1.0);
}

#[test]
fn transfer_functions_are_monotonic() {
    let mut prev_encoded = f32::NEG_INFINITY;
    let mut prev_linear = f32::NEG_INFINITY;
    for i in 0..=1000 {
        let v = i as f32 / 1000.0;
        let encoded = oetf(v);
        let linear = eotf(v);
        assert!(encoded >= prev_encoded, "oetf not monotonic at {}", v);
        assert!(linear >= prev_linear, "eotf not monotonic at {}", v);
        prev_encoded = encoded;
        prev_linear = linear;
    }
}

#[test]
fn float_roundtrip_within_epsilon() {
    for i in 0..=1000 {
        let v = i as f32 / 1000.0;
        assert_relative_eq!(eotf(oetf(v)), v, epsilon = 1e-5);
    }
}
