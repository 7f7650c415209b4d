//! Statically-tagged premultiplied alpha.
//!
//! [`Premultiplied`] wraps a [`LinearRgba`] whose RGB components have been
//! scaled by alpha. Keeping the scaled form in its own type makes the
//! premultiplication status a compile-time fact: a straight-alpha color
//! cannot be unpremultiplied, and a premultiplied one cannot be
//! premultiplied twice. The componentwise math is exactly the untagged
//! scale/divide.
//!
//! Enter via [`LinearRgba::premultiply`], or [`Premultiplied::from_raw`]
//! for buffers that already hold premultiplied components.

use std::fmt;

use crate::rgba::LinearRgba;

/// A linear RGBA color whose RGB has been scaled by its alpha.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Premultiplied(LinearRgba);

impl Premultiplied {
    /// Wraps components that are already premultiplied, unchanged.
    #[inline]
    pub const fn from_raw(raw: LinearRgba) -> Self {
        Self(raw)
    }

    /// The stored components, RGB still scaled by alpha.
    #[inline]
    pub const fn raw(self) -> LinearRgba {
        self.0
    }

    /// The alpha component.
    #[inline]
    pub const fn alpha(self) -> f32 {
        self.0.a
    }

    /// Divides RGB by alpha, returning the straight-alpha color.
    ///
    /// A zero-alpha value is returned unchanged: there is nothing to
    /// recover, and dividing would only manufacture NaN or infinity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lux_color::LinearRgba;
    ///
    /// let ghost = LinearRgba::new(0.25, 0.5, 0.75, 0.0).premultiply();
    /// assert_eq!(ghost.unpremultiply(), ghost.raw());
    /// ```
    #[inline]
    pub fn unpremultiply(self) -> LinearRgba {
        let c = self.0;
        if c.a == 0.0 {
            return c;
        }
        LinearRgba::new(c.r / c.a, c.g / c.a, c.b / c.a, c.a)
    }
}

impl fmt::Display for Premultiplied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "premul RGBA({}, {}, {}, {})",
            self.0.r, self.0.g, self.0.b, self.0.a
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_premultiply_scales_rgb_only() {
        let c = LinearRgba::new(1.0, 0.5, 0.25, 0.5);
        let p = c.premultiply().raw();
        assert_eq!(p, LinearRgba::new(0.5, 0.25, 0.125, 0.5));
    }

    #[test]
    fn test_roundtrip_restores_rgb() {
        let c = LinearRgba::new(0.8, 0.6, 0.4, 0.7);
        let back = c.premultiply().unpremultiply();
        assert_relative_eq!(back.r, c.r, epsilon = 1e-6);
        assert_relative_eq!(back.g, c.g, epsilon = 1e-6);
        assert_relative_eq!(back.b, c.b, epsilon = 1e-6);
        assert_eq!(back.a, c.a);
    }

    #[test]
    fn test_zero_alpha_is_identity() {
        let c = LinearRgba::new(0.25, 0.5, 0.75, 0.0);
        let p = c.premultiply();
        // Premultiplying by zero alpha zeroes RGB; unpremultiplying must not
        // divide by it.
        assert_eq!(p.raw(), LinearRgba::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(p.unpremultiply(), p.raw());

        let stored = Premultiplied::from_raw(LinearRgba::new(0.1, 0.2, 0.3, 0.0));
        assert_eq!(stored.unpremultiply(), stored.raw());
        assert!(stored.unpremultiply().r.is_finite());
    }

    #[test]
    fn test_from_raw_passes_through() {
        let raw = LinearRgba::new(0.1, 0.2, 0.3, 0.5);
        assert_eq!(Premultiplied::from_raw(raw).raw(), raw);
        assert_eq!(Premultiplied::from_raw(raw).alpha(), 0.5);
    }

    #[test]
    fn test_opaque_premultiply_is_identity() {
        let c = LinearRgba::new(0.3, 0.6, 0.9, 1.0);
        assert_eq!(c.premultiply().raw(), c);
        assert_eq!(c.premultiply().unpremultiply(), c);
    }
}
