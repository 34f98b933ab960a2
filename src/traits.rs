/*!
   Traits used by the extraction algorithm
*/

use num::Float;

/**
Trait that must be implemented for a type to be used as a voxel intensity
(and as the coordinate type of the extracted mesh).
It mostly has to be a float with a few conversions from integers.
*/
pub trait Intensity: Default + Clone + Copy + Float {
    /// Epsilon value (used for float comparisons)
    const EPSILON: Self;
    /// Value for 0.5
    const HALF: Self;
    /// Value for 0
    const ZERO: Self;
    /// Value for 1
    const ONE: Self;

    /// Whether a point with this intensity lies inside the surface.
    /// A value exactly equal to the threshold counts as inside, so that
    /// adjacent cells classify their shared corners identically.
    fn inside(&self, threshold: &Self) -> bool {
        *self >= *threshold
    }

    /// Interpolate to determine where between A and B the threshold is crossed
    /// (0 meaning at A, 1 meaning at B). The result is always a finite value
    /// in [0, 1]: near-equal values fall back to the midpoint rather than
    /// dividing by zero, and so does an edge with a non-finite endpoint
    /// (where the quotient would be NaN).
    fn interp(a: Self, b: Self, threshold: Self) -> Self {
        if !a.is_finite() || !b.is_finite() {
            return Self::HALF;
        }
        if (b - a).abs() > Self::EPSILON {
            let toward_b = (threshold - a) / (b - a);
            toward_b.max(Self::ZERO).min(Self::ONE)
        } else {
            Self::HALF
        }
    }

    /// A value of this type representing the grid index `i`
    fn from_index(i: usize) -> Self;
}

macro_rules! float_impl_intensity {
    ($T:ident) => {
        impl Intensity for $T {
            const EPSILON: Self = $T::EPSILON;
            const HALF: Self = 0.5;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn from_index(i: usize) -> Self {
                i as $T
            }
        }
    };
}

float_impl_intensity!(f32);
float_impl_intensity!(f64);
