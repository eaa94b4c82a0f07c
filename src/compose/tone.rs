//! Tone curves applied to the lit pattern

use num_traits::{Float, clamp};

/// Inverse-gamma color boost, clamped to [0, 1]
///
/// Negative inputs are treated as black so the power stays defined.
/// `boost` must be greater than zero.
pub fn color_boost<T: Float>(value: T, boost: T) -> T {
    let lit = value.max(T::zero());
    clamp(lit.powf(boost.recip()), T::zero(), T::one())
}

/// Linear contrast around mid-grey, clamped to [0, 1]
///
/// A contrast of one is the identity and zero collapses to mid-grey.
pub fn contrast_curve<T: Float>(value: T, contrast: T) -> T {
    let mid = (T::one() + T::one()).recip();
    clamp(contrast.mul_add(value - mid, mid), T::zero(), T::one())
}

/// Full tone pass for one pattern sample under a given light multiplier
pub fn tone_sample<T: Float>(pattern: T, light: T, boost: T, contrast: T) -> T {
    contrast_curve(color_boost(pattern * light, boost), contrast)
}
