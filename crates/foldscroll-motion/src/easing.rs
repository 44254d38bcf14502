//! Pure easing functions for scroll animations
//!
//! Every curve maps progress in [0, 1] to eased progress in [0, 1] and is
//! monotonic, so interpolated hop counts never move backwards.

use std::f64::consts::FRAC_PI_2;

pub use foldscroll_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Quadratic => power_ease_out(t, 2),
            EasingType::Cubic => power_ease_out(t, 3),
            EasingType::Quartic => power_ease_out(t, 4),
            EasingType::Quintic => power_ease_out(t, 5),
            EasingType::Circular => circular_ease_out(t),
            EasingType::Sine => sine_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// f(t) = 1 - (1-t)^n
#[inline]
fn power_ease_out(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

/// f(t) = sqrt(1 - (1-t)²)
#[inline]
fn circular_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    (1.0 - inv * inv).sqrt()
}

/// f(t) = sin(t·π/2)
#[inline]
fn sine_ease_out(t: f64) -> f64 {
    (t * FRAC_PI_2).sin()
}

/// f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}
