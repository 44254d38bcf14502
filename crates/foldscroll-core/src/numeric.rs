//! Small numeric helpers shared by the navigation code.

/// Restrict `value` to `[min, max]`.
///
/// Callers must pass `min <= max`; the result is unspecified otherwise.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Round half up: `floor(value + 0.5)`.
///
/// Unlike `f64::round`, `-2.5` rounds to `-2` and `2.5` to `3`, so an
/// animation frame at exactly half progress always picks the later line.
#[inline]
pub fn round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `-1`, `0` or `1` depending on the sign of `n`.
#[inline]
pub fn sign(n: i64) -> i64 {
    n.signum()
}
