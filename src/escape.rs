//! Escape-time evaluation of a single point.
//!
//! The orbit is seeded with the point itself (`z_0 = c`) rather than the
//! origin. Every rendered frame depends on this, so it must not change.

use num::Complex;

/// |z|^2 threshold. A point escapes once the squared modulus is strictly greater.
pub const ESCAPE_RADIUS_SQR: f64 = 2.0 * 2.0;

/// Iteration count at which the orbit of `c` left the escape radius,
/// or `budget` if it never did. Always in `[0, budget]`.
pub fn escape_time(c: Complex<f64>, budget: u32) -> u32 {
    let mut z = c;
    let mut n = 0;
    while n < budget {
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            break;
        }
        z = z * z + c;
        n += 1;
    }
    n
}

/// [`escape_time`] for `real + imag·i`.
pub fn evaluate(real: f64, imag: f64, budget: u32) -> u32 {
    escape_time(Complex { re: real, im: imag }, budget)
}

/// True when the orbit survived the whole budget.
#[inline]
pub fn is_inside(result: u32, budget: u32) -> bool {
    result == budget
}
