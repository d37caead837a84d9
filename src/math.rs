use crate::Float;

pub const INFINITY: Float = std::f64::INFINITY;
pub const NEG_INFINITY: Float = std::f64::NEG_INFINITY;

/// Offset used for over/under points and for rejecting rays parallel to a surface.
pub const EPSILON: Float = 1.0e-4;

/// Relative tolerance used alongside `EPSILON` in `float_eq`.
const MAX_RELATIVE: Float = 1.0e-6;

/// Absolute + relative comparison in the style of Knuth. Close to zero the absolute
/// epsilon dominates; for large magnitudes the relative one does.
pub fn float_eq(a: Float, b: Float) -> bool {
    approx::relative_eq!(a, b, epsilon = EPSILON, max_relative = MAX_RELATIVE)
}

pub fn lerp(t: Float, v1: Float, v2: Float) -> Float {
    (1.0 - t) * v1 + t * v2
}

/// Real roots of `a t^2 + b t + c = 0`, smallest first.
///
/// Uses `q = -0.5 (b + sign(b) sqrt(disc))` so that neither root is computed by
/// subtracting nearly equal quantities. A repeated root is returned twice.
pub fn quadratic(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    let discrim = b * b - 4.0 * a * c;
    if discrim < 0.0 { return None; }

    let root_discrim = discrim.sqrt();
    let q = if b < 0.0 {
        -0.5 * (b - root_discrim)
    } else {
        -0.5 * (b + root_discrim)
    };

    // b == 0 and disc == 0 forces c == 0: a double root at the origin
    if q == 0.0 {
        return Some((0.0, 0.0));
    }

    let t0 = q / a;
    let t1 = c / q;

    if t0 > t1 { Some((t1, t0)) } else { Some((t0, t1)) }
}
