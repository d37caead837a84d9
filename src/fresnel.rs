use crate::Float;

/// Schlick's approximation of the fraction of light reflected at a dielectric boundary.
///
/// `cos_theta_i` is the cosine between the eye vector and the surface normal, `eta_i` the
/// index of the medium being left and `eta_t` the one being entered.
pub fn schlick(cos_theta_i: Float, eta_i: Float, eta_t: Float) -> Float {
    let mut cos = cos_theta_i.clamp(-1.0, 1.0);

    if eta_i > eta_t {
        // leaving a denser medium; use the transmitted angle, or bail on TIR
        let eta = eta_i / eta_t;
        let sin2_theta_t = eta * eta * (1.0 - cos * cos);
        if sin2_theta_t > 1.0 {
            return 1.0;
        }
        cos = Float::sqrt(1.0 - sin2_theta_t);
    }

    let r0 = ((eta_i - eta_t) / (eta_i + eta_t)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cos).powi(5)
}

/// Exact unpolarized reflectance for a dielectric boundary, used to sanity-check the
/// approximation.
pub fn fresnel_dielectric(cos_theta_i: Float, mut eta_i: Float, mut eta_t: Float) -> Float {
    let mut cos_theta_i = cos_theta_i.clamp(-1.0, 1.0);
    let entering = cos_theta_i > 0.0;
    if !entering {
        std::mem::swap(&mut eta_i, &mut eta_t);
        cos_theta_i = cos_theta_i.abs();
    }

    // compute cos_theta_t using snell's law
    let sin_theta_i = Float::sqrt((1.0 - cos_theta_i * cos_theta_i).max(0.0));
    let sin_theta_t = eta_i / eta_t * sin_theta_i;
    if sin_theta_t >= 1.0 { return 1.0 } // total internal reflection
    let cos_theta_t = Float::sqrt((1.0 - sin_theta_t * sin_theta_t).max(0.0));

    let r_parallel = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t)) / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
    let r_perp =     ((eta_i * cos_theta_i) - (eta_t * cos_theta_t)) / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));

    (r_parallel * r_parallel + r_perp * r_perp) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_schlick_total_internal_reflection() {
        assert_eq!(schlick(FRAC_1_SQRT_2, 1.5, 1.0), 1.0);
    }

    #[test]
    fn test_schlick_normal_incidence() {
        assert_abs_diff_eq!(schlick(1.0, 1.0, 1.5), 0.04, epsilon = 1e-10);
        assert_abs_diff_eq!(schlick(1.0, 1.5, 1.0), 0.04, epsilon = 1e-10);
    }

    #[test]
    fn test_schlick_grazing() {
        // ray skimming a unit glass sphere at height 0.99
        let cos = Float::sqrt(1.0 - 0.99 * 0.99);
        assert_abs_diff_eq!(schlick(cos, 1.0, 1.5), 0.48873, epsilon = 1e-3);
    }

    #[test]
    fn test_schlick_tracks_exact() {
        for i in 1..=20 {
            let cos = i as Float / 20.0;
            let exact = fresnel_dielectric(cos, 1.0, 1.5);
            assert_abs_diff_eq!(schlick(cos, 1.0, 1.5), exact, epsilon = 0.05);
        }
    }

    #[test]
    fn test_exact_matches_at_normal_incidence() {
        assert_abs_diff_eq!(fresnel_dielectric(1.0, 1.0, 1.5), 0.04, epsilon = 1e-10);
        assert_eq!(fresnel_dielectric(-0.1, 1.0, 1.5), 1.0);
    }
}
