//! Pure weight functions for the interpolating methods.

/// Bilinear weights for a 2x2 neighborhood, in (w00, w10, w01, w11)
/// order. A convex combination: the four weights sum to 1 by
/// construction, so no renormalization is needed.
#[inline]
pub fn bilinear_weights(fx: f64, fy: f64) -> [f64; 4] {
    [
        (1.0 - fx) * (1.0 - fy),
        fx * (1.0 - fy),
        (1.0 - fx) * fy,
        fx * fy,
    ]
}

/// Cubic convolution weight for a tap at distance `t` from the sample
/// point. Piecewise cubic with support [-2, 2]:
///
/// ```text
/// a = |t|
/// a <= 1:  1 - 2a^2 + a^3
/// a <= 2:  4 - 8a + 5a^2 - a^3
/// else:    0
/// ```
///
/// The separable 2D weight for the tap at offset `(i, j)` is
/// `cubic_weight(i - fx) * cubic_weight(j - fy)`.
#[inline]
pub fn cubic_weight(t: f64) -> f64 {
    let a = t.abs();
    if a <= 1.0 {
        1.0 - 2.0 * a * a + a * a * a
    } else if a <= 2.0 {
        4.0 - 8.0 * a + 5.0 * a * a - a * a * a
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn bilinear_weights_sum_to_one() {
        for &fx in &[0.0, 0.25, 0.5, 0.75, 0.999] {
            for &fy in &[0.0, 0.25, 0.5, 0.75, 0.999] {
                let w = bilinear_weights(fx, fy);
                let sum: f64 = w.iter().sum();
                assert!((sum - 1.0).abs() < EPS, "fx={} fy={} sum={}", fx, fy, sum);
                assert!(w.iter().all(|&v| v >= 0.0));
            }
        }
    }

    #[test]
    fn bilinear_corners_select_single_pixel() {
        assert_eq!(bilinear_weights(0.0, 0.0), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(bilinear_weights(1.0, 0.0), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(bilinear_weights(0.0, 1.0), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(bilinear_weights(1.0, 1.0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn bilinear_center_is_uniform_quarter() {
        let w = bilinear_weights(0.5, 0.5);
        for &v in &w {
            assert!((v - 0.25).abs() < EPS);
        }
    }

    #[test]
    fn cubic_weight_anchors() {
        assert!((cubic_weight(0.0) - 1.0).abs() < EPS);
        assert!(cubic_weight(1.0).abs() < EPS);
        assert!(cubic_weight(-1.0).abs() < EPS);
        assert!(cubic_weight(2.0).abs() < EPS);
        assert!(cubic_weight(-2.0).abs() < EPS);
        assert_eq!(cubic_weight(2.5), 0.0);
        assert_eq!(cubic_weight(-3.0), 0.0);
    }

    #[test]
    fn cubic_weight_is_even() {
        for &t in &[0.1, 0.5, 0.9, 1.3, 1.8] {
            assert!((cubic_weight(t) - cubic_weight(-t)).abs() < EPS);
        }
    }

    #[test]
    fn cubic_outer_lobe_is_negative() {
        // between 1 and 2 the kernel dips below zero, which is what lets
        // bicubic sharpen (and overshoot)
        assert!(cubic_weight(1.5) < 0.0);
    }

    #[test]
    fn cubic_taps_sum_to_one_away_from_edges() {
        // partition of unity over the 4 taps at offsets {-1, 0, 1, 2}
        for &frac in &[0.0, 0.2, 0.5, 0.8, 0.99] {
            let sum: f64 = [-1i32, 0, 1, 2]
                .iter()
                .map(|&i| cubic_weight(i as f64 - frac))
                .sum();
            assert!((sum - 1.0).abs() < 1e-9, "frac={} sum={}", frac, sum);
        }
    }
}
