use std::f64::consts::PI;

/// Normal density `(1/(σ√(2π))) · exp(−(x−μ)²/(2σ²))`.
#[inline]
pub fn gaussian_density(x: f64, mean: f64, std_dev: f64) -> f64 {
    let diff = x - mean;
    let exponent = -(diff * diff) / (2.0 * std_dev * std_dev);
    gaussian_coefficient(std_dev) * exponent.exp()
}

#[inline]
pub fn gaussian_coefficient(std_dev: f64) -> f64 {
    1.0 / (std_dev * (2.0 * PI).sqrt())
}

/// `ln Σ exp(v)` computed after shifting by the maximum.
///
/// Returns `NEG_INFINITY` for an empty slice or when every value is `-∞`.
pub fn log_sum_exp(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() {
        return max;
    }
    let sum: f64 = values.iter().map(|v| (v - max).exp()).sum();
    max + sum.ln()
}

/// Index of the largest finite value; the first one wins on exact ties.
#[inline]
pub fn argmax(v: &[f64]) -> Option<usize> {
    let mut best = None;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &x) in v.iter().enumerate() {
        if !x.is_finite() {
            continue;
        }
        if best.is_none() || x > best_value {
            best = Some(i);
            best_value = x;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn standard_normal_peak() {
        let p = gaussian_density(0.0, 0.0, 1.0);
        assert!(approx_eq(p, 1.0 / (2.0 * PI).sqrt(), EPS));
    }

    #[test]
    fn density_is_symmetric_and_decreasing_away_from_mean() {
        let left = gaussian_density(8.0, 10.0, 2.0);
        let right = gaussian_density(12.0, 10.0, 2.0);
        assert!(approx_eq(left, right, EPS));
        assert!(gaussian_density(10.0, 10.0, 2.0) > left);
        assert!(left > gaussian_density(5.0, 10.0, 2.0));
    }

    #[test]
    fn log_sum_exp_matches_direct_sum_for_small_values() {
        let vals = [-1.0, -2.0, -3.5];
        let direct: f64 = vals.iter().map(|v: &f64| v.exp()).sum::<f64>().ln();
        assert!(approx_eq(log_sum_exp(&vals), direct, EPS));
    }

    #[test]
    fn log_sum_exp_survives_underflow() {
        let got = log_sum_exp(&[-1000.0, -1000.0]);
        assert!(approx_eq(got, -1000.0 + 2f64.ln(), 1e-9));
    }

    #[test]
    fn log_sum_exp_of_all_negative_infinity() {
        assert_eq!(log_sum_exp(&[]), f64::NEG_INFINITY);
        assert_eq!(
            log_sum_exp(&[f64::NEG_INFINITY, f64::NEG_INFINITY]),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn argmax_prefers_first_on_ties_and_skips_non_finite() {
        assert_eq!(argmax(&[0.5, 0.5]), Some(0));
        assert_eq!(argmax(&[f64::NAN, 0.1, 0.3]), Some(2));
        assert_eq!(argmax(&[]), None);
        assert_eq!(argmax(&[f64::INFINITY]), None);
    }
}
