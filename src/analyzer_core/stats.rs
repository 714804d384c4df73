//! Numeric helpers over raw metric slices
//!
//! Every helper returns `None` when the statistic is undefined for its input
//! (empty slice, insufficient sample size, zero variance), so undefinedness
//! survives serialization as JSON null instead of collapsing to zero.

/// Smallest value; `None` for an empty slice
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Largest value; `None` for an empty slice
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Arithmetic mean; `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median, averaging the two middle values for even lengths
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Sample standard deviation (N-1 denominator); `None` for fewer than two values
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

/// Bias-corrected Fisher-Pearson skewness
///
/// `None` for fewer than three values; a zero-variance sample reports 0.0.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    let m = mean(values)?;
    let nf = n as f64;
    let m2 = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / nf;
    let m3 = values.iter().map(|v| (v - m).powi(3)).sum::<f64>() / nf;
    if m2 == 0.0 {
        return Some(0.0);
    }
    let g1 = m3 / m2.powf(1.5);
    Some(g1 * (nf * (nf - 1.0)).sqrt() / (nf - 2.0))
}

/// Pearson correlation coefficient, clamped to [-1, 1]
///
/// `None` for mismatched lengths, fewer than two pairs, or zero variance in
/// either series.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|b| b * b).sum();

    let cov = n * sum_xy - sum_x * sum_y;
    let var_x = n * sum_x2 - sum_x * sum_x;
    let var_y = n * sum_y2 - sum_y * sum_y;

    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    let r = cov / (var_x * var_y).sqrt();
    if !r.is_finite() {
        return None;
    }
    Some(r.max(-1.0).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("statistic should be defined");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_mean_and_extremes() {
        let values = [3.0, 1.0, 2.0];
        assert_close(mean(&values), 2.0);
        assert_close(min(&values), 1.0);
        assert_close(max(&values), 3.0);
        assert_eq!(mean(&[]), None);
        assert_eq!(min(&[]), None);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_close(median(&[5.0, 1.0, 3.0]), 3.0);
        assert_close(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_sample_std_uses_n_minus_one() {
        // var([1,2,3,4]) with N-1 = 5/3
        assert_close(sample_std(&[1.0, 2.0, 3.0, 4.0]), (5.0_f64 / 3.0).sqrt());
        assert_eq!(sample_std(&[1.0]), None);
        assert_close(sample_std(&[2.0, 2.0]), 0.0);
    }

    #[test]
    fn test_skewness_symmetric_is_zero() {
        assert_close(skewness(&[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_skewness_bias_corrected() {
        // For [0, 0, 3]: g1 = 1/sqrt(2), correction sqrt(6), so G1 = sqrt(3)
        assert_close(skewness(&[0.0, 0.0, 3.0]), 3.0_f64.sqrt());
    }

    #[test]
    fn test_skewness_degenerate_cases() {
        assert_eq!(skewness(&[1.0, 2.0]), None);
        assert_close(skewness(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert_close(pearson(&x, &y), 1.0);

        let inverse = [8.0, 6.0, 4.0, 2.0];
        assert_close(pearson(&x, &inverse), -1.0);
    }

    #[test]
    fn test_pearson_undefined() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[3.0]), None);
        // Zero variance in one series
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), None);
    }

    #[test]
    fn test_pearson_stays_in_bounds() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.2, 1.9, 3.1, 4.05, 4.8];
        let r = pearson(&x, &y).unwrap();
        assert!(r > 0.99 && r <= 1.0, "got {}", r);
    }
}
