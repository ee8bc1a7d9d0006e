use clap_derive::ValueEnum;

/// How a value's deviation is measured when deciding whether it is an outlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutlierRule {
    /// Measure each value against the mean and standard deviation of the
    /// other values at the same position.
    #[default]
    LeaveOneOut,
    /// Measure each value against the statistics of the whole collection,
    /// itself included.
    ZScore,
}

/// Arithmetic mean. Returns NaN for an empty slice.
///
/// Accumulates offsets from the first value, so a slice of identical values
/// yields exactly that value.
pub fn mean(values: &[f64]) -> f64 {
    let Some(&first) = values.first() else {
        return f64::NAN;
    };
    first + values.iter().map(|x| x - first).sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`).
///
/// # Arguments
/// * `values` - The samples.
///
/// # Returns
/// The standard deviation, or 0.0 when there are fewer than two samples.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Absolute deviation of every value from the mean, in standard deviations.
/// All zeros when the spread is zero.
pub fn z_scores(values: &[f64]) -> Vec<f64> {
    let m = mean(values);
    let sd = std_dev(values);
    values
        .iter()
        .map(|x| if sd == 0.0 { 0.0 } else { (x - m).abs() / sd })
        .collect()
}

/// Absolute deviation of every value from the mean of the *other* values, in
/// units of their standard deviation.
///
/// A value whose peers all agree has deviation 0.0 if it matches them and
/// infinity otherwise. A single value has deviation 0.0.
pub fn leave_one_out_scores(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return vec![0.0; values.len()];
    }

    let mut others = Vec::with_capacity(values.len() - 1);
    (0..values.len())
        .map(|i| {
            others.clear();
            others.extend_from_slice(&values[..i]);
            others.extend_from_slice(&values[i + 1..]);

            let m = mean(&others);
            let sd = std_dev(&others);
            let diff = (values[i] - m).abs();
            if sd > 0.0 {
                diff / sd
            } else if diff == 0.0 {
                0.0
            } else {
                f64::INFINITY
            }
        })
        .collect()
}

/// Drop values whose deviation exceeds `threshold`.
///
/// # Arguments
/// * `values` - The samples collected at one (category, sample) position.
/// * `threshold` - Maximum allowed deviation, in standard deviations. A value
///   exactly at the threshold is kept.
/// * `rule` - How deviations are measured.
///
/// # Returns
/// The retained values, in their original order.
pub fn outlier_filter(values: &[f64], threshold: f64, rule: OutlierRule) -> Vec<f64> {
    let scores = match rule {
        OutlierRule::LeaveOneOut => leave_one_out_scores(values),
        OutlierRule::ZScore => z_scores(values),
    };
    values
        .iter()
        .zip(scores)
        .filter(|(_, z)| *z <= threshold)
        .map(|(v, _)| *v)
        .collect()
}

/// Mean of the values that survive the default outlier rule.
pub fn filtered_mean(values: &[f64], threshold: f64) -> f64 {
    filtered_mean_with(values, threshold, OutlierRule::default())
}

/// Mean of the values that survive `rule`. Falls back to the unfiltered mean
/// when every value would be discarded.
pub fn filtered_mean_with(values: &[f64], threshold: f64, rule: OutlierRule) -> f64 {
    let kept = outlier_filter(values, threshold, rule);
    if kept.is_empty() {
        tracing::debug!(
            count = values.len(),
            threshold,
            "outlier filter discarded every value, using unfiltered mean"
        );
        return mean(values);
    }
    mean(&kept)
}
