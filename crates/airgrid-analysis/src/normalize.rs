/// Min-max scales `values` into `[0, 1]`.
///
/// When every value is equal the range is zero and each output is `0.0`
/// rather than `NaN`. Empty input yields empty output.
#[must_use]
pub fn min_max(values: &[f64]) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };
    let (min, max) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;

    if range <= 0.0 || !range.is_finite() {
        return vec![0.0; values.len()];
    }

    values
        .iter()
        .map(|&v| ((v - min) / range).clamp(0.0, 1.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_empty() {
        assert!(min_max(&[]).is_empty());
    }

    #[test]
    fn endpoints_map_to_zero_and_one() {
        let scaled = min_max(&[1000.0, 2000.0, 1500.0]);
        assert_eq!(scaled, vec![0.0, 1.0, 0.5]);
    }

    #[test]
    fn constant_values_map_to_zero() {
        assert_eq!(min_max(&[42.0, 42.0, 42.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn single_value_maps_to_zero() {
        assert_eq!(min_max(&[7.5]), vec![0.0]);
    }

    #[test]
    fn outputs_stay_in_unit_interval() {
        let values = [3.0, 99.5, 0.0, 12.25, 99.5, 41.0];
        for v in min_max(&values) {
            assert!((0.0..=1.0).contains(&v), "out of range: {v}");
        }
    }
}
