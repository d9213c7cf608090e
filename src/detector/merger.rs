//! 置信度合并：多来源信号的递减叠加

/// 次级信号的叠加权重
const STACKING_WEIGHT: f64 = 0.1;

/// 钳制到 [0,100]，NaN 视为 0
pub fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// 置信度合并器
pub struct ConfidenceMerger;

impl ConfidenceMerger {
    /// 以最高信号为基数，其余信号按剩余空间的10%依次叠加
    pub fn merge(signals: &[f64]) -> f64 {
        let mut sorted: Vec<f64> = signals.iter().copied().map(clamp_confidence).collect();
        sorted.sort_by(|a, b| b.total_cmp(a));

        let Some((&highest, rest)) = sorted.split_first() else {
            return 0.0;
        };

        let merged = rest.iter().fold(highest, |running, &signal| {
            running + signal * (1.0 - running / 100.0) * STACKING_WEIGHT
        });
        clamp_confidence(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_empty_and_single() {
        assert_eq!(ConfidenceMerger::merge(&[]), 0.0);
        assert_eq!(ConfidenceMerger::merge(&[72.5]), 72.5);
    }

    #[test]
    fn test_merge_corroboration() {
        let merged = ConfidenceMerger::merge(&[50.0, 95.0]);
        assert!((merged - 95.25).abs() < 1e-9);
        assert!(merged > 95.0);
    }

    #[test]
    fn test_merge_order_independent() {
        let a = ConfidenceMerger::merge(&[30.0, 80.0, 55.0, 10.0]);
        let b = ConfidenceMerger::merge(&[10.0, 55.0, 30.0, 80.0]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_merge_stays_in_range() {
        assert_eq!(ConfidenceMerger::merge(&[100.0, 100.0, 100.0]), 100.0);
        assert_eq!(ConfidenceMerger::merge(&[150.0, -20.0, f64::NAN]), 100.0);
        assert_eq!(ConfidenceMerger::merge(&[f64::NAN]), 0.0);

        let merged = ConfidenceMerger::merge(&[1.0, 99.0, 42.0, 7.5, 63.0]);
        assert!((0.0..=100.0).contains(&merged));
    }
}
