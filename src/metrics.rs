//! 评估指标
//!
//! 拟合系数与真实系数的相关性，以及概率预测的对数损失和准确率。

use crate::errors::{ComparisonOperator, SgdError};
use ndarray::ArrayView1;

/// 两个向量的 Pearson 相关系数
///
/// 任一向量方差为0时结果为NaN。
pub fn pearson_correlation(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<f64, SgdError> {
    if a.len() != b.len() {
        return Err(SgdError::dimension("向量长度", a.len(), b.len()));
    }
    if a.len() < 2 {
        return Err(SgdError::comparison(
            "向量长度",
            ComparisonOperator::GreaterOrEqual,
            2.0,
            a.len() as f64,
        ));
    }

    let n = a.len() as f64;
    let mean_a = a.sum() / n;
    let mean_b = b.sum() / n;
    let centered_a = a.mapv(|v| v - mean_a);
    let centered_b = b.mapv(|v| v - mean_b);
    let cov = centered_a.dot(&centered_b);
    let var_a = centered_a.dot(&centered_a);
    let var_b = centered_b.dot(&centered_b);
    Ok(cov / (var_a * var_b).sqrt())
}

/// 单个样本的交叉熵损失 `-(y ln p + (1 - y) ln(1 - p))`，按标签取其中一项以免出现 0 × ∞
pub(crate) fn log_loss_term(label: f64, prob: f64) -> f64 {
    if label == 1.0 {
        -prob.ln()
    } else {
        -(1.0 - prob).ln()
    }
}

/// 平均对数损失
///
/// 概率恰为0或1且与标签相反时结果为无穷大，不做截断。
pub fn log_loss(labels: ArrayView1<f64>, probs: ArrayView1<f64>) -> Result<f64, SgdError> {
    if labels.len() != probs.len() {
        return Err(SgdError::dimension("概率个数", labels.len(), probs.len()));
    }
    if labels.is_empty() {
        return Err(SgdError::comparison(
            "样本数",
            ComparisonOperator::GreaterOrEqual,
            1.0,
            0.0,
        ));
    }
    let total: f64 = labels
        .iter()
        .zip(probs.iter())
        .map(|(&y, &p)| log_loss_term(y, p))
        .sum();
    Ok(total / labels.len() as f64)
}

/// 预测标签与真实标签相等的比例
pub fn accuracy(labels: ArrayView1<f64>, predicted: ArrayView1<f64>) -> Result<f64, SgdError> {
    if labels.len() != predicted.len() {
        return Err(SgdError::dimension("预测个数", labels.len(), predicted.len()));
    }
    if labels.is_empty() {
        return Err(SgdError::comparison(
            "样本数",
            ComparisonOperator::GreaterOrEqual,
            1.0,
            0.0,
        ));
    }
    let correct = labels
        .iter()
        .zip(predicted.iter())
        .filter(|&(y, p)| y == p)
        .count();
    Ok(correct as f64 / labels.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_err;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::array;

    #[test]
    fn test_pearson_correlation() {
        let a = array![1.0, 2.0, 3.0, 4.0];
        let b = array![2.0, 4.0, 6.0, 8.0];
        assert_relative_eq!(pearson_correlation(a.view(), b.view()).unwrap(), 1.0);

        let c = array![4.0, 3.0, 2.0, 1.0];
        assert_relative_eq!(pearson_correlation(a.view(), c.view()).unwrap(), -1.0);

        // 对缩放不敏感
        let d = array![0.001, 0.002, 0.003, 0.004];
        assert_relative_eq!(pearson_correlation(a.view(), d.view()).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_correlation_invalid() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![1.0, 2.0];
        assert_err!(pearson_correlation(a.view(), b.view()), SgdError::DimensionMismatch(3, 2));

        let single = array![1.0];
        assert_err!(
            pearson_correlation(single.view(), single.view()),
            SgdError::ValueMustSatisfyComparison { .. }
        );

        let flat = array![1.0, 1.0, 1.0];
        assert!(pearson_correlation(a.view(), flat.view()).unwrap().is_nan());
    }

    #[test]
    fn test_log_loss() {
        let labels = array![1.0, 0.0];
        let probs = array![0.5, 0.5];
        assert_abs_diff_eq!(
            log_loss(labels.view(), probs.view()).unwrap(),
            std::f64::consts::LN_2,
            epsilon = 1e-15
        );

        let perfect = array![1.0, 0.0];
        assert_eq!(log_loss(labels.view(), perfect.view()).unwrap(), 0.0);

        let wrong = array![0.0, 1.0];
        assert!(log_loss(labels.view(), wrong.view()).unwrap().is_infinite());
    }

    #[test]
    fn test_accuracy() {
        let labels = array![1.0, 0.0, 1.0, 1.0];
        let predicted = array![1.0, 1.0, 1.0, 0.0];
        assert_eq!(accuracy(labels.view(), predicted.view()).unwrap(), 0.5);

        let empty = ndarray::Array1::<f64>::zeros(0);
        assert_err!(accuracy(empty.view(), empty.view()), SgdError::ValueMustSatisfyComparison { .. });
    }
}
