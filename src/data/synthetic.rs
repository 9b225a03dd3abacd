/*
 * @Date         : 2026-10-19
 * @Description  : 合成数据 - 随机稀疏矩阵、真实系数与逻辑连接生成的二值标签
 *
 * 用于测试与演示：可与拟合结果对比真实系数。
 */

use crate::errors::{ComparisonOperator, SgdError};
use crate::utils::sigmoid;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use sprs::CsMat;

/// 一份合成的稀疏逻辑回归问题
#[derive(Debug, Clone)]
pub struct SyntheticProblem {
    /// `n × p`的CSR特征矩阵
    pub x: CsMat<f64>,
    /// `{0, 1}`标签
    pub y: Vec<f64>,
    /// 生成标签所用的真实系数
    pub true_coefficients: Array1<f64>,
}

/// 生成合成的稀疏逻辑回归数据
///
/// 每个元素以概率`density`非零，非零值服从[0, 1)上的均匀分布；
/// 真实系数服从标准正态分布；标签服从Bernoulli(σ(x·β))。
/// 同一`seed`下结果完全一致。
///
/// # 参数
/// - `n_samples`: 行数，须≥1
/// - `n_features`: 列数，须≥1
/// - `density`: 非零比例，须在(0, 1]内
pub fn make_sparse_logistic(
    n_samples: usize,
    n_features: usize,
    density: f64,
    seed: u64,
) -> Result<SyntheticProblem, SgdError> {
    if n_samples == 0 {
        return Err(SgdError::comparison(
            "样本数",
            ComparisonOperator::GreaterOrEqual,
            1.0,
            0.0,
        ));
    }
    if n_features == 0 {
        return Err(SgdError::comparison(
            "特征数",
            ComparisonOperator::GreaterOrEqual,
            1.0,
            0.0,
        ));
    }
    if !ComparisonOperator::GreaterThan.holds(density, 0.0) {
        return Err(SgdError::comparison(
            "稀疏密度",
            ComparisonOperator::GreaterThan,
            0.0,
            density,
        ));
    }
    if !ComparisonOperator::LessOrEqual.holds(density, 1.0) {
        return Err(SgdError::comparison(
            "稀疏密度",
            ComparisonOperator::LessOrEqual,
            1.0,
            density,
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let true_coefficients: Array1<f64> = (0..n_features)
        .map(|_| rng.sample::<f64, _>(StandardNormal))
        .collect();

    let mut indptr = Vec::with_capacity(n_samples + 1);
    let mut indices = Vec::new();
    let mut data = Vec::new();
    let mut y = Vec::with_capacity(n_samples);
    indptr.push(0);
    for _ in 0..n_samples {
        let mut psi = 0.0;
        for j in 0..n_features {
            if rng.gen_bool(density) {
                let v: f64 = rng.gen_range(0.0..1.0);
                psi += v * true_coefficients[j];
                indices.push(j);
                data.push(v);
            }
        }
        indptr.push(indices.len());
        y.push(if rng.gen_bool(sigmoid(psi)) { 1.0 } else { 0.0 });
    }

    Ok(SyntheticProblem {
        x: CsMat::new((n_samples, n_features), indptr, indices, data),
        y,
        true_coefficients,
    })
}
