/*
 * @Date         : 2026-10-19
 * @Description  : LogisticModel - 拟合得到的逻辑回归系数及预测
 */

use crate::data::RowAccess;
use crate::errors::SgdError;
use crate::utils::sigmoid;
use ndarray::Array1;

/// 拟合得到的逻辑回归模型（无截距项）
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    coefficients: Array1<f64>,
}

impl LogisticModel {
    pub fn new(coefficients: Array1<f64>) -> Self {
        Self { coefficients }
    }

    /// 长度为`p`的稠密系数向量，按特征下标排列
    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Array1<f64> {
        self.coefficients
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// 单个稀疏样本的线性预测值 ψ = Σ x_j β_j
    pub fn decision_function(&self, indices: &[usize], values: &[f64]) -> f64 {
        indices
            .iter()
            .zip(values)
            .map(|(&j, &x)| x * self.coefficients[j])
            .sum()
    }

    /// 每一行为正类的概率 σ(ψ)
    pub fn predict_proba<R: RowAccess + ?Sized>(&self, x: &R) -> Result<Array1<f64>, SgdError> {
        if x.n_cols() != self.n_features() {
            return Err(SgdError::dimension("特征数", self.n_features(), x.n_cols()));
        }
        Ok((0..x.n_rows())
            .map(|i| {
                let (indices, values) = x.row(i);
                sigmoid(self.decision_function(indices, values))
            })
            .collect())
    }

    /// 以0.5为阈值给出`{0, 1}`预测
    pub fn predict<R: RowAccess + ?Sized>(&self, x: &R) -> Result<Array1<f64>, SgdError> {
        Ok(self
            .predict_proba(x)?
            .mapv(|p| if p >= 0.5 { 1.0 } else { 0.0 }))
    }
}
