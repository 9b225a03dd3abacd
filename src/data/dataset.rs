/*
 * @Date         : 2026-10-19
 * @Description  : SparseDataset - 稀疏设计矩阵与对齐的二值标签
 */

use super::RowAccess;
use crate::errors::SgdError;
use sprs::CsMat;

/// SparseDataset - 持有CSR稀疏特征矩阵和`{0, 1}`标签的数据集
///
/// 构造时即校验行数与标签数一致、标签取值合法，之后训练不再重复检查。
/// 行内列下标有序且不重复由`sprs`的构造保证。
///
/// # 示例
/// ```ignore
/// let dataset = SparseDataset::from_sprs(&x, &y)?;
/// println!("样本数: {}", dataset.len());
/// ```
#[derive(Debug, Clone)]
pub struct SparseDataset {
    /// 始终为CSR存储
    features: CsMat<f64>,
    labels: Vec<f64>,
}

impl SparseDataset {
    /// 创建新的 SparseDataset
    ///
    /// # 参数
    /// - `features`: 特征矩阵，每行一个样本；CSC存储会转为CSR，CSR原样接管
    /// - `labels`: 标签，长度须与`features`的行数一致，取值只能是0或1
    pub fn new(features: CsMat<f64>, labels: Vec<f64>) -> Result<Self, SgdError> {
        validate(&features, &labels)?;
        Ok(Self {
            features: features.into_csr(),
            labels,
        })
    }

    /// 由`sprs`矩阵与标签切片构造
    ///
    /// 先校验维度与标签，通过后才复制矩阵（CSC在复制的同时转为CSR）。
    pub fn from_sprs(x: &CsMat<f64>, y: &[f64]) -> Result<Self, SgdError> {
        validate(x, y)?;
        Ok(Self {
            features: x.to_csr(),
            labels: y.to_vec(),
        })
    }

    /// 获取样本数量
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// 检查数据集是否为空
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 非零元总数
    pub fn nnz(&self) -> usize {
        self.features.nnz()
    }

    /// 获取CSR特征矩阵引用
    pub fn features(&self) -> &CsMat<f64> {
        &self.features
    }

    /// 获取标签引用
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// 第`i`个样本的标签
    pub fn label(&self, i: usize) -> f64 {
        self.labels[i]
    }
}

impl RowAccess for SparseDataset {
    fn n_rows(&self) -> usize {
        self.features.rows()
    }

    fn n_cols(&self) -> usize {
        self.features.cols()
    }

    fn row(&self, i: usize) -> (&[usize], &[f64]) {
        let row = self
            .features
            .outer_view(i)
            .unwrap_or_else(|| panic!("样本下标{i}越界（样本数为{}）", self.len()));
        row.into_raw_storage()
    }
}

/// 行数须与标签数一致，标签只能是0或1
fn validate(x: &CsMat<f64>, labels: &[f64]) -> Result<(), SgdError> {
    if x.rows() != labels.len() {
        return Err(SgdError::dimension("标签数", x.rows(), labels.len()));
    }
    match labels
        .iter()
        .enumerate()
        .find(|&(_, &y)| y != 0.0 && y != 1.0)
    {
        Some((row, &value)) => Err(SgdError::InvalidLabel { row, value }),
        None => Ok(()),
    }
}
