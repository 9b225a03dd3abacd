//! 数据模块
//!
//! 提供带二值标签的稀疏数据集（特征以`sprs`的CSR矩阵存储）以及合成数据生成器。
//!
//! # 主要组件
//!
//! - [`RowAccess`]: 以O(nnz_i)取出第`i`行非零元的 trait
//! - [`SparseDataset`]: CSR稀疏矩阵 + 对齐的`{0, 1}`标签
//! - [`synthetic`]: 逻辑连接下的合成稀疏数据
//!
//! # 使用示例
//!
//! ```ignore
//! use lazy_sparse_sgd::data::{synthetic, SparseDataset};
//!
//! let problem = synthetic::make_sparse_logistic(10_000, 100, 0.1, 42)?;
//! let dataset = SparseDataset::from_sprs(&problem.x, &problem.y)?;
//! println!("样本数: {}, 非零元: {}", dataset.len(), dataset.nnz());
//! ```

mod dataset;
pub mod synthetic;

#[cfg(test)]
mod tests;

pub use dataset::SparseDataset;

/// 按行访问稀疏矩阵
pub trait RowAccess {
    /// 行数
    fn n_rows(&self) -> usize;

    /// 列数
    fn n_cols(&self) -> usize;

    /// 第`i`行的非零列下标及对应取值，按存储顺序给出
    ///
    /// # Panics
    /// `i >= n_rows()`时
    fn row(&self, i: usize) -> (&[usize], &[f64]);
}
