//! # Lazy Sparse SGD
//!
//! `lazy_sparse_sgd`用纯rust实现稀疏设计矩阵上的L2正则逻辑回归随机梯度下降。
//! 每次迭代只访问被抽中样本的非零坐标，其余坐标的岭衰减通过“最后触及迭代”惰性补齐，
//! 因此单次迭代的开销是O(nnz_i)而非O(p)。
//!
//! # 使用示例
//! ```ignore
//! use lazy_sparse_sgd::{LazySgd, LazySgdConfig};
//!
//! let config = LazySgdConfig::new(0.01, 0.001).max_iterations(100_000).seed(42);
//! let model = LazySgd::new(config).fit(&x, &y, x.cols())?;
//! println!("{:?}", model.coefficients());
//! ```

pub mod data;
pub mod errors;
pub mod metrics;
pub mod model;
pub mod optimizer;
pub mod utils;

pub use data::{RowAccess, SparseDataset};
pub use errors::{ErrorKind, SgdError};
pub use model::LogisticModel;
pub use optimizer::{FinalDecay, LazySgd, LazySgdConfig, LazyState};

use ndarray::Array1;
use sprs::CsMat;

/// 按最简契约拟合：给定稀疏矩阵、标签与四个标量超参数，返回长度为`p`的稠密系数向量
///
/// 初始化噪声标准差取[`LazySgdConfig`]的默认值，最终系数按各自最后触及时的值读出。
pub fn fit(
    x: &CsMat<f64>,
    y: &[f64],
    p: usize,
    learning_rate: f64,
    penalty: f64,
    seed: u64,
    max_iterations: usize,
) -> Result<Array1<f64>, SgdError> {
    let config = LazySgdConfig::new(learning_rate, penalty)
        .seed(seed)
        .max_iterations(max_iterations);
    let model = LazySgd::new(config).fit(x, y, p)?;
    Ok(model.into_coefficients())
}
