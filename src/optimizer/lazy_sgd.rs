/*
 * @Date         : 2026-10-19
 * @Description  : LazySgd - 校验输入并驱动惰性SGD的训练循环
 *
 * 流程：校验 → 初始化系数（p 次正态抽样）→ 每步均匀有放回地抽一行并做一步惰性更新
 *       → 按 FinalDecay 读出系数。全部校验在消耗随机数之前完成。
 */

use super::{FinalDecay, LazySgdConfig, LazyState};
use crate::data::{RowAccess, SparseDataset};
use crate::errors::{ComparisonOperator, SgdError};
use crate::metrics::log_loss_term;
use crate::model::LogisticModel;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sprs::CsMat;

/// 稀疏设计矩阵上L2正则逻辑回归的惰性SGD
///
/// # 使用示例
/// ```ignore
/// let sgd = LazySgd::new(LazySgdConfig::new(0.01, 0.001).max_iterations(50_000).seed(1));
/// let model = sgd.fit(&x, &y, x.cols())?;
///
/// // 调用方自己持有随机数生成器
/// let mut rng = StdRng::seed_from_u64(1);
/// let model = sgd.fit_with_rng(&dataset, dataset.n_cols(), &mut rng)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct LazySgd {
    config: LazySgdConfig,
}

impl LazySgd {
    pub fn new(config: LazySgdConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LazySgdConfig {
        &self.config
    }

    /// 在`sprs`矩阵与标签上训练，随机数生成器由配置中的种子创建
    ///
    /// # 参数
    /// - `x`: `n × p`稀疏矩阵，CSC存储会先转为CSR
    /// - `y`: 长度为`n`的`{0, 1}`标签
    /// - `n_features`: 特征数`p`，须与`x`的列数一致
    pub fn fit(
        &self,
        x: &CsMat<f64>,
        y: &[f64],
        n_features: usize,
    ) -> Result<LogisticModel, SgdError> {
        validate_shape(x.rows(), x.cols(), y.len(), n_features)?;
        let dataset = SparseDataset::from_sprs(x, y)?;
        self.fit_dataset(&dataset, n_features)
    }

    /// 在已构造的数据集上训练，随机数生成器由配置中的种子创建
    pub fn fit_dataset(
        &self,
        dataset: &SparseDataset,
        n_features: usize,
    ) -> Result<LogisticModel, SgdError> {
        let mut rng = StdRng::seed_from_u64(self.config.random_seed());
        self.fit_with_rng(dataset, n_features, &mut rng)
    }

    /// 使用调用方提供的随机数生成器训练
    ///
    /// 输入不合法时直接返回错误，`rng`不会被推进。
    pub fn fit_with_rng<R: Rng + ?Sized>(
        &self,
        dataset: &SparseDataset,
        n_features: usize,
        rng: &mut R,
    ) -> Result<LogisticModel, SgdError> {
        let config = &self.config;
        config.validate()?;
        validate_shape(dataset.n_rows(), dataset.n_cols(), dataset.len(), n_features)?;

        let n_samples = dataset.len();
        log::debug!(
            "惰性SGD开始训练：n={n_samples}, p={n_features}, nnz={}, η={}, λ={}, 迭代{}次",
            dataset.nnz(),
            config.learning_rate(),
            config.penalty(),
            config.iterations()
        );

        let mut state = LazyState::initialize(
            n_features,
            config.noise_std(),
            config.learning_rate(),
            config.penalty(),
            &mut *rng,
        )?;

        // 训练期损失只用于结束时的debug日志，未开启时不计算
        let track_loss = log::log_enabled!(log::Level::Debug);
        let mut total_loss = 0.0;
        for _ in 0..config.iterations() {
            let i = rng.gen_range(0..n_samples);
            let (indices, values) = dataset.row(i);
            let label = dataset.label(i);
            let prob = state.step(indices, values, label);
            if track_loss {
                total_loss += log_loss_term(label, prob);
            }
        }

        if track_loss {
            log::debug!(
                "惰性SGD训练结束：{}/{n_features}个坐标被触及，训练期平均对数损失{:.6}",
                state.touched_count(),
                total_loss / config.iterations() as f64
            );
        }
        if config.final_decay_mode() == FinalDecay::CatchUpAll {
            state.catch_up_all();
        }

        Ok(LogisticModel::new(Array1::from(state.into_coefficients())))
    }
}

/// 校验样本数、特征数与矩阵形状是否一致
fn validate_shape(
    n_rows: usize,
    n_cols: usize,
    n_labels: usize,
    n_features: usize,
) -> Result<(), SgdError> {
    if n_features == 0 {
        return Err(SgdError::comparison(
            "特征数",
            ComparisonOperator::GreaterOrEqual,
            1.0,
            0.0,
        ));
    }
    if n_cols != n_features {
        return Err(SgdError::dimension("矩阵列数", n_features, n_cols));
    }
    if n_rows != n_labels {
        return Err(SgdError::dimension("标签数", n_rows, n_labels));
    }
    if n_rows == 0 {
        return Err(SgdError::comparison(
            "样本数",
            ComparisonOperator::GreaterOrEqual,
            1.0,
            0.0,
        ));
    }
    Ok(())
}
