/*
 * @Date         : 2026-10-19
 * @Description  : 惰性稀疏SGD的超参数配置
 */

use crate::errors::{ComparisonOperator, SgdError};
use serde::{Deserialize, Serialize};

/// 训练结束时如何读出系数
///
/// 惰性方案下，未在最后若干次迭代中出现的坐标还欠着若干步岭衰减。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalDecay {
    /// 按各坐标最后一次被触及时的值读出，不再补衰减；从未触及的坐标保持初始值
    #[default]
    AsOfLastTouch,
    /// 读出前对全部坐标补齐到第`max_iterations`次迭代，结果与逐步全量衰减的实现一致
    CatchUpAll,
}

/// 惰性稀疏SGD的配置
///
/// # 示例
/// ```ignore
/// let config = LazySgdConfig::new(0.01, 0.001)
///     .max_iterations(100_000)
///     .seed(42);
///
/// // 或者从JSON读取，缺省字段取默认值
/// let config = LazySgdConfig::from_json_str(r#"{"learning_rate": 0.05, "seed": 7}"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazySgdConfig {
    /// 学习率η
    learning_rate: f64,
    /// 岭惩罚强度λ
    penalty: f64,
    /// 单样本SGD步数
    max_iterations: usize,
    /// 随机数种子（抽样与初始噪声共用）
    seed: u64,
    /// 初始噪声的标准差，只为打破对称
    init_std: f64,
    final_decay: FinalDecay,
}

impl Default for LazySgdConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            penalty: 0.001,
            max_iterations: 10_000,
            seed: 0,
            init_std: 0.001,
            final_decay: FinalDecay::default(),
        }
    }
}

impl LazySgdConfig {
    /// 以给定学习率与惩罚强度创建配置，其余取默认值
    pub fn new(learning_rate: f64, penalty: f64) -> Self {
        Self {
            learning_rate,
            penalty,
            ..Self::default()
        }
    }

    /// 从JSON文本解析配置，并立即校验
    pub fn from_json_str(json: &str) -> Result<Self, SgdError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 设置迭代次数
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// 设置随机种子
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// 设置初始噪声标准差，0表示从全零开始
    pub fn init_std(mut self, init_std: f64) -> Self {
        self.init_std = init_std;
        self
    }

    pub fn final_decay(mut self, final_decay: FinalDecay) -> Self {
        self.final_decay = final_decay;
        self
    }

    pub const fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub const fn penalty(&self) -> f64 {
        self.penalty
    }

    pub const fn iterations(&self) -> usize {
        self.max_iterations
    }

    pub const fn random_seed(&self) -> u64 {
        self.seed
    }

    pub const fn noise_std(&self) -> f64 {
        self.init_std
    }

    pub const fn final_decay_mode(&self) -> FinalDecay {
        self.final_decay
    }

    /// 每步岭衰减的底数 `1 - ηλ`
    pub fn decay_base(&self) -> f64 {
        1.0 - self.learning_rate * self.penalty
    }

    /// 校验超参数取值范围
    ///
    /// NaN 一律视为不满足。`1 - ηλ` 落在[0, 1)之外时只记警告，不报错。
    pub fn validate(&self) -> Result<(), SgdError> {
        if !ComparisonOperator::GreaterThan.holds(self.learning_rate, 0.0) {
            return Err(SgdError::comparison(
                "学习率",
                ComparisonOperator::GreaterThan,
                0.0,
                self.learning_rate,
            ));
        }
        if !ComparisonOperator::GreaterOrEqual.holds(self.penalty, 0.0) {
            return Err(SgdError::comparison(
                "惩罚强度",
                ComparisonOperator::GreaterOrEqual,
                0.0,
                self.penalty,
            ));
        }
        if self.max_iterations == 0 {
            return Err(SgdError::comparison(
                "迭代次数",
                ComparisonOperator::GreaterOrEqual,
                1.0,
                0.0,
            ));
        }
        if !(self.init_std.is_finite() && self.init_std >= 0.0) {
            return Err(SgdError::InvalidInitStd(self.init_std));
        }

        let base = self.decay_base();
        if !(0.0..1.0).contains(&base) && self.penalty > 0.0 {
            log::warn!(
                "衰减底数 1 - ηλ = {base} 不在[0, 1)内（η={}, λ={}），系数可能振荡或发散",
                self.learning_rate,
                self.penalty
            );
        }
        Ok(())
    }
}
