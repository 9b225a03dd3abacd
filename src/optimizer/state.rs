/*
 * @Date         : 2026-10-19
 * @Description  : LazyState - 惰性岭衰减的系数存储与单步更新
 *
 * 每步只触及被抽中样本的非零坐标 A：
 * 1. 对 j ∈ A 补上自上次触及以来欠下的 gap = t - last_touch[j] - 1 步衰减，即乘 (1 - ηλ)^gap
 * 2. 用补齐后的系数计算 ψ = Σ x_j β_j 与 σ(ψ)
 * 3. 对 j ∈ A 做一步梯度 + 普通衰减：β_j ← β_j + η[(y - σ(ψ)) x_j - λ β_j]
 * A 之外的坐标不动，欠下的衰减隐含在 last_touch 里。
 */

use crate::errors::SgdError;
use crate::utils::{decay_factor, sigmoid};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// 惰性SGD的训练状态
///
/// 系数与最后触及迭代号都是长度为`p`的稠密数组，由一次训练独占。
/// 不变量：任意坐标`j`满足 `last_touch[j] <= iteration`。
#[derive(Debug, Clone)]
pub struct LazyState {
    coefficients: Vec<f64>,
    last_touch: Vec<usize>,
    /// 已完成的迭代数，第一步的编号为1
    iteration: usize,
    learning_rate: f64,
    penalty: f64,
    /// 1 - ηλ
    decay_base: f64,
}

impl LazyState {
    /// 以给定初始系数创建状态，所有坐标的最后触及迭代记为0
    pub fn new(coefficients: Vec<f64>, learning_rate: f64, penalty: f64) -> Self {
        let n_features = coefficients.len();
        Self {
            coefficients,
            last_touch: vec![0; n_features],
            iteration: 0,
            learning_rate,
            penalty,
            decay_base: 1.0 - learning_rate * penalty,
        }
    }

    /// 按下标顺序从 N(0, init_std²) 抽取`n_features`个初始系数
    ///
    /// 恰好消耗`n_features`次正态抽样；`init_std`为0时得到全零。
    /// `init_std`为负数或非有限值时返回`InvalidInitStd`，且不消耗随机数。
    pub fn initialize<R: Rng + ?Sized>(
        n_features: usize,
        init_std: f64,
        learning_rate: f64,
        penalty: f64,
        rng: &mut R,
    ) -> Result<Self, SgdError> {
        if !(init_std.is_finite() && init_std >= 0.0) {
            return Err(SgdError::InvalidInitStd(init_std));
        }
        let normal = Normal::new(0.0, init_std).map_err(|_| SgdError::InvalidInitStd(init_std))?;
        let coefficients = (0..n_features).map(|_| normal.sample(&mut *rng)).collect();
        Ok(Self::new(coefficients, learning_rate, penalty))
    }

    /// 用一个样本做一步惰性SGD，返回更新前模型给出的概率σ(ψ)
    ///
    /// # 参数
    /// - `indices`: 样本的非零列下标（活跃集），行内不得重复
    /// - `values`: 与`indices`一一对应的取值
    /// - `label`: 0或1
    ///
    /// # Panics
    /// - `indices`中有下标`>= n_features()`时
    /// - debug构建下，`indices`与`values`长度不同或`indices`含重复下标时
    pub fn step(&mut self, indices: &[usize], values: &[f64], label: f64) -> f64 {
        debug_assert_eq!(indices.len(), values.len());
        self.iteration += 1;
        let t = self.iteration;

        for &j in indices {
            debug_assert!(
                self.last_touch[j] < t,
                "活跃集中列下标{j}重复出现（第{t}次迭代）"
            );
            let gap = t - self.last_touch[j] - 1;
            self.coefficients[j] *= decay_factor(self.decay_base, gap);
            self.last_touch[j] = t;
        }

        let psi: f64 = indices
            .iter()
            .zip(values)
            .map(|(&j, &x)| x * self.coefficients[j])
            .sum();
        let prob = sigmoid(psi);
        let residual = label - prob;

        for (&j, &x) in indices.iter().zip(values) {
            let beta = self.coefficients[j];
            self.coefficients[j] = beta + self.learning_rate * (residual * x - self.penalty * beta);
        }
        prob
    }

    /// 把所有坐标的衰减补齐到当前迭代
    ///
    /// 与`step`不同，当前迭代本身也算作一步未触及，故 gap = iteration - last_touch[j]。
    pub fn catch_up_all(&mut self) {
        let t = self.iteration;
        for (beta, last) in self.coefficients.iter_mut().zip(self.last_touch.iter_mut()) {
            *beta *= decay_factor(self.decay_base, t - *last);
            *last = t;
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn last_touch(&self) -> &[usize] {
        &self.last_touch
    }

    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    pub const fn decay_base(&self) -> f64 {
        self.decay_base
    }

    /// 至少被触及过一次的坐标个数
    pub fn touched_count(&self) -> usize {
        self.last_touch.iter().filter(|&&t| t > 0).count()
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }
}
