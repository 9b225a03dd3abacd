//! # 常用接口模块
//!
//! 本模块提供一些各处共用的数值函数



/// 逻辑函数 σ(ψ) = 1 / (1 + exp(-ψ))
///
/// 不做数值保护：ψ极大或极小时分别趋于1和0，溢出行为交由浮点语义决定。
pub fn sigmoid(psi: f64) -> f64 {
    1.0 / (1.0 + (-psi).exp())
}

/// 计算惰性补齐衰减的乘子 `base^gap`
///
/// `gap`可表示为`i32`时用`powi`，否则退回`powf`。`gap == 0`时恰为1。
pub fn decay_factor(base: f64, gap: usize) -> f64 {
    match i32::try_from(gap) {
        Ok(gap) => base.powi(gap),
        Err(_) => base.powf(gap as f64),
    }
}
