/*
 * @Date         : 2026-10-19
 * @Description  : 惰性稀疏SGD优化器模块
 *
 * - config: 超参数与读出方式
 * - state: 系数存储、最后触及迭代与单步惰性更新
 * - lazy_sgd: 输入校验与训练循环
 */

mod config;
mod lazy_sgd;
mod state;

#[cfg(test)]
mod tests;

pub use config::{FinalDecay, LazySgdConfig};
pub use lazy_sgd::LazySgd;
pub use state::LazyState;
