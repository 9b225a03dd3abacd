/*
 * @Date         : 2026-10-19
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - config: 配置默认值、构建器与JSON解析
 * - state: 单步惰性更新的数值行为
 * - lazy_sgd: 输入校验、确定性与读出方式
 * - eager: 与逐步全量衰减参考实现的等价性
 */

mod config;
