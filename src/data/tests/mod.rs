/*
 * @Date         : 2026-10-19
 * @Description  : 数据模块单元测试
 *
 * 测试按功能分组：
 * - dataset: SparseDataset 的维度与标签校验、CSR按行访问
 * - synthetic: 合成数据生成器
 */
