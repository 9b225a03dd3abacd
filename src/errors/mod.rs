use thiserror::Error;
mod ops;
pub use self::ops::*;

/// 错误的大类，供调用方按类别处理而不必匹配具体变体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 输入维度、超参数或标签不合法，训练不会开始
    InvalidArgument,
    /// 配置文本无法解析
    InvalidConfig,
}

#[derive(Error, Debug)]
pub enum SgdError {
    // 数字比较用
    #[error("{value_name}须{operator}{threshold}，实际为{actual}")]
    ValueMustSatisfyComparison {
        value_name: String,
        operator: ComparisonOperator,
        threshold: f64,
        actual: f64,
    },
    #[error("维度不一致：{what}期望为{expected}，实际为{got}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        got: usize,
    },
    #[error("第{row}个标签为{value}，标签只能是0或1")]
    InvalidLabel { row: usize, value: f64 },
    #[error("初始化噪声的标准差须为非负有限数，实际为{0}")]
    InvalidInitStd(f64),

    #[error("配置解析失败：{0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SgdError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ValueMustSatisfyComparison { .. }
            | Self::DimensionMismatch { .. }
            | Self::InvalidLabel { .. }
            | Self::InvalidInitStd(_) => ErrorKind::InvalidArgument,
            Self::ConfigParse(_) => ErrorKind::InvalidConfig,
        }
    }

    /// 构造数值比较类错误
    pub(crate) fn comparison(
        value_name: &str,
        operator: ComparisonOperator,
        threshold: f64,
        actual: f64,
    ) -> Self {
        Self::ValueMustSatisfyComparison {
            value_name: value_name.to_string(),
            operator,
            threshold,
            actual,
        }
    }

    pub(crate) fn dimension(what: &str, expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            what: what.to_string(),
            expected,
            got,
        }
    }
}
