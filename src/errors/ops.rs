use std::fmt::{self, Display};

/// 比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    GreaterOrEqual,
    GreaterThan,
    LessOrEqual,
}
impl ComparisonOperator {
    /// `value`与`threshold`是否满足该比较关系（NaN永远不满足）
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterOrEqual => value >= threshold,
            Self::GreaterThan => value > threshold,
            Self::LessOrEqual => value <= threshold,
        }
    }
}
impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator_name = match self {
            Self::GreaterOrEqual => "≥",
            Self::GreaterThan => ">",
            Self::LessOrEqual => "≤",
        };
        write!(f, "{}", operator_name)
    }
}
