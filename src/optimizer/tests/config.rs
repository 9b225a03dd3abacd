//! LazySgdConfig 单元测试

use crate::assert_err;
use crate::errors::{ErrorKind, SgdError};
use crate::optimizer::{FinalDecay, LazySgdConfig};

#[test]
fn test_config_default() {
    let config = LazySgdConfig::default();
    assert_eq!(config.learning_rate(), 0.01);
    assert_eq!(config.penalty(), 0.001);
    assert_eq!(config.iterations(), 10_000);
    assert_eq!(config.random_seed(), 0);
    assert_eq!(config.noise_std(), 0.001);
    assert_eq!(config.final_decay_mode(), FinalDecay::AsOfLastTouch);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builder() {
    let config = LazySgdConfig::new(0.1, 0.2)
        .max_iterations(5)
        .seed(42)
        .init_std(0.0)
        .final_decay(FinalDecay::CatchUpAll);

    assert_eq!(config.learning_rate(), 0.1);
    assert_eq!(config.penalty(), 0.2);
    assert_eq!(config.iterations(), 5);
    assert_eq!(config.random_seed(), 42);
    assert_eq!(config.noise_std(), 0.0);
    assert_eq!(config.final_decay_mode(), FinalDecay::CatchUpAll);
    assert_eq!(config.decay_base(), 1.0 - 0.1 * 0.2);
}

#[test]
fn test_config_validate_ranges() {
    assert_err!(
        LazySgdConfig::new(0.0, 0.1).validate(),
        SgdError::ValueMustSatisfyComparison { value_name, .. } if value_name == "学习率"
    );
    assert_err!(
        LazySgdConfig::new(-0.1, 0.1).validate(),
        SgdError::ValueMustSatisfyComparison { .. }
    );
    assert_err!(
        LazySgdConfig::new(f64::NAN, 0.1).validate(),
        SgdError::ValueMustSatisfyComparison { .. }
    );
    assert_err!(
        LazySgdConfig::new(0.1, -1e-9).validate(),
        SgdError::ValueMustSatisfyComparison { value_name, .. } if value_name == "惩罚强度"
    );
    assert_err!(
        LazySgdConfig::new(0.1, 0.1).max_iterations(0).validate(),
        SgdError::ValueMustSatisfyComparison { value_name, .. } if value_name == "迭代次数"
    );
    assert_err!(
        LazySgdConfig::new(0.1, 0.1).init_std(-1.0).validate(),
        SgdError::InvalidInitStd(_)
    );
    assert_err!(
        LazySgdConfig::new(0.1, 0.1).init_std(f64::INFINITY).validate(),
        SgdError::InvalidInitStd(_)
    );

    // λ = 0 合法
    assert!(LazySgdConfig::new(0.1, 0.0).validate().is_ok());
    // ηλ > 1 只告警
    assert!(LazySgdConfig::new(2.0, 1.0).validate().is_ok());
}

#[test]
fn test_config_error_message() {
    let err = LazySgdConfig::new(0.0, 0.1).validate().unwrap_err();
    assert_eq!(err.to_string(), "学习率须>0，实际为0");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_config_from_json_fills_defaults() {
    let config =
        LazySgdConfig::from_json_str(r#"{"learning_rate": 0.05, "seed": 7, "final_decay": "catch_up_all"}"#)
            .unwrap();

    assert_eq!(config.learning_rate(), 0.05);
    assert_eq!(config.random_seed(), 7);
    assert_eq!(config.final_decay_mode(), FinalDecay::CatchUpAll);
    assert_eq!(config.penalty(), LazySgdConfig::default().penalty());
    assert_eq!(config.iterations(), LazySgdConfig::default().iterations());
}

#[test]
fn test_config_from_json_errors() {
    let result = LazySgdConfig::from_json_str("{not json");
    assert_err!(result, SgdError::ConfigParse(_));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidConfig);

    let result = LazySgdConfig::from_json_str(r#"{"final_decay": "sometimes"}"#);
    assert_err!(result, SgdError::ConfigParse(_));

    // 语法正确但取值越界
    let result = LazySgdConfig::from_json_str(r#"{"penalty": -1.0}"#);
    assert_err!(result, SgdError::ValueMustSatisfyComparison { .. });
}

#[test]
fn test_config_serializes_final_decay_in_snake_case() {
    let json = serde_json::to_string(&LazySgdConfig::default()).unwrap();
    assert!(json.contains(r#""final_decay":"as_of_last_touch""#), "{json}");
}
