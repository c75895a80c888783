//! Configuration validation and deserialization.

use rstest::rstest;

use xsim_core::common::SetupError;
use xsim_core::Config;

#[rstest]
#[case::window(|c: &mut Config| c.resources.window_size = 0)]
#[case::units(|c: &mut Config| c.resources.int_units = 0)]
#[case::int_latency(|c: &mut Config| c.latency.int_latency = 0)]
#[case::div_latency(|c: &mut Config| c.latency.div_latency = 0)]
#[case::mul_latency(|c: &mut Config| c.latency.mul_latency = 0)]
#[case::mod_latency(|c: &mut Config| c.latency.mod_latency = 0)]
#[case::exp_latency(|c: &mut Config| c.latency.exp_latency = 0)]
#[case::mem_delay(|c: &mut Config| c.memory.max_delay = 0)]
fn test_zeroed_field_rejected(#[case] zero: fn(&mut Config)) {
    let mut config = Config::default();
    zero(&mut config);
    assert!(config.validate().is_err());
}

#[test]
fn test_default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_zero_latency_names_category() {
    let mut config = Config::default();
    config.latency.exp_latency = 0;
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        SetupError::ZeroLatency {
            category: "exponent"
        }
    ));
    assert!(err.to_string().contains("exponent"));
}

#[test]
fn test_full_json_round_trip() {
    let json = r#"{
        "general": { "trace_instructions": true, "clock_frequency": "500MHz" },
        "resources": { "window_size": 4, "int_units": 1 },
        "latency": {
            "int_latency": 2, "div_latency": 6, "mul_latency": 3,
            "mod_latency": 6, "exp_latency": 10
        },
        "memory": { "max_delay": 64, "seed": 9 }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.clock_frequency, "500MHz");
    assert_eq!(config.resources.window_size, 4);
    assert_eq!(config.latency.exp_latency, 10);
    assert_eq!(config.memory.seed, 9);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_is_all_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    let defaults = Config::default();
    assert_eq!(config.resources.window_size, defaults.resources.window_size);
    assert_eq!(config.latency.div_latency, defaults.latency.div_latency);
    assert_eq!(config.memory.max_delay, defaults.memory.max_delay);
}
