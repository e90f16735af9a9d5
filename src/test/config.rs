use crate::sim::{SimConfig, SimError};

#[test]
fn defaults_match_the_builtin_scenario() {
    let config = SimConfig::default();
    assert_eq!(config.horizon, 10_000);
    assert_eq!(config.fanout, vec![1, 1, 1]);
    assert_eq!(config.requests, 2_000);
    assert_eq!(config.seed, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_fanout_is_a_valid_root_only_tree() {
    let config = SimConfig {
        fanout: vec![],
        ..SimConfig::default()
    };
    assert!(config.validate().is_ok());
    assert_eq!(config.device_count(), 1);
}

#[test]
fn zero_fanout_level_is_rejected_with_its_level() {
    let config = SimConfig {
        fanout: vec![2, 0, 3],
        ..SimConfig::default()
    };
    assert_eq!(config.validate(), Err(SimError::EmptyLevel { level: 1 }));
}

#[test]
fn overflowing_device_count_is_rejected() {
    let config = SimConfig {
        fanout: vec![usize::MAX, 2],
        ..SimConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(SimError::TooManyDevices {
            fanout: vec![usize::MAX, 2]
        })
    );
}

#[test]
fn device_count_sums_every_level_including_the_root() {
    let config = SimConfig {
        fanout: vec![2, 3],
        ..SimConfig::default()
    };
    // 1 root + 2 + 6
    assert_eq!(config.device_count(), 9);
}

#[test]
fn config_parses_from_json_with_defaults_for_missing_fields() {
    let config: SimConfig = serde_json::from_str("{}").expect("parse empty config");
    assert_eq!(config, SimConfig::default());

    let config: SimConfig =
        serde_json::from_str(r#"{ "horizon": 500, "fanout": [4, 8] }"#).expect("parse config");
    assert_eq!(config.horizon, 500);
    assert_eq!(config.fanout, vec![4, 8]);
    assert_eq!(config.requests, 2_000);
    assert_eq!(config.seed, 0);
}

#[test]
fn config_round_trips_through_json() {
    let config = SimConfig {
        horizon: 123,
        fanout: vec![2, 2, 2],
        requests: 7,
        seed: 42,
    };
    let json = serde_json::to_string(&config).expect("serialize config");
    let back: SimConfig = serde_json::from_str(&json).expect("parse config");
    assert_eq!(back, config);
}
