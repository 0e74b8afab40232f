use super::utils;

#[test]
#[ignore]
fn test_config_defaults() {
    let output = utils::run(&["config"]);
    let config: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(config["max_ua_length"], serde_json::Value::Null);
    assert_eq!(config["opera_min_version"], 5.0);
    assert_eq!(config["ie"]["modern"], 9.0);
}
