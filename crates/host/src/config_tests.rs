use super::*;

#[test]
fn test_default_levels() {
    let config = HostConfig::default();
    assert_eq!(config.levels.len(), 5);
    assert_eq!(config.limits_for(1).depth, 2);
    assert_eq!(config.limits_for(4).time_ms, 5_000);
    assert_eq!(config.limits_for(5).depth, 7);
}

#[test]
fn test_level_clamping() {
    let config = HostConfig::default();
    // Below and above the defined range clamp to the nearest level.
    assert_eq!(config.limits_for(0).depth, 2);
    assert_eq!(config.limits_for(99).depth, 7);
}

#[test]
fn test_parse_toml() {
    let text = r#"
        reload_turns = 2

        [[levels]]
        depth = 3
        time_ms = 1000

        [[levels]]
        depth = 6
        time_ms = 10000
    "#;
    let config = HostConfig::from_toml_str(text).unwrap();
    assert_eq!(config.reload_turns, 2);
    assert_eq!(config.levels.len(), 2);
    assert_eq!(config.limits_for(2).depth, 6);
}

#[test]
fn test_rejects_empty_levels() {
    let err = HostConfig::from_toml_str("levels = []\nreload_turns = 1").unwrap_err();
    assert!(err.contains("at least one level"));
}

#[test]
fn test_rejects_zero_reload() {
    let text = "reload_turns = 0\n\n[[levels]]\ndepth = 2\ntime_ms = 1000";
    let err = HostConfig::from_toml_str(text).unwrap_err();
    assert!(err.contains("reload_turns"));
}

#[test]
fn test_rejects_malformed_toml() {
    assert!(HostConfig::from_toml_str("not toml at all [").is_err());
}
