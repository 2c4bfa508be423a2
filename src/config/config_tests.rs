use super::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_warehouse_config_defaults() {
    let config = WarehouseConfig::new("/srv/warehouse");
    assert_eq!(config.return_location, DEFAULT_RETURN_LOCATION);
    assert_eq!(config.max_workers, DEFAULT_MAX_WORKERS);
}

#[test]
fn test_module_roots_live_under_warehouse() {
    let config = WarehouseConfig::new("/srv/warehouse");
    assert_eq!(config.equipment_root(), Path::new("/srv/warehouse/equipment"));
    assert_eq!(config.inventory_root(), Path::new("/srv/warehouse/inventory"));
}

#[test]
fn test_max_workers_zero_is_clamped() {
    let config = WarehouseConfig::new("/tmp").with_max_workers(0);
    assert_eq!(config.max_workers, 1);
}

#[test]
fn test_with_return_location() {
    let config = WarehouseConfig::new("/tmp").with_return_location("shelf 3");
    assert_eq!(config.return_location, "shelf 3");
}

#[test]
fn test_default_config_uses_home_folder() {
    let config = WarehouseConfig::default();
    assert!(config.root.ends_with(".warehouse"));
}

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg: UserConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(cfg, UserConfig::default());
    assert!(cfg.auth.is_none());
}

#[test]
fn test_full_toml() {
    let toml_str = r#"
[server]
port = 9090
return_location = "tool wall"
max_workers = 4

[auth]
username = "admin"
password = "hunter2"
"#;
    let cfg: UserConfig = toml::from_str(toml_str).expect("Should parse full config");
    assert_eq!(cfg.server.port, Some(9090));
    assert_eq!(cfg.server.return_location.as_deref(), Some("tool wall"));
    assert_eq!(cfg.server.max_workers, Some(4));
    let auth = cfg.auth.expect("auth section");
    assert_eq!(auth.username, "admin");
    assert_eq!(auth.password, "hunter2");
}

#[test]
fn test_unknown_server_key_is_rejected() {
    let result: Result<UserConfig, _> = toml::from_str("[server]\nprot = 1\n");
    assert!(result.is_err());
}

#[test]
fn test_roundtrip_serialization() {
    let cfg = UserConfig {
        server: ServerConfig {
            port: Some(8081),
            ..ServerConfig::default()
        },
        auth: None,
    };
    let serialized = toml::to_string(&cfg).expect("Should serialize");
    let deserialized: UserConfig = toml::from_str(&serialized).expect("Should deserialize");
    assert_eq!(cfg, deserialized);
}

#[test]
fn test_load_user_config_absent_file() {
    let dir = tempdir().expect("tempdir");
    let cfg = load_user_config(&dir.path().join(CONFIG_FILE)).expect("absent file is fine");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_load_user_config_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[server]\nport = 3000\n").expect("write config");

    let cfg = load_user_config(&path).expect("parse config");
    assert_eq!(cfg.server.port, Some(3000));
}

#[test]
fn test_load_user_config_malformed() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, "[server\nport = ").expect("write config");

    let err = load_user_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_ensure_custom_root() {
    let dir = tempdir().expect("tempdir");
    assert!(ensure_custom_root(dir.path()).is_ok());

    let missing = dir.path().join("nope");
    let err = ensure_custom_root(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::MissingRoot(p) if p == missing));
}

#[test]
fn test_user_config_path_file_name() {
    assert!(user_config_path().ends_with(CONFIG_FILE));
}

#[test]
fn test_overlay_prefers_later_values() {
    let file = ServerConfig {
        port: Some(9000),
        return_location: Some("shelf".to_string()),
        max_workers: None,
    };
    let cli = ServerConfig {
        port: Some(8081),
        return_location: None,
        max_workers: Some(4),
    };
    let merged = file.overlay(cli);
    assert_eq!(merged.port, Some(8081));
    assert_eq!(merged.return_location.as_deref(), Some("shelf"));
    assert_eq!(merged.max_workers, Some(4));
    assert_eq!(merged.port_or_default(), 8081);
    assert_eq!(ServerConfig::default().port_or_default(), DEFAULT_PORT);
}

#[test]
fn test_apply_keeps_unset_fields() {
    let server = ServerConfig {
        port: None,
        return_location: None,
        max_workers: Some(0),
    };
    let config = server.apply(WarehouseConfig::new("/srv/warehouse"));
    assert_eq!(config.return_location, DEFAULT_RETURN_LOCATION);
    assert_eq!(config.max_workers, 1);

    let server = ServerConfig {
        return_location: Some("bench".to_string()),
        ..ServerConfig::default()
    };
    let config = server.apply(WarehouseConfig::new("/srv/warehouse"));
    assert_eq!(config.return_location, "bench");
    assert_eq!(config.max_workers, DEFAULT_MAX_WORKERS);
}
