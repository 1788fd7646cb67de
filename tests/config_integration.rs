use chat_route::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

const BIN: &str = "chat-route";

// Every variable the config layers read
const ENV_KEYS: &[&str] = &[
    "CHAT_SERVER__HOST",
    "CHAT_SERVER__PORT",
    "CHAT_SERVER__STATIC_DIR",
    "CHAT_SERVER__REQUEST_TIMEOUT_SECS",
    "CHAT_LOG__JSON",
    "CONFIG_FILE",
    "BIND_HOST",
    "PORT",
    "STATIC_DIR",
    "LOG_JSON",
];

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    for key in ENV_KEYS {
        unsafe {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load defaults");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.static_dir, "static");
    assert_eq!(config.server.request_timeout_secs, 30);
    assert!(!config.log.json);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CHAT_SERVER__PORT", "9090");
        env::set_var("CHAT_LOG__JSON", "true");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert!(config.log.json);

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_override_every_server_key() {
    clear_env_vars();
    unsafe {
        env::set_var("CHAT_SERVER__HOST", "10.0.0.1");
        env::set_var("CHAT_SERVER__STATIC_DIR", "public");
        env::set_var("CHAT_SERVER__REQUEST_TIMEOUT_SECS", "5");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.host, "10.0.0.1");
    assert_eq!(config.server.static_dir, "public");
    assert_eq!(config.server.request_timeout_secs, 5);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("CHAT_SERVER__PORT", "9090");
        env::set_var("CHAT_SERVER__HOST", "10.0.0.1");
    }

    // The env layer alone is honoured
    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "10.0.0.1");

    let config = AppConfig::load_from_args([BIN, "--port", "8181", "--host", "127.0.0.1"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.server.host, "127.0.0.1");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("chat.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
  static_dir: assets
"#,
    )
    .expect("Failed to write temp config");

    let path = file_path.to_string_lossy().into_owned();
    let config =
        AppConfig::load_from_args([BIN, "--config", path.as_str()]).expect("Failed to load file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.server.static_dir, "assets");
    // Untouched keys keep their defaults
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
#[serial]
fn test_missing_explicit_file_fails() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "/nonexistent/chat.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_unknown_flag_fails() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--no-such-flag"]);
    assert!(result.is_err());
}
