use reported_errors_ui::config::AppConfig;
use reported_errors_ui::error::Error;
use serial_test::serial;
use std::env;
use std::fs;

const BIN: &str = "reported-errors-ui";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("REPORTS_SERVER__PORT");
        env::remove_var("REPORTS_SUPPORT__SUBJECT");
        env::remove_var("REPORTS_THREAD__POLL");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("AI_CHAT_URL");
        env::remove_var("SUPPORT_EMAIL");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load defaults");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.public_origin, None);
    assert_eq!(config.support.subject, "MeetingBaaS Support");
    assert_eq!(config.support.correlation_key, "bot_uuid");
    assert_eq!(config.poll_trigger(), Some("every 5s"));
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("REPORTS_SERVER__PORT", "9090");
        env::set_var("REPORTS_SUPPORT__SUBJECT", "Bot help");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.support.mail_settings().subject, "Bot help");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("REPORTS_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([
        BIN,
        "--port",
        "7171",
        "--chat-url",
        "https://chat.test",
        "--support-email",
        "help@test.io",
    ])
    .expect("Failed to load config");
    assert_eq!(config.server.port, 7171);
    assert_eq!(config.chat.base_url, "https://chat.test");
    assert_eq!(config.support.email, "help@test.io");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("reports.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
  public_origin: "https://app.example.com"
thread:
  poll: ""
"#,
    )
    .expect("Failed to write temp config");

    let path = file_path.to_str().expect("utf-8 path");
    let config =
        AppConfig::load_from_args([BIN, "--config", path]).expect("Failed to load config file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(
        config.server.public_origin.as_deref(),
        Some("https://app.example.com")
    );
    assert_eq!(config.poll_trigger(), None);
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("config.yaml"), "server:\n  port: 6060\n")
        .expect("Failed to write ./config.yaml");

    let previous = env::current_dir().expect("cwd");
    env::set_current_dir(dir.path()).expect("chdir");
    let config = AppConfig::load_from_args([BIN]);
    env::set_current_dir(previous).expect("restore cwd");

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}

#[test]
#[serial]
fn test_missing_config_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "/nonexistent/reports.yaml"]);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
fn test_invalid_cli_is_a_config_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--port", "not-a-port"]);
    assert!(matches!(result, Err(Error::Config(_))));
}
