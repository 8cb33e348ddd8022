use super::*;

// =============================================================================
// from_values
// =============================================================================

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn explicit_host_and_port() {
    let config = ServerConfig::from_values(Some("127.0.0.1"), Some("8080")).unwrap();
    assert_eq!(config, ServerConfig { host: "127.0.0.1".into(), port: 8080 });
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn port_whitespace_trimmed() {
    let config = ServerConfig::from_values(None, Some(" 4000 ")).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn invalid_port_is_error() {
    for raw in ["abc", "70000", "-1", "80.5"] {
        let err = ServerConfig::from_values(None, Some(raw)).unwrap_err();
        assert!(matches!(err, ServerError::InvalidPort(ref v) if v == raw), "expected InvalidPort for {raw:?}");
    }
}

#[test]
fn invalid_port_error_message_names_value() {
    let err = ServerConfig::from_values(None, Some("nope")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT value \"nope\"");
}

// =============================================================================
// bind_addr
// =============================================================================

#[test]
fn bind_addr_joins_host_and_port() {
    let config = ServerConfig { host: "localhost".into(), port: 3000 };
    assert_eq!(config.bind_addr(), "localhost:3000");
}

// =============================================================================
// from_env — uses the process environment; only asserts it parses.
// =============================================================================

#[test]
fn from_env_without_overrides_parses() {
    if std::env::var("PORT").is_err() {
        assert!(ServerConfig::from_env().is_ok());
    }
}
