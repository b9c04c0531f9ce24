use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.public_dir.ends_with("public"));
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_applied() {
    let vars = [("HOST", "127.0.0.1"), ("PORT", "8080"), ("PUBLIC_DIR", "/srv/notebooks")];
    let cfg = ServerConfig::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/notebooks"));
}

#[test]
fn empty_public_dir_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PUBLIC_DIR", "")])).unwrap();
    assert!(cfg.public_dir.ends_with("public"));
}

#[test]
fn non_numeric_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".to_owned() });
    assert!(err.to_string().contains("invalid PORT 'http'"));
}

#[test]
fn zero_and_out_of_range_ports_error() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "0")])).is_err());
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn malformed_host_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost:3000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { .. }));
}

#[test]
fn from_env_reads_process_environment() {
    // SAFETY: no other test in this crate touches these variables.
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::remove_var("HOST");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);
    unsafe { std::env::remove_var("PORT") };
}
