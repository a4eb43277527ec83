use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
}

#[test]
fn from_lookup_parses_overrides_and_trims_slash() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("JOBBOARD_BACKEND_URL", "https://jobs.example.test/api/"),
        ("JOBBOARD_UPSTREAM_TIMEOUT_SECS", "30"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://jobs.example.test/api");
    assert_eq!(cfg.upstream_timeout_secs, 30);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    let err = HostConfig::from_lookup(lookup_from(&[("JOBBOARD_UPSTREAM_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "JOBBOARD_UPSTREAM_TIMEOUT_SECS", .. }));
}

#[test]
fn from_lookup_rejects_non_http_backend() {
    let err = HostConfig::from_lookup(lookup_from(&[("JOBBOARD_BACKEND_URL", "ftp://jobs")])).unwrap_err();
    assert_eq!(err, ConfigError::BackendScheme("ftp://jobs".to_owned()));
}

#[test]
fn empty_backend_url_falls_back_to_default() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("JOBBOARD_BACKEND_URL", "  ")])).unwrap();
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn backend_endpoint_joins_path_and_query() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.backend_endpoint("jobs", None), "http://127.0.0.1:5000/api/jobs");
    assert_eq!(cfg.backend_endpoint("/jobs/mark-viewed", Some("")), "http://127.0.0.1:5000/api/jobs/mark-viewed");
    assert_eq!(cfg.backend_endpoint("jobs", Some("source=Indeed")), "http://127.0.0.1:5000/api/jobs?source=Indeed");
}
