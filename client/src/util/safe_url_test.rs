use super::*;

#[test]
fn http_and_https_are_navigable() {
    assert_eq!(navigable_url("https://example.test/jobs/1"), Some("https://example.test/jobs/1"));
    assert_eq!(navigable_url("http://example.test"), Some("http://example.test"));
    assert_eq!(navigable_url("  HTTPS://Example.test/x "), Some("HTTPS://Example.test/x"));
}

#[test]
fn script_and_other_schemes_are_rejected() {
    for url in [
        "javascript:alert(1)",
        "JavaScript://%0Aalert(1)",
        "data:text/html,<script>alert(1)</script>",
        "vbscript:msgbox",
        "file:///etc/passwd",
        "ftp://example.test",
    ] {
        assert_eq!(navigable_url(url), None, "{url}");
    }
}

#[test]
fn missing_scheme_or_host_is_rejected() {
    for url in ["", "   ", "/jobs/1", "example.test/jobs", "https:example.test", "https://", "http:/x"] {
        assert_eq!(navigable_url(url), None, "{url:?}");
    }
}

#[test]
fn open_in_new_tab_never_navigates_to_rejected_url() {
    assert!(!open_in_new_tab("javascript:alert(document.cookie)"));
    assert!(!open_in_new_tab(""));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn open_in_new_tab_accepts_http_url() {
    assert!(open_in_new_tab("https://example.test/jobs/1"));
}
