//! Query-string convention tests — percent-encoded pairs joined with
//! ';', trailing delimiter trimmed, no '?' without parameters.

use wordround_core::transport::build_route_url;

#[test]
fn bare_route_gets_no_query_marker() {
    assert_eq!(
        build_route_url("http://host:8081", "getState", &[]),
        "http://host:8081/getState"
    );
}

#[test]
fn trailing_slash_on_the_base_is_tolerated() {
    assert_eq!(
        build_route_url("http://host:8081/", "getState", &[]),
        "http://host:8081/getState"
    );
}

#[test]
fn single_parameter_has_no_trailing_delimiter() {
    assert_eq!(
        build_route_url("http://host", "modifyPoints", &[("points", "5".to_string())]),
        "http://host/modifyPoints?points=5"
    );
}

#[test]
fn parameters_join_with_semicolons() {
    let url = build_route_url(
        "http://host",
        "authorize",
        &[
            ("password", "hunter2".to_string()),
            ("client", "console".to_string()),
        ],
    );
    assert_eq!(url, "http://host/authorize?password=hunter2;client=console");
}

#[test]
fn values_are_percent_encoded() {
    let url = build_route_url(
        "http://host",
        "authorize",
        &[("password", "p@ss word".to_string())],
    );
    assert_eq!(url, "http://host/authorize?password=p%40ss%20word");
}

#[test]
fn signed_deltas_survive_encoding() {
    let url = build_route_url(
        "http://host",
        "modifyTimer",
        &[("seconds", "-5".to_string())],
    );
    assert_eq!(url, "http://host/modifyTimer?seconds=%2D5");
}
