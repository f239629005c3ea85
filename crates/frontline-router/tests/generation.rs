//! URL generation behavior.

mod common;
use common::*;

use frontline_router::{Params, Router, RouterError};

#[test]
fn default_route_collapses_to_index() {
    let router = Router::new(demo_table(), "");
    let url = router
        .url(
            &params(&[
                ("module", "index"),
                ("controller", "index"),
                ("action", "index"),
                ("format", "html"),
            ]),
            Some("default"),
            None,
        )
        .unwrap();
    assert_eq!(url, "/index.html");

    let mounted = Router::new(demo_table(), "/app");
    assert_eq!(
        mounted.url(&Params::new(), Some("default"), Some(true)).unwrap(),
        "/app/index.html"
    );
}

#[test]
fn switching_routes_resets_parameters() {
    let router = route("/user/42/alice/details.html");
    let url = router.url(&Params::new(), Some("default"), None).unwrap();

    assert_eq!(url, "/index.html");
    assert!(!url.contains("42"));
    assert!(!url.contains("alice"));
    assert!(!url.contains("details"));
}

#[test]
fn switching_routes_without_reset_keeps_parameters() {
    let router = route("/user/42/alice/details.html");
    let url = router
        .url(&Params::new(), Some("default"), Some(false))
        .unwrap();
    assert_eq!(url, "/users/details/details.html?userId=42&userName=alice");
}

#[test]
fn switching_to_required_route_without_values_fails() {
    let router = route("/blog/posts");
    let err = router.url(&Params::new(), Some("user"), None).unwrap_err();
    assert!(matches!(err, RouterError::MissingParameter(name) if name == "userName"));
}

#[test]
fn required_placeholder_emits_index_literally() {
    let router = Router::new(demo_table(), "");
    let url = router
        .url(
            &params(&[("userId", "index"), ("userName", "index")]),
            Some("user"),
            None,
        )
        .unwrap();
    assert_eq!(url, "/user/index/index.html");
}

#[test]
fn required_placeholder_is_encoded() {
    let router = Router::new(demo_table(), "");
    let url = router
        .url(
            &params(&[("userId", "7"), ("userName", "Zoë Q"), ("action", "edit")]),
            Some("user"),
            None,
        )
        .unwrap();
    assert_eq!(url, "/user/7/Zo%C3%AB%20Q/edit.html");

    let back = route(&url);
    assert_eq!(back.get("userName"), Some("Zoë Q"));
}

#[test]
fn format_is_carried_over() {
    let router = route("/reports/sales/daily.csv");
    let url = router.url(&params(&[("action", "weekly")]), None, None).unwrap();
    assert_eq!(url, "/reports/sales/weekly.csv");
}

#[test]
fn extra_parameters_become_query() {
    let router = route("/search");
    let url = router
        .url(&params(&[("q", "a&b"), ("page", "2")]), None, None)
        .unwrap();
    assert_eq!(url, "/search.html?q=a%26b&page=2");
}

#[test]
fn unknown_route_is_rejected() {
    let router = Router::new(demo_table(), "");
    let err = router.url(&Params::new(), Some("missing"), None).unwrap_err();
    assert!(matches!(err, RouterError::UnknownRoute(_)));
}

#[test]
fn generation_leaves_router_untouched() {
    let router = route("/blog/posts/show");
    let before = router.params().clone();
    let _ = router.url(&params(&[("action", "edit")]), None, None).unwrap();
    assert_eq!(router.params(), &before);
    assert_eq!(router.current_route(), "default");
}

#[test]
fn dotted_user_name_round_trips() {
    let router = Router::new(demo_table(), "");
    let url = router
        .url(
            &params(&[("userId", "7"), ("userName", "john.doe")]),
            Some("user"),
            None,
        )
        .unwrap();
    assert_eq!(url, "/user/7/john%2Edoe.html");

    let resolved = route(&url);
    assert_eq!(resolved.current_route(), "user");
    assert_eq!(resolved.get("userName"), Some("john.doe"));
    assert_eq!(resolved.get("format"), Some("html"));
}

#[test]
fn dotted_module_round_trips() {
    let router = Router::new(demo_table(), "");
    let url = router
        .url(
            &params(&[("module", "v1.2"), ("format", "json")]),
            Some("default"),
            None,
        )
        .unwrap();
    assert_eq!(url, "/v1%2E2.json");

    let resolved = route(&url);
    assert_eq!(resolved.get("module"), Some("v1.2"));
    assert_eq!(resolved.get("controller"), Some("index"));
    assert_eq!(resolved.get("format"), Some("json"));
}
