//! Loading route tables from configuration files.

use std::io::Write;

use frontline_router::{Router, RouterConfig, RouterError};

const DEMO: &str = r#"{
    "url_prefix": "/demo",
    "routes": {
        "admin": {
            "pattern": "/admin/:module/:controller/:action/",
            "defaults": { "prefix": "admin" }
        },
        "user": {
            "pattern": "/user/:userId/:userName/:action/",
            "defaults": { "module": "users", "controller": "details" }
        },
        "default": {
            "pattern": "/:module/:controller/:action"
        }
    }
}"#;

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DEMO.as_bytes()).unwrap();

    let config = RouterConfig::from_file(file.path()).unwrap();
    let names: Vec<_> = config.routes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["admin", "user", "default"]);

    let (table, prefix) = config.into_parts();
    let router = Router::for_request(table, prefix, "/demo/user/42/al%C4%B1ce/details.html").unwrap();
    assert_eq!(router.current_route(), "user");
    assert_eq!(router.get("userName"), Some("alıce"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RouterConfig::from_file(dir.path().join("routes.json")).unwrap_err();
    assert!(matches!(err, RouterError::Io(_)));
}

#[test]
fn malformed_file_is_json_error() {
    let err = RouterConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, RouterError::Json(_)));
}

#[test]
fn route_order_follows_document_order() {
    let config = RouterConfig::from_json_str(
        r#"{"routes": {
            "loose": {"pattern": "/:module/:controller"},
            "strict": {"pattern": "/blog/:controller"}
        }}"#,
    )
    .unwrap();
    let (table, prefix) = config.into_parts();

    let router = Router::for_request(table, prefix, "/blog/posts").unwrap();
    assert_eq!(router.current_route(), "loose");
}
