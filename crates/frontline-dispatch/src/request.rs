//! HTTP request type.

use std::collections::HashMap;

/// Request methods the front controller distinguishes.
///
/// Actions only ever ask whether a form was submitted, so every other verb
/// is rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Parses `GET` or `POST`, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("get") {
            Some(Self::Get)
        } else if s.eq_ignore_ascii_case("post") {
            Some(Self::Post)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// An HTTP request as seen by the front controller.
///
/// `path` is the raw request target, query string included; the router
/// normalizes it. The query string is also parsed into `query` when the
/// request is created.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Raw request path.
    pub path: String,
    /// Query string parameters.
    pub query: HashMap<String, String>,
    /// Submitted form fields.
    pub form: HashMap<String, String>,
    /// Request headers.
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Creates a new request.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        let query = path
            .split_once('?')
            .map(|(_, query)| query.split('#').next().unwrap_or_default())
            .map(parse_pairs)
            .unwrap_or_default();

        Self {
            method,
            path,
            query,
            form: HashMap::new(),
            headers: HashMap::new(),
        }
    }

    /// Creates a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Creates a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Adds the fields of an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn form_body(mut self, encoded: &str) -> Self {
        self.form.extend(parse_pairs(encoded));
        self
    }

    /// Sets a query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets a form field.
    #[must_use]
    pub fn form_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(key.into(), value.into());
        self
    }

    /// Gets a header value.
    pub fn get_header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Gets a query parameter.
    pub fn get_query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Gets a form field.
    pub fn get_form(&self, key: &str) -> Option<&str> {
        self.form.get(key).map(String::as_str)
    }

    /// Returns whether the request submits a form.
    pub fn is_post(&self) -> bool {
        self.method == Method::Post
    }

    /// Returns whether the request was sent by `XMLHttpRequest`.
    pub fn is_ajax(&self) -> bool {
        self.get_header("X-Requested-With") == Some("XMLHttpRequest")
    }

}

fn parse_pairs(encoded: &str) -> HashMap<String, String> {
    form_urlencoded::parse(encoded.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!(Method::parse("GET"), Some(Method::Get));
        assert_eq!(Method::parse("post"), Some(Method::Post));
        assert_eq!(Method::parse("PUT"), None);
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn test_request_builder() {
        let req = Request::get("/users")
            .header("Content-Type", "application/json")
            .query_param("page", "1");

        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/users");
        assert_eq!(req.get_header("content-type"), Some("application/json"));
        assert_eq!(req.get_query("page"), Some("1"));
    }

    #[test]
    fn test_query_parsed_from_path() {
        let req = Request::get("/users/list.html?page=2&name=John+Doe#top");
        assert_eq!(req.get_query("page"), Some("2"));
        assert_eq!(req.get_query("name"), Some("John Doe"));
        assert_eq!(req.get_query("missing"), None);
    }

    #[test]
    fn test_form_body_parsing() {
        let req = Request::post("/users/save").form_body("name=John+Doe&age=30&city=New%20York");
        assert_eq!(req.get_form("name"), Some("John Doe"));
        assert_eq!(req.get_form("age"), Some("30"));
        assert_eq!(req.get_form("city"), Some("New York"));
        assert_eq!(req.get_query("name"), None);
    }

    #[test]
    fn test_post_and_ajax() {
        let req = Request::post("/users/save")
            .header("x-requested-with", "XMLHttpRequest")
            .form_param("name", "bob");

        assert!(req.is_post());
        assert!(req.is_ajax());
        assert_eq!(req.get_form("name"), Some("bob"));
        assert!(!Request::get("/").is_post());
        assert!(!Request::get("/").is_ajax());
    }
}
