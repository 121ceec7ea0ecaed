//! HTTP driver for router-level tests.
//!
//! Drives a fully built router through `tower::ServiceExt::oneshot` and
//! replays `Set-Cookie` values on subsequent requests, which is all the
//! session flows need. Nothing binds a port.

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use crate::error::TestError;

/// Wraps a router together with a cookie jar.
pub struct TestClient {
    router: Router,
    cookies: Vec<(String, String)>,
}

/// A fully buffered response.
pub struct TestResponse {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, TestError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Whether the response carries any `Set-Cookie` header.
    pub fn sets_cookie(&self) -> bool {
        self.headers.contains_key(header::SET_COOKIE)
    }
}

impl TestClient {
    /// Wrap a router. The jar starts empty.
    pub fn new(router: Router) -> Self {
        Self {
            router,
            cookies: Vec::new(),
        }
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> Result<TestResponse, TestError> {
        let request = self.request(Method::GET, uri).body(Body::empty())?;
        self.send(request).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json(
        &mut self,
        uri: &str,
        body: &serde_json::Value,
    ) -> Result<TestResponse, TestError> {
        let request = self
            .request(Method::POST, uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body)?))?;
        self.send(request).await
    }

    /// Send a POST request with a raw body and explicit content type, used
    /// for multipart uploads.
    pub async fn post_raw(
        &mut self,
        uri: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<TestResponse, TestError> {
        let request = self
            .request(Method::POST, uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))?;
        self.send(request).await
    }

    /// Plant a cookie as if a previous response had set it. `raw` is the
    /// `Set-Cookie` syntax, attributes included.
    pub fn insert_cookie(&mut self, raw: &str) {
        self.store_cookie(raw);
    }

    /// The stored value of a cookie, if the jar has one under that name.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(stored, _)| stored == name)
            .map(|(_, value)| value.as_str())
    }

    /// Drop every stored cookie.
    pub fn clear_cookies(&mut self) {
        self.cookies.clear();
    }

    fn request(&self, method: Method, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if !self.cookies.is_empty() {
            let header_value = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(header::COOKIE, header_value);
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> Result<TestResponse, TestError> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        for value in response.headers().get_all(header::SET_COOKIE) {
            if let Ok(raw) = value.to_str() {
                let raw = raw.to_string();
                self.store_cookie(&raw);
            }
        }

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await?;

        Ok(TestResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }

    fn store_cookie(&mut self, raw: &str) {
        let Some(pair) = raw.split(';').next() else {
            return;
        };
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };
        let name = name.trim().to_string();
        let value = value.trim().to_string();

        self.cookies.retain(|(stored, _)| stored != &name);
        // An empty value is how the server expires a cookie.
        if !value.is_empty() {
            self.cookies.push((name, value));
        }
    }
}
