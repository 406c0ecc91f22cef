//! HTTP requests and responses as plain data.
//!
//! `ProductClient` produces `HttpRequest` values and consumes `HttpResponse`
//! values without touching the network. Whatever performs the round trip
//! (`ProductService`, or a test harness) sits between the two.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data. `url` is absolute.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
