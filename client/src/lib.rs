//! Client for the product API.
//!
//! # Overview
//! Two layers:
//! - `ProductClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without doing any I/O.
//! - `ProductService` executes those requests with a shared `reqwest::Client`
//!   pointed at the API's base address.

pub mod client;
pub mod error;
pub mod http;
pub mod service;
pub mod types;

pub use client::ProductClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::ProductService;
pub use types::{NewProduct, Product};
