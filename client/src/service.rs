//! Async executor for `ProductClient` requests.
//!
//! `ProductService` pairs the request builder with a `reqwest::Client`. The
//! reqwest client is cheap to clone and pools connections, so one service can
//! be shared across tasks. Timeouts are reqwest's defaults.

use reqwest::Method;

use crate::client::ProductClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewProduct, Product};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/api/";

#[derive(Debug, Clone)]
pub struct ProductService {
    http: reqwest::Client,
    client: ProductClient,
}

impl ProductService {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use a caller-configured reqwest client.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            client: ProductClient::new(base_url),
        }
    }

    /// Base address from `PRODUCT_API_URL`, or `DEFAULT_BASE_URL`.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PRODUCT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Fetch every product the API holds.
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.execute(self.client.build_list_products()).await?;
        self.client.parse_list_products(response)
    }

    /// Send a product to the API.
    ///
    /// Only serialization and transport failures are returned. The response
    /// is not checked, so a server-side error still yields `Ok(())`.
    pub async fn add_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        let response = self
            .execute(self.client.build_create_product(product)?)
            .await?;
        if !(200..300).contains(&response.status) {
            tracing::warn!(status = response.status, "add_product: server returned an error");
        }
        Ok(())
    }

    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = ?req.method, url = %req.url, "sending request");
        let method = match req.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };
        let mut builder = self.http.request(method, &req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
