//! Request builder and response parser for the product API.
//!
//! `ProductClient` holds only the API base URL (for example
//! `http://127.0.0.1:3000/api`) and carries no state between calls. Each
//! operation is a `build_*` method producing an `HttpRequest` and a `parse_*`
//! method consuming the matching `HttpResponse`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewProduct, Product};

#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.products_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_product(&self, input: &NewProduct) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.products_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
