use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::error::BarkError;
use reqwest::blocking::Client;
use std::cell::OnceCell;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
        }
    }

    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single GET request. Implementations report transport failures as
/// [`BarkError::Network`] and hand back every HTTP status untouched.
pub trait Transport {
    fn get(&self, request: &ApiRequest) -> Result<ApiResponse, BarkError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &ApiRequest) -> Result<ApiResponse, BarkError> {
        (**self).get(request)
    }
}

/// Blocking HTTP transport. The underlying client is only built by the
/// first request, so runs that never query the API never touch TLS setup.
#[derive(Default)]
pub struct HttpTransport {
    client: OnceCell<Client>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self) -> Result<&Client, BarkError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| BarkError::Network(format!("Failed to create HTTP client: {e}")))?;
        Ok(self.client.get_or_init(|| client))
    }
}

impl Transport for HttpTransport {
    // reqwest errors carry the full URL, query string and API key included.
    fn get(&self, request: &ApiRequest) -> Result<ApiResponse, BarkError> {
        let response = self
            .client()?
            .get(&request.url)
            .query(&request.query)
            .send()
            .map_err(|e| BarkError::Network(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| BarkError::Network(e.without_url().to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
