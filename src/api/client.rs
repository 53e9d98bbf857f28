use super::transport::{ApiRequest, Transport};
use crate::config::{ClientConfig, ConfigField};
use crate::constants::{
    API_KEY_PARAM, API_URL_ENV, DEFAULT_API_URL, EMAIL_PARAM, FUNCTION_PARAM, MISSION_ID_PARAM,
};
use crate::error::BarkError;
use serde::de::IgnoredAny;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    MissionInfo,
    PacketList,
}

impl Endpoint {
    pub fn function(self) -> &'static str {
        match self {
            Endpoint::MissionInfo => "mission_info",
            Endpoint::PacketList => "packet_list",
        }
    }
}

/// Client for the NearSpace Launch web API.
pub struct NslClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> NslClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn mission_info(&self, config: &ClientConfig) -> Result<String, BarkError> {
        self.fetch(Endpoint::MissionInfo, config)
    }

    pub fn list_packets(&self, config: &ClientConfig) -> Result<String, BarkError> {
        self.fetch(Endpoint::PacketList, config)
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the response body exactly as received. Mission info must be
    /// well-formed JSON; packet listings are passed through unchecked.
    fn fetch(&self, endpoint: Endpoint, config: &ClientConfig) -> Result<String, BarkError> {
        let request = self.build_request(endpoint, config)?;

        tracing::debug!(
            url = %self.base_url,
            function = endpoint.function(),
            mission_id = ?request.query_value(MISSION_ID_PARAM),
            "sending request"
        );
        let response = self.transport.get(&request)?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "received response");

        if !response.is_success() {
            return Err(BarkError::Api {
                status: response.status,
                body: response.body,
            });
        }

        if endpoint == Endpoint::MissionInfo {
            serde_json::from_str::<IgnoredAny>(&response.body)
                .map_err(|e| BarkError::Decode(e.to_string()))?;
        }

        Ok(response.body)
    }

    fn build_request(
        &self,
        endpoint: Endpoint,
        config: &ClientConfig,
    ) -> Result<ApiRequest, BarkError> {
        let mission_id = config.require(ConfigField::MissionId)?;
        let api_key = config.require(ConfigField::ApiKey)?;

        let mut request = ApiRequest::new(&self.base_url)
            .param(FUNCTION_PARAM, endpoint.function())
            .param(MISSION_ID_PARAM, mission_id)
            .param(API_KEY_PARAM, api_key);

        if let Ok(email) = config.require(ConfigField::Email) {
            request = request.param(EMAIL_PARAM, email);
        }

        Ok(request)
    }
}

/// Base URL of the API, overridable through `BARK_API_URL`.
pub fn api_base_url() -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
