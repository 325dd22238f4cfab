use std::collections::HashMap;

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Result, ScryError};

/// Outcome of a single GET against the provider.
///
/// Any HTTP response, including 4xx/5xx, is a `Response`; only requests that
/// never produced one are `Failed`.
#[derive(Debug, Clone)]
pub enum LookupResult {
    Response(LookupResponse),
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct LookupResponse {
    pub status: u16,
    pub body: String,
    /// Header names are lowercase.
    pub headers: HashMap<String, String>,
}

impl LookupResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

pub struct ScryfallClient {
    http: Client,
    api_base: Url,
    user_agent: String,
}

impl ScryfallClient {
    pub fn new(api_base: &str, user_agent: impl Into<String>) -> Result<Self> {
        let api_base =
            Url::parse(api_base).map_err(|_| ScryError::InvalidUrl(api_base.to_string()))?;

        Ok(Self {
            http: Client::new(),
            api_base,
            user_agent: user_agent.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base(), config.user_agent())
    }

    /// Join an endpoint path such as `cards/named` onto the API base.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.api_base.clone();
        {
            let base_path = url.path().trim_end_matches('/').to_string();
            url.set_path(&format!("{base_path}/{}", path.trim_start_matches('/')));
        }
        url
    }

    /// Issue one GET. Never returns an error: transport failures are folded
    /// into [`LookupResult::Failed`].
    pub async fn get(&self, url: Url) -> LookupResult {
        debug!(%url, "fetching");

        match self.send(url.clone()).await {
            Ok(response) => {
                debug!(%url, status = response.status, "fetched");
                LookupResult::Response(response)
            }
            Err(e) => {
                warn!(%url, error = %e, "lookup failed");
                LookupResult::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn send(&self, url: Url) -> Result<LookupResponse> {
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "*/*")
            .send()
            .await?;

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

        Ok(LookupResponse {
            status,
            body,
            headers,
        })
    }
}
