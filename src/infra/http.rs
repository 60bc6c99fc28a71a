//! Upstream HTTP transport.
//!
//! Thin wrapper over a reqwest client pointed at the public mock REST
//! service. Every request carries a JSON content type; when the client
//! storage currently holds an auth token it is attached as a bearer
//! header, read per request so a login or logout takes effect on the very
//! next call.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ApiSettings;
use crate::infra::error::TransportError;
use crate::infra::storage::{ClientStorage, keys as storage_keys};

pub struct Transport {
    client: Client,
    base: Url,
    storage: Arc<dyn ClientStorage>,
}

impl Transport {
    pub fn new(
        settings: &ApiSettings,
        storage: Arc<dyn ClientStorage>,
    ) -> Result<Self, TransportError> {
        let base = Url::parse(&settings.base_url)?;
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| TransportError::Network {
                message: err.to_string(),
            })?;
        Ok(Self {
            client,
            base,
            storage,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("plancia/", env!("CARGO_PKG_VERSION"))
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, TransportError> {
        let mut url = self.base.join(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET `path` and decode the JSON body.
    ///
    /// A non-2xx status maps to `TransportError::Status` before any decode
    /// is attempted; connection-level failures collapse into the generic
    /// network message the console displays.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TransportError> {
        let url = self.url(path, query)?;
        debug!(%url, "transport request");

        let mut request = self
            .client
            .get(url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.storage.get(storage_keys::AUTH_TOKEN) {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(|_| TransportError::network())?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|_| TransportError::network())?;
        serde_json::from_slice(&bytes).map_err(|err| TransportError::Decode(err.to_string()))
    }
}
