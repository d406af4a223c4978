use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::SearchIndexConfig;

const SEARCH_API_VERSION: &str = "2023-11-01";

#[derive(Debug, Clone, Serialize)]
pub struct RawSearchRequest {
    pub search: String,
    // "no filter" must be the absent key, not an empty string; the index
    // rejects an empty filter expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub facets: Vec<String>,
    #[serde(rename = "queryType")]
    pub query_type: String,
    #[serde(rename = "semanticConfiguration")]
    pub semantic_configuration: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchResponse {
    pub value: Vec<serde_json::Map<String, serde_json::Value>>,
    #[serde(rename = "@search.facets", default)]
    pub facets: Option<BTreeMap<String, Vec<RawFacetBucket>>>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct RawFacetBucket {
    pub value: serde_json::Value,
    pub count: u64,
}

#[derive(Debug, Clone)]
pub struct SearchIndexClient {
    config: SearchIndexConfig,
    http: reqwest::Client,
}

impl SearchIndexClient {
    pub fn new(config: SearchIndexConfig) -> Self {
        SearchIndexClient {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub async fn search(&self, request: &RawSearchRequest) -> anyhow::Result<RawSearchResponse> {
        let url = format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.index_name,
            SEARCH_API_VERSION,
        );

        let response = self
            .http
            .post(url)
            .header("api-key", &self.config.admin_key)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        tracing::debug!("search index response: len = {}", response_txt.len());
        let response: RawSearchResponse = serde_json::from_str(&response_txt)?;
        Ok(response)
    }
}
