//! Postal directory client
//!
//! Resolves Indian PIN codes through the public postalpincode.in API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::{LookupOutcome, ResolvedLocation};
use thiserror::Error;

use crate::config::PostalConfig;

#[derive(Debug, Error)]
pub enum PostalError {
    #[error("postal lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("postal directory returned {0}")]
    Status(u16),

    #[error("unexpected postal response: {0}")]
    Malformed(String),
}

/// Postal directory client
#[derive(Clone)]
pub struct PostalClient {
    client: Client,
    base_url: String,
}

/// One element of the directory's response array
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PincodeResponse {
    status: String,
    post_office: Option<Vec<PostOffice>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PostOffice {
    name: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    district: String,
    #[serde(default)]
    block: String,
}

impl PostalClient {
    pub fn new(config: &PostalConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new PostalClient with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Look up a 6-digit PIN
    pub async fn lookup(&self, pincode: &str) -> Result<LookupOutcome, PostalError> {
        let url = format!("{}/pincode/{}", self.base_url, pincode);
        tracing::debug!(%url, "postal lookup");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(PostalError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        parse_lookup_response(&body)
    }
}

/// Interpret a directory response body.
///
/// The first array element decides: `Status == "Success"` with at least one
/// office is a match, any other status is no match. Anything else is an
/// unexpected shape.
pub fn parse_lookup_response(body: &str) -> Result<LookupOutcome, PostalError> {
    let entries: Vec<PincodeResponse> =
        serde_json::from_str(body).map_err(|e| PostalError::Malformed(e.to_string()))?;
    let first = entries
        .into_iter()
        .next()
        .ok_or_else(|| PostalError::Malformed("empty response array".to_string()))?;

    if first.status != "Success" {
        return Ok(LookupOutcome::NotFound);
    }

    let offices = first.post_office.unwrap_or_default();
    let head = offices
        .first()
        .ok_or_else(|| PostalError::Malformed("success without post offices".to_string()))?;

    let mut localities: Vec<String> = Vec::with_capacity(offices.len());
    for office in &offices {
        if !localities.contains(&office.name) {
            localities.push(office.name.clone());
        }
    }

    Ok(LookupOutcome::Found(ResolvedLocation {
        country: head.country.clone(),
        state: head.state.clone(),
        district: head.district.clone(),
        taluka: head.block.clone(),
        localities,
    }))
}
