use crate::config::Config;
use crate::errors::FetchError;
use crate::models::DailyRecord;
use reqwest::Client;
use tracing::debug;

/// Fetches the full daily sign-up series. The upstream always returns daily
/// granularity, so there is nothing interval-specific in the request.
#[derive(Debug, Clone)]
pub struct SignupClient {
    http: Client,
    url: String,
}

impl SignupClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            url: config.api_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_daily(&self) -> Result<Vec<DailyRecord>, FetchError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let records: Vec<DailyRecord> = serde_json::from_slice(&body)?;
        debug!(url = %self.url, records = records.len(), "fetched sign-ups");
        Ok(records)
    }
}
