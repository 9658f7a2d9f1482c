use reqwest::{Client, Url};
use tracing::{debug, error, info};

use crate::config::AirtableConfig;
use crate::error::RelayError;
use crate::models::record::{AirtableRecord, ListRecordsResponse, OutboundRecord};

/// Client for the Airtable REST API, bound to one base and table
#[derive(Clone)]
pub struct AirtableClient {
    client: Client,
    config: AirtableConfig,
}

impl AirtableClient {
    pub fn new(config: AirtableConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Reuse an existing connection pool.
    pub fn with_client(client: Client, config: AirtableConfig) -> Self {
        Self { client, config }
    }

    pub fn table_name(&self) -> &str {
        &self.config.table_name
    }

    /// `<endpoint>/<base id>/<table name>` with both segments percent-escaped.
    pub fn table_url(&self) -> Result<Url, RelayError> {
        let mut url = Url::parse(&self.config.api_endpoint)
            .map_err(|e| RelayError::Endpoint(format!("{}: {}", self.config.api_endpoint, e)))?;

        url.path_segments_mut()
            .map_err(|_| RelayError::Endpoint(self.config.api_endpoint.clone()))?
            .pop_if_empty()
            .push(&self.config.base_id)
            .push(&self.config.table_name);

        Ok(url)
    }

    /// Create one record in the table.
    pub async fn create_record(&self, record: &OutboundRecord) -> Result<AirtableRecord, RelayError> {
        let url = self.table_url()?;

        info!("Creating record in Airtable table '{}'", self.config.table_name);
        debug!("API URL: {}", url);

        let res = self
            .client
            .post(url)
            .bearer_auth(&self.config.access_token)
            .json(record)
            .send()
            .await?;

        let status = res.status();
        info!("Response received with status: {}", status);

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            error!("Airtable API error: {} - {}", status, body);
            return Err(RelayError::ExternalApi { status, body });
        }

        let created = res.json::<AirtableRecord>().await?;
        Ok(created)
    }

    /// Fetch the first page of records from the table.
    pub async fn list_records(&self) -> Result<Vec<AirtableRecord>, RelayError> {
        let url = self.table_url()?;

        info!("Listing records from Airtable table '{}'", self.config.table_name);

        let res = self
            .client
            .get(url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            error!("Airtable API error: {} - {}", status, body);
            return Err(RelayError::ExternalApi { status, body });
        }

        let page = res.json::<ListRecordsResponse>().await?;
        if page.offset.is_some() {
            debug!("More records available beyond the first page");
        }
        info!("Fetched {} records", page.records.len());
        Ok(page.records)
    }
}
