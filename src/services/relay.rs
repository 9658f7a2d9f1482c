use chrono::Utc;
use tracing::info;

use crate::client::AirtableClient;
use crate::error::RelayError;
use crate::models::form::FormPayload;
use crate::models::record::{AirtableRecord, OutboundRecord};

/// Forwards decoded form submissions to Airtable.
///
/// Each call makes exactly one outbound request. Failures are returned to
/// the caller as they are; nothing is retried or queued.
#[derive(Clone)]
pub struct FormRelay {
    client: AirtableClient,
}

impl FormRelay {
    pub fn new(client: AirtableClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AirtableClient {
        &self.client
    }

    pub async fn submit(&self, payload: &FormPayload) -> Result<AirtableRecord, RelayError> {
        info!("Form submission received: {}", payload.display_name());

        let record = OutboundRecord::from_payload(payload, Utc::now());
        let created = self.client.create_record(&record).await?;

        info!("Successfully saved to Airtable: {}", created.id);
        Ok(created)
    }
}
