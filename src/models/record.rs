use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::models::form::{field, FormPayload};

/// Columns of the Airtable "Form Submissions" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFields {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Event Type")]
    pub event_type: String,
    #[serde(rename = "Phone Number")]
    pub phone_number: String,
    #[serde(rename = "Email Address")]
    pub email_address: String,
    #[serde(rename = "Event Date")]
    pub event_date: String,
    #[serde(rename = "Event Time")]
    pub event_time: String,
    #[serde(rename = "Formatted Date Time")]
    pub formatted_date_time: String,
    #[serde(rename = "Number of Seats")]
    pub number_of_seats: u32,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Submission Date")]
    pub submission_date: String,
}

impl SubmissionFields {
    /// Map posted form fields onto the table columns.
    ///
    /// `submitted_at` is the only source of `Submission Date`; nothing the
    /// client posts can override it.
    pub fn from_payload(payload: &FormPayload, submitted_at: DateTime<Utc>) -> Self {
        let email_address = payload
            .non_empty(field::EMAIL_ADDRESS)
            .or_else(|| payload.non_empty(field::EMAIL))
            .unwrap_or("");

        Self {
            name: payload.get(field::NAME).to_string(),
            event_type: payload.get(field::EVENT_TYPE).to_string(),
            phone_number: payload.get(field::PHONE_NUMBER).to_string(),
            email_address: email_address.to_string(),
            event_date: payload.get(field::EVENT_DATE).to_string(),
            event_time: payload.get(field::EVENT_TIME).to_string(),
            formatted_date_time: payload.get(field::FORMATTED_DATE_TIME).to_string(),
            number_of_seats: parse_seat_count(payload.get(field::NUMBER_OF_SEATS)),
            message: payload.get(field::MESSAGE).to_string(),
            submission_date: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Best-effort seat count: the leading integer of the value.
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit (`"3.7"` is 3). Values without leading digits and negative
/// numbers give 0; values too large for `u32` saturate.
pub fn parse_seat_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return 0;
    }

    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Body of a create-record request.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundRecord {
    pub fields: SubmissionFields,
}

impl OutboundRecord {
    pub fn from_payload(payload: &FormPayload, submitted_at: DateTime<Utc>) -> Self {
        Self {
            fields: SubmissionFields::from_payload(payload, submitted_at),
        }
    }
}

/// A record as returned by Airtable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirtableRecord {
    pub id: String,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

/// One page of the list-records endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListRecordsResponse {
    pub records: Vec<AirtableRecord>,
    #[serde(default)]
    pub offset: Option<String>,
}
