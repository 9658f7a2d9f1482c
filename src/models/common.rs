use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully";

/// JSON body returned to form submitters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "recordId", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

impl SubmissionResponse {
    pub fn submitted(record_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(SUCCESS_MESSAGE.to_string()),
            error: None,
            record_id: Some(record_id.into()),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
            record_id: None,
        }
    }
}
