use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DATA_SOURCE_ID: &str = "kb-s3-source";
pub const SUCCESS_MESSAGE: &str = "Ingestion job triggered";

/// Storage notification as delivered by the platform. Never validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationEvent(pub Value);

impl InvocationEvent {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    pub fn payload(&self) -> &Value {
        &self.0
    }

    pub fn to_log_string(&self) -> String {
        serde_json::to_string_pretty(self.payload()).unwrap_or_else(|_| "<invalid json>".to_string())
    }

    /// Bucket/key pairs found under `Records[].s3`, for diagnostics only.
    pub fn object_locations(&self) -> Vec<ObjectLocation> {
        let Some(records) = self.payload()["Records"].as_array() else {
            return Vec::new();
        };

        records
            .iter()
            .filter_map(|record| {
                match (
                    record["s3"]["bucket"]["name"].as_str(),
                    record["s3"]["object"]["key"].as_str(),
                ) {
                    (Some(bucket), Some(key)) => Some(ObjectLocation {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    }),
                    _ => None,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionRequest {
    pub knowledge_base_id: String,
    pub data_source_id: String,
}

impl IngestionRequest {
    pub fn for_knowledge_base(knowledge_base_id: &str) -> Self {
        Self {
            knowledge_base_id: knowledge_base_id.to_string(),
            data_source_id: DATA_SOURCE_ID.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TriggerBody<'a> {
    message: &'a str,
    response: &'a Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerResponse {
    pub status_code: u16,
    pub body: String,
}

impl TriggerResponse {
    pub fn triggered(response: &Value) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(&TriggerBody {
            message: SUCCESS_MESSAGE,
            response,
        })?;

        Ok(Self {
            status_code: 200,
            body,
        })
    }
}
