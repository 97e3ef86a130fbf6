use async_trait::async_trait;
use crate::domain::{error::TriggerError, models::IngestionRequest};

#[async_trait]
pub trait IngestionJobStarter: Send + Sync {
    /// Issues one start-ingestion-job call and returns the raw service response.
    async fn start_ingestion_job(&self, request: &IngestionRequest) -> Result<serde_json::Value, TriggerError>;
}
