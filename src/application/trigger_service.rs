use std::sync::Arc;
use tracing::{info, debug, error};
use crate::{
    config::TriggerConfig,
    domain::{
        error::TriggerError,
        models::{IngestionRequest, InvocationEvent, TriggerResponse},
        ports::IngestionJobStarter,
    },
};

pub struct IngestionTrigger {
    config: Arc<TriggerConfig>,
    job_starter: Arc<dyn IngestionJobStarter>,
}

impl IngestionTrigger {
    pub fn new(config: Arc<TriggerConfig>, job_starter: Arc<dyn IngestionJobStarter>) -> Self {
        Self { config, job_starter }
    }

    pub async fn handle(&self, event: InvocationEvent) -> Result<TriggerResponse, TriggerError> {
        info!("Received S3 event: {}", event.to_log_string());
        for location in event.object_locations() {
            debug!("Event references s3://{}/{}", location.bucket, location.key);
        }

        let knowledge_base_id = self.config.knowledge_base_id()
            .map_err(|e| {
                error!("Rejecting invocation: {}", e);
                e
            })?;

        let request = IngestionRequest::for_knowledge_base(knowledge_base_id);
        debug!("Starting ingestion job - knowledge base: {}, data source: {}",
            request.knowledge_base_id, request.data_source_id);

        let response = self.job_starter.start_ingestion_job(&request).await
            .map_err(|e| {
                error!("Error starting ingestion job: {}", e);
                e
            })?;

        info!("Ingestion job started: {}",
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| "<invalid json>".to_string()));

        Ok(TriggerResponse::triggered(&response)?)
    }
}
