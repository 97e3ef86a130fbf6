use async_trait::async_trait;
use aws_sdk_bedrockagent::{
    config::http::HttpResponse,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::{start_ingestion_job::StartIngestionJobError, RequestId},
    primitives::{DateTime, DateTimeFormat},
    types::{IngestionJob, IngestionJobStatistics},
    Client,
};
use serde_json::{json, Map, Value};
use tracing::debug;
use crate::domain::{error::TriggerError, models::IngestionRequest, ports::IngestionJobStarter};

pub struct BedrockIngestionAdapter {
    client: Client,
}

impl BedrockIngestionAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IngestionJobStarter for BedrockIngestionAdapter {
    async fn start_ingestion_job(&self, request: &IngestionRequest) -> Result<Value, TriggerError> {
        debug!("Sending StartIngestionJob for knowledge base: {}", request.knowledge_base_id);

        let output = self.client
            .start_ingestion_job()
            .knowledge_base_id(&request.knowledge_base_id)
            .data_source_id(&request.data_source_id)
            .send()
            .await
            .map_err(start_ingestion_job_error)?;

        debug!("StartIngestionJob request id: {:?}", output.request_id());
        Ok(response_document(output.ingestion_job.as_ref(), output.request_id()))
    }
}

/// Unwraps the SDK envelope so callers see the service exception itself.
pub fn start_ingestion_job_error(err: SdkError<StartIngestionJobError, HttpResponse>) -> TriggerError {
    debug!("StartIngestionJob failed: {}", DisplayErrorContext(&err));
    let service_error = err.into_service_error();
    let code = service_error.code().map(str::to_string);
    TriggerError::remote(service_error, code)
}

/// Renders the service output in its JSON wire shape.
pub fn response_document(job: Option<&IngestionJob>, request_id: Option<&str>) -> Value {
    let mut document = Map::new();

    if let Some(job) = job {
        document.insert("ingestionJob".to_string(), ingestion_job_document(job));
    }
    if let Some(request_id) = request_id {
        document.insert("$metadata".to_string(), json!({ "requestId": request_id }));
    }

    Value::Object(document)
}

fn ingestion_job_document(job: &IngestionJob) -> Value {
    let mut document = Map::new();
    document.insert("knowledgeBaseId".to_string(), json!(job.knowledge_base_id));
    document.insert("dataSourceId".to_string(), json!(job.data_source_id));
    document.insert("ingestionJobId".to_string(), json!(job.ingestion_job_id));
    document.insert("status".to_string(), json!(job.status.as_str()));

    if let Some(description) = &job.description {
        document.insert("description".to_string(), json!(description));
    }
    if let Some(statistics) = &job.statistics {
        document.insert("statistics".to_string(), statistics_document(statistics));
    }
    if let Some(reasons) = &job.failure_reasons {
        document.insert("failureReasons".to_string(), json!(reasons));
    }

    document.insert("startedAt".to_string(), timestamp(&job.started_at));
    document.insert("updatedAt".to_string(), timestamp(&job.updated_at));

    Value::Object(document)
}

fn statistics_document(statistics: &IngestionJobStatistics) -> Value {
    json!({
        "numberOfDocumentsScanned": statistics.number_of_documents_scanned,
        "numberOfMetadataDocumentsScanned": statistics.number_of_metadata_documents_scanned,
        "numberOfNewDocumentsIndexed": statistics.number_of_new_documents_indexed,
        "numberOfModifiedDocumentsIndexed": statistics.number_of_modified_documents_indexed,
        "numberOfMetadataDocumentsModified": statistics.number_of_metadata_documents_modified,
        "numberOfDocumentsDeleted": statistics.number_of_documents_deleted,
        "numberOfDocumentsFailed": statistics.number_of_documents_failed,
    })
}

fn timestamp(value: &DateTime) -> Value {
    value.fmt(DateTimeFormat::DateTime)
        .map(Value::String)
        .unwrap_or(Value::Null)
}
