use std::sync::Arc;
use lambda_runtime::{service_fn, Diagnostic, Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, debug};
use crate::{
    application::trigger_service::IngestionTrigger,
    config::TriggerConfig,
    domain::{
        error::TriggerError,
        models::{InvocationEvent, TriggerResponse},
    },
    infrastructure::bedrock_adapter::BedrockIngestionAdapter,
};

pub struct LambdaService {
    trigger: Arc<IngestionTrigger>,
}

impl LambdaService {
    pub async fn new() -> Self {
        debug!("Initializing Lambda service");

        let config = TriggerConfig::from_env();

        debug!("Loading AWS configuration");
        let mut aws_config_builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(config.region);

        // Configure endpoint for LocalStack if AWS_ENDPOINT_URL is set
        if let Some(endpoint_url) = &config.endpoint_url {
            info!("Using custom AWS endpoint: {}", endpoint_url);
            aws_config_builder = aws_config_builder.endpoint_url(endpoint_url);
        }

        let aws_config = aws_config_builder.load().await;
        debug!("AWS region: {:?}", aws_config.region());

        let bedrock_client = aws_sdk_bedrockagent::Client::new(&aws_config);
        let job_starter = Arc::new(BedrockIngestionAdapter::new(bedrock_client));
        debug!("Bedrock agent client initialized");

        let trigger = IngestionTrigger::new(Arc::new(config), job_starter);
        Self::with_trigger(trigger)
    }

    pub fn with_trigger(trigger: IngestionTrigger) -> Self {
        Self { trigger: Arc::new(trigger) }
    }

    pub async fn run(self) -> Result<(), Error> {
        info!("Waiting for invocations");

        let trigger = self.trigger;
        let func = service_fn(move |event: LambdaEvent<Value>| {
            let trigger = trigger.clone();
            async move { invoke(&trigger, event).await }
        });

        lambda_runtime::run(func).await
    }
}

pub async fn invoke(trigger: &IngestionTrigger, event: LambdaEvent<Value>) -> Result<TriggerResponse, Diagnostic> {
    debug!("Invocation request id: {}", event.context.request_id);
    trigger.handle(InvocationEvent::new(event.payload)).await
        .map_err(|e| diagnostic(&e))
}

/// Failed-invocation report: the service's error code as type, its message verbatim.
pub fn diagnostic(err: &TriggerError) -> Diagnostic {
    Diagnostic {
        error_type: err.error_type().to_string(),
        error_message: err.to_string(),
    }
}
