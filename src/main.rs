use kb_ingestion_trigger::lambda_service::LambdaService;
use lambda_runtime::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch stamps each line, so no timestamps or colours here
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("kb_ingestion_trigger=debug".parse()?)
            .add_directive("aws_sdk=warn".parse()?)
            .add_directive("aws_smithy=warn".parse()?))
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Starting knowledge base ingestion trigger");

    let service = LambdaService::new().await;
    info!("Lambda service initialized successfully");

    service.run().await
}
