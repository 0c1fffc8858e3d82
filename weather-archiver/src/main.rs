use aws_sdk_s3::Client as S3Client;
use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use weather_archiver::archive::{FetchArchiveTask, InvocationResult};
use weather_archiver::bucket::BucketClient;
use weather_archiver::types::{Environment, WorkerConfig, WorkerError};
use weather_archiver::weather::WeatherApiClient;

/// Runs one fetch-and-archive invocation against the real clients
async fn invoke(environment: Environment) -> Result<InvocationResult, WorkerError> {
    let config = WorkerConfig::from_env()?;

    let s3_client = S3Client::from_conf(environment.s3_client_config().await);
    let store = BucketClient::new(s3_client, config.bucket_name.clone());
    let source = WeatherApiClient::new(
        config.weather_api_key.clone(),
        environment.weather_api_base_url(),
    );

    let task = FetchArchiveTask::new(source, store, config.location);
    task.run(Utc::now()).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // Use JSON format for staging/production, regular format for development
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.tracing_level().to_string()));
    match environment {
        Environment::Production | Environment::Staging => {
            fmt().json().with_env_filter(filter).init();
        }
        Environment::Development => {
            fmt().with_env_filter(filter).init();
        }
    }

    info!("Starting weather archiver in {:?} environment", environment);

    match invoke(environment).await {
        Ok(result) => {
            // The scheduler reads the result object from stdout
            println!("{}", serde_json::to_string(&result)?);
            Ok(())
        }
        Err(e) => {
            error!("Invocation failed: {e}");
            Err(e.into())
        }
    }
}
