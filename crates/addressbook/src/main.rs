mod config;
mod handlers;
mod router;
mod state;
mod storage;
#[cfg(test)]
mod test_helpers;

use anyhow::Result;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use clap::Parser;
use lambda_runtime::{service_fn, LambdaEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{Config, LogFormat},
    router::handle_request,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    init_tracing(config.log_format);

    // Built once per process and reused by every invocation
    let state = AppState::from_config(&config).await;

    tracing::info!("Lambda runtime starting");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ApiGatewayProxyRequest>| {
        let state = state.clone();
        async move { function_handler(&state, event).await }
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}

/// Handles one gateway event.
///
/// Every outcome, including routing misses and bad input, is a response;
/// the runtime never sees an error from this function.
async fn function_handler(
    state: &AppState,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, lambda_runtime::Error> {
    let (request, context) = event.into_parts();

    tracing::info!(
        request_id = %context.request_id,
        method = %request.http_method,
        path = ?request.path,
        "Received request"
    );

    let response = handle_request(state, request).await;

    tracing::info!(
        request_id = %context.request_id,
        status = response.status_code,
        "Request completed"
    );

    Ok(response)
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "addressbook=info".into());

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
