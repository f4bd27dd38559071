//! Test helpers for building proxy events and reading proxy responses.

use std::collections::HashMap;

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::http::Method;
use aws_lambda_events::query_map::QueryMap;
use serde::de::DeserializeOwned;

/// A proxy event with only the method and path set.
pub fn proxy_request(method: Method, path: &str) -> ApiGatewayProxyRequest {
    ApiGatewayProxyRequest {
        http_method: method,
        path: Some(path.to_string()),
        ..Default::default()
    }
}

/// Replaces the event's query string with a single parameter.
pub fn with_query(
    mut request: ApiGatewayProxyRequest,
    key: &str,
    value: &str,
) -> ApiGatewayProxyRequest {
    request.query_string_parameters =
        QueryMap::from(HashMap::from([(key.to_string(), vec![value.to_string()])]));
    request
}

/// Sets the event's raw body.
pub fn with_body(
    mut request: ApiGatewayProxyRequest,
    body: impl Into<String>,
) -> ApiGatewayProxyRequest {
    request.body = Some(body.into());
    request
}

/// Returns the response's text body.
///
/// # Panics
///
/// Panics if the body is missing or binary.
pub fn body_text(response: &ApiGatewayProxyResponse) -> &str {
    match &response.body {
        Some(Body::Text(text)) => text,
        other => panic!("expected a text body, got {other:?}"),
    }
}

/// Decodes the response's JSON body.
pub fn body_json<T: DeserializeOwned>(response: &ApiGatewayProxyResponse) -> T {
    serde_json::from_str(body_text(response)).unwrap()
}

/// Decodes a response whose body is a plain JSON string message.
pub fn message(response: &ApiGatewayProxyResponse) -> String {
    body_json(response)
}
