use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::http::{header, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

/// Methods advertised in `Access-Control-Allow-Methods`.
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS, PUT, DELETE";

/// Headers attached to every response.
pub const CORS_HEADERS: [(HeaderName, &str); 4] = [
    (header::CONTENT_TYPE, "application/json"),
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
];

/// Builds a response with the fixed header set and a JSON-encoded body.
///
/// Plain messages are encoded as JSON strings, records as JSON objects.
pub fn build_response<T: Serialize + ?Sized>(
    status_code: u16,
    payload: &T,
) -> ApiGatewayProxyResponse {
    let headers: HeaderMap = CORS_HEADERS
        .into_iter()
        .map(|(name, value)| (name, HeaderValue::from_static(value)))
        .collect();

    // Payloads are plain strings and derived records; this can't fail in practice.
    let body = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());

    ApiGatewayProxyResponse {
        status_code: i64::from(status_code),
        headers,
        multi_value_headers: HeaderMap::new(),
        body: Some(Body::Text(body)),
        is_base64_encoded: false,
    }
}
