use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;

use crate::contact::RequestError;

use super::Route;

/// Read access to the parts of an API Gateway proxy event the service uses.
pub trait ProxyRequestExt {
    /// Resolves the event's method and path. A missing path never matches.
    fn route(&self) -> Route;

    /// Returns the `phone` query parameter that keys read, update and delete.
    fn phone(&self) -> Result<&str, RequestError>;

    /// Returns the raw body, if any.
    fn body_str(&self) -> Option<&str>;
}

impl ProxyRequestExt for ApiGatewayProxyRequest {
    fn route(&self) -> Route {
        Route::resolve(
            self.http_method.as_str(),
            self.path.as_deref().unwrap_or_default(),
        )
    }

    fn phone(&self) -> Result<&str, RequestError> {
        self.query_string_parameters
            .first("phone")
            .ok_or(RequestError::MissingPhone)
    }

    fn body_str(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
