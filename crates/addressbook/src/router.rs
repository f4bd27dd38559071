//! Gateway event routing.
//!
//! Resolves the method and path to a [`Route`], pulls the route's inputs out
//! of the request and hands them to the matching handler.

use addressbook_core::contact::{parse_create_body, parse_update_body, RequestError};
use addressbook_core::gateway::{build_response, ProxyRequestExt, Route};
use addressbook_core::storage::ContactRepository;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};

use crate::{handlers::contacts, state::AppState};

pub const NOT_FOUND: &str = "Not Found";
pub const INVALID_BODY: &str = "Error: Invalid request body";
pub const MISSING_PHONE: &str = "Error: Missing phone query parameter";

/// Handles a gateway request end to end. Always produces a response.
pub async fn handle_request(
    state: &AppState,
    request: ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    let route = request.route();

    tracing::debug!(route = route.name(), "Resolved route");

    dispatch(state.contact_repo.as_ref(), route, &request)
        .await
        .unwrap_or_else(|e| bad_request(route, e))
}

async fn dispatch(
    repo: &dyn ContactRepository,
    route: Route,
    request: &ApiGatewayProxyRequest,
) -> Result<ApiGatewayProxyResponse, RequestError> {
    let response = match route {
        Route::CreateContact => {
            let contact = parse_create_body(request.body_str())?;
            contacts::create_contact(repo, &contact).await
        }
        Route::ListContacts => contacts::list_contacts(repo).await,
        Route::GetContact => contacts::get_contact(repo, request.phone()?).await,
        Route::UpdateContact => {
            let phone = request.phone()?;
            let details = parse_update_body(request.body_str())?;
            contacts::update_contact(repo, phone, &details).await
        }
        Route::DeleteContact => contacts::delete_contact(repo, request.phone()?).await,
        Route::Unmatched => {
            tracing::warn!(
                method = %request.http_method,
                path = ?request.path,
                "No route for request"
            );
            build_response(404, NOT_FOUND)
        }
    };

    Ok(response)
}

fn bad_request(route: Route, error: RequestError) -> ApiGatewayProxyResponse {
    tracing::warn!(route = route.name(), error = %error, "Rejected request");

    let message = match error {
        RequestError::MissingPhone => MISSING_PHONE,
        RequestError::MissingBody | RequestError::InvalidBody(_) => INVALID_BODY,
    };
    build_response(400, message)
}
