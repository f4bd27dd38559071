//! Routing and response building over API Gateway proxy events.

mod request;
mod response;
mod route;

pub use request::ProxyRequestExt;
pub use response::{build_response, ALLOWED_METHODS, CORS_HEADERS};
pub use route::{
    Route, ALL_CONTACTS_PATH, CONTACT_PATH, CREATE_CONTACT_PATH, DELETE_CONTACT_PATH,
    UPDATE_CONTACT_PATH,
};
