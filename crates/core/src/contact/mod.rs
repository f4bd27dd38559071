mod error;
mod requests;
mod types;

pub use error::RequestError;
pub use requests::{parse_create_body, parse_update_body};
pub use types::{Contact, ContactDetails};
