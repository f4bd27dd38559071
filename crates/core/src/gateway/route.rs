pub const CREATE_CONTACT_PATH: &str = "/createContact";
pub const ALL_CONTACTS_PATH: &str = "/allContacts";
pub const CONTACT_PATH: &str = "/contact";
pub const UPDATE_CONTACT_PATH: &str = "/updateContact";
pub const DELETE_CONTACT_PATH: &str = "/deleteContact";

/// The operation selected by an inbound method and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `POST /createContact`
    CreateContact,
    /// `GET /allContacts`
    ListContacts,
    /// `GET /contact?phone=`
    GetContact,
    /// `PUT /updateContact?phone=`
    UpdateContact,
    /// `DELETE /deleteContact?phone=`
    DeleteContact,
    /// Any other method/path pairing.
    Unmatched,
}

impl Route {
    /// Resolves a method and path to a route.
    ///
    /// Matching is exact and case-sensitive on both parts. Anything that is
    /// not one of the five pairings resolves to [`Route::Unmatched`].
    pub fn resolve(method: &str, path: &str) -> Self {
        match (method, path) {
            ("POST", CREATE_CONTACT_PATH) => Route::CreateContact,
            ("GET", ALL_CONTACTS_PATH) => Route::ListContacts,
            ("GET", CONTACT_PATH) => Route::GetContact,
            ("PUT", UPDATE_CONTACT_PATH) => Route::UpdateContact,
            ("DELETE", DELETE_CONTACT_PATH) => Route::DeleteContact,
            _ => Route::Unmatched,
        }
    }

    /// Short operation name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Route::CreateContact => "create_contact",
            Route::ListContacts => "list_contacts",
            Route::GetContact => "get_contact",
            Route::UpdateContact => "update_contact",
            Route::DeleteContact => "delete_contact",
            Route::Unmatched => "unmatched",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_routes() {
        assert_eq!(Route::resolve("POST", "/createContact"), Route::CreateContact);
        assert_eq!(Route::resolve("GET", "/allContacts"), Route::ListContacts);
        assert_eq!(Route::resolve("GET", "/contact"), Route::GetContact);
        assert_eq!(Route::resolve("PUT", "/updateContact"), Route::UpdateContact);
        assert_eq!(Route::resolve("DELETE", "/deleteContact"), Route::DeleteContact);
    }

    #[test]
    fn test_resolve_wrong_method_for_path() {
        assert_eq!(Route::resolve("GET", "/createContact"), Route::Unmatched);
        assert_eq!(Route::resolve("POST", "/contact"), Route::Unmatched);
        assert_eq!(Route::resolve("DELETE", "/updateContact"), Route::Unmatched);
        assert_eq!(Route::resolve("PUT", "/deleteContact"), Route::Unmatched);
        assert_eq!(Route::resolve("OPTIONS", "/allContacts"), Route::Unmatched);
    }

    #[test]
    fn test_resolve_is_exact() {
        assert_eq!(Route::resolve("get", "/contact"), Route::Unmatched);
        assert_eq!(Route::resolve("GET", "/Contact"), Route::Unmatched);
        assert_eq!(Route::resolve("GET", "/contact/"), Route::Unmatched);
        assert_eq!(Route::resolve("GET", "/contacts"), Route::Unmatched);
        assert_eq!(Route::resolve("GET", ""), Route::Unmatched);
        assert_eq!(Route::resolve("", ""), Route::Unmatched);
    }
}
