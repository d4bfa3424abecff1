/// Credentials handed to the API client at construction.
///
/// A missing token is not an error here; the server decides what an
/// anonymous request may do.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    access_token: Option<String>,
}

impl Credentials {
    pub fn new(access_token: Option<String>) -> Self {
        Self {
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Read the token persisted by the login flow
    pub fn from_storage() -> Self {
        Self::new(super::storage::get_access_token())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Value for the `Authorization` header, if a token is present
    pub fn authorization_header(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }
}
