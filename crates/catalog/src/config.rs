//! API configuration
//!
//! Base origin, bearer token, and tenant id are deployment values, not
//! source literals. For a browser build they are baked in at compile
//! time from the environment.

/// Connection settings for the remote product API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: String,
    /// Tenant the admin panel manages records for. Every create/update
    /// payload carries this id.
    pub company_id: String,
}

impl ApiConfig {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        company_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            company_id: company_id.into(),
        }
    }

    /// Read settings baked in at compile time. Missing values fall back
    /// to a local development server and an empty token.
    pub fn from_build_env() -> Self {
        Self {
            base_url: option_env!("ADBOARD_API_URL")
                .unwrap_or("http://localhost:3000")
                .to_string(),
            token: option_env!("ADBOARD_API_TOKEN").unwrap_or("").to_string(),
            company_id: option_env!("ADBOARD_COMPANY_ID").unwrap_or("").to_string(),
        }
    }

    /// `Authorization` header value for authenticated requests.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
