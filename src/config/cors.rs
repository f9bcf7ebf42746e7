use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Browser origins allowed to read API responses.
pub const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://192.168.11.213:5173",
    "https://my-contact-cyan.vercel.app",
];

pub const ALLOWED_METHODS: [&str; 6] = ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"];

pub const ALLOWED_HEADERS: [&str; 3] = ["Content-Type", "Authorization", "X-Requested-With"];

/// CORS policy applied to every inbound request.
///
/// Origins outside the allow-list get no CORS headers at all, which leaves the
/// rejection to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allowed_origins: Vec<String>,
    pub credentials: bool,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allowed_origins: ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
            credentials: true,
            allowed_methods: ALLOWED_METHODS.iter().map(|s| s.to_string()).collect(),
            allowed_headers: ALLOWED_HEADERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CorsPolicy {
    /// Whether `origin` is on the allow-list (exact match).
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.allowed_origins.iter().any(|o| o == "*") && self.credentials {
            return Err("CORS credentials cannot be combined with a wildcard origin".to_string());
        }

        for origin in &self.allowed_origins {
            HeaderValue::from_str(origin).map_err(|_| format!("Invalid CORS origin: {}", origin))?;
        }

        for method in &self.allowed_methods {
            Method::from_bytes(method.as_bytes())
                .map_err(|_| format!("Invalid CORS method: {}", method))?;
        }

        for header in &self.allowed_headers {
            HeaderName::from_bytes(header.as_bytes())
                .map_err(|_| format!("Invalid CORS header: {}", header))?;
        }

        Ok(())
    }

    /// Build the tower-http layer. Entries that fail to parse are skipped;
    /// `validate` reports them up front.
    pub fn layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|s| s.parse::<HeaderValue>().ok())
            .collect();
        let methods: Vec<Method> = self
            .allowed_methods
            .iter()
            .filter_map(|m| Method::from_bytes(m.as_bytes()).ok())
            .collect();
        let headers: Vec<HeaderName> = self
            .allowed_headers
            .iter()
            .filter_map(|h| HeaderName::from_bytes(h.as_bytes()).ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(methods)
            .allow_headers(headers)
            .allow_credentials(self.credentials)
    }
}
