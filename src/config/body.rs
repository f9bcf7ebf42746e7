use serde::Deserialize;

/// Request handling configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl HttpConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_body_bytes == 0 {
            return Err("MAX_BODY_BYTES must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        // Matches the usual JSON body-parser default of 100kb
        Self {
            max_body_bytes: 100 * 1024,
        }
    }
}
