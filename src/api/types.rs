use std::time::Duration;

/// Connection settings for the prediction service
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL, e.g. `http://127.0.0.1:8000`
    pub api_base: String,
    /// Neighbours requested from the similarity search
    pub similar_k: u32,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn with_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// Absolute URL for a path such as `/predict`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8000".to_string(),
            similar_k: 5,
            request_timeout: None,
            user_agent: concat!("sicop-cotizador/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("/health"), "http://127.0.0.1:8000/health");
        assert_eq!(config.similar_k, 5);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let config = ClientConfig::with_base("https://api.example.cl/");
        assert_eq!(config.endpoint("/predict"), "https://api.example.cl/predict");
    }
}
