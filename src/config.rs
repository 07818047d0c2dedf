/// Backend location and logging configuration

/// Origin and prefix of the job backend
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an API path such as `/companies/3`
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::new(DEFAULT_API_BASE)
    }
}

/// Console logger settings, picked by build profile
pub fn logger_config() -> wasm_logger::Config {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::Config::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        let config = ApiConfig::default();
        assert_eq!(config.url_for("/scrape"), "http://localhost:8000/api/scrape");
    }

    #[test]
    fn test_url_for_normalizes_slashes() {
        let config = ApiConfig::new("http://127.0.0.1:9000/api/");
        assert_eq!(config.url_for("companies/7"), "http://127.0.0.1:9000/api/companies/7");
        assert_eq!(config.url_for("/rank?limit=5"), "http://127.0.0.1:9000/api/rank?limit=5");
    }
}
