use super::{api_config::ApiConfig, currency_config::CurrencyConfig};

pub struct AppConfig {
    pub api: ApiConfig,
    pub currency: CurrencyConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            currency: CurrencyConfig::from_env(),
        }
    }

    /// Replaces the backend base URL when one is given on the command line.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(base_url) = api_url {
            self.api.base_url = base_url;
        }
        self
    }
}
