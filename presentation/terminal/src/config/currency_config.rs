use std::env;

use business::domain::shared::currency::CurrencyFormat;

/// Currency used to display prices
pub struct CurrencyConfig {
    pub format: CurrencyFormat,
}

impl CurrencyConfig {
    /// Load the display currency from CURRENCY_LOCALE ("pt-BR" or "en-US", default "pt-BR")
    pub fn from_env() -> Self {
        Self::from_locale(env::var("CURRENCY_LOCALE").ok())
    }

    fn from_locale(locale: Option<String>) -> Self {
        let format = match locale {
            Some(locale) => locale.parse::<CurrencyFormat>().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to pt-BR", e);
                CurrencyFormat::pt_br()
            }),
            None => CurrencyFormat::pt_br(),
        };

        Self { format }
    }
}
