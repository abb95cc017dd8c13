use crate::domain::food_details::services::ValueFormatter;

/// Locale-aware currency display rules.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: char,
    /// Whether a space separates the symbol from the amount.
    pub symbol_spacing: bool,
}

impl CurrencyFormat {
    /// Brazilian real, e.g. `R$ 1.234,50`.
    pub fn pt_br() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: '.',
            symbol_spacing: true,
        }
    }

    /// US dollar, e.g. `$1,234.50`.
    pub fn en_us() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
            symbol_spacing: false,
        }
    }

    /// Formats a value rounded to cents.
    pub fn format(&self, value: f64) -> String {
        let cents = (value.abs() * 100.0).round() as u64;
        let units = cents / 100;
        let fraction = cents % 100;

        let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
        let spacing = if self.symbol_spacing { " " } else { "" };

        format!(
            "{}{}{}{}{}{:02}",
            sign,
            self.symbol,
            spacing,
            self.group_thousands(units),
            self.decimal_separator,
            fraction
        )
    }

    fn group_thousands(&self, units: u64) -> String {
        let digits = units.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }

        grouped
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::pt_br()
    }
}

impl std::str::FromStr for CurrencyFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt-BR" | "pt_BR" => Ok(CurrencyFormat::pt_br()),
            "en-US" | "en_US" => Ok(CurrencyFormat::en_us()),
            _ => Err(format!("Invalid currency locale: {}", s)),
        }
    }
}

impl ValueFormatter for CurrencyFormat {
    fn format_value(&self, value: f64) -> String {
        self.format(value)
    }
}
