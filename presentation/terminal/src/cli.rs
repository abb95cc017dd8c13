use clap::Parser;

use business::domain::food_details::services::RouteParams;
use business::domain::shared::value_objects::FoodId;

/// Browse a food, pick extras and place an order.
#[derive(Debug, Parser)]
#[command(name = "food-details", version)]
pub struct Cli {
    /// Id of the food to open
    pub food_id: u64,

    /// Backend base URL, overriding API_BASE_URL
    #[arg(long)]
    pub api_url: Option<String>,
}

impl Cli {
    pub fn route(&self) -> RouteParams {
        RouteParams {
            id: FoodId::new(self.food_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_food_id_as_route() {
        let cli = Cli::try_parse_from(["food-details", "3"]).unwrap();

        assert_eq!(cli.route().id, FoodId::new(3));
        assert!(cli.api_url.is_none());
    }

    #[test]
    fn should_accept_api_url_override() {
        let cli = Cli::try_parse_from(["food-details", "1", "--api-url", "http://10.0.2.2:3333"])
            .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.2.2:3333"));
    }

    #[test]
    fn should_reject_non_numeric_food_id() {
        assert!(Cli::try_parse_from(["food-details", "ao-molho"]).is_err());
    }
}
