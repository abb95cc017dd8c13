use std::sync::Arc;

use logger::TracingLogger;
use rest_client::client::ApiClient;
use rest_client::favorite_repository::FavoriteRepositoryHttp;
use rest_client::food_repository::FoodRepositoryHttp;
use rest_client::order_repository::OrderRepositoryHttp;

use business::application::food_details::finish_order::FinishOrderUseCaseImpl;
use business::application::food_details::load::LoadFoodDetailsUseCaseImpl;
use business::application::food_details::screen::FoodDetailsScreen;
use business::application::food_details::toggle_favorite::ToggleFavoriteUseCaseImpl;
use business::domain::food_details::services::ValueFormatter;

use crate::config::app_config::AppConfig;
use crate::setup::navigator::ConsoleNavigator;

pub struct DependencyContainer {
    pub screen: FoodDetailsScreen,
    pub navigator: Arc<ConsoleNavigator>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let navigator = Arc::new(ConsoleNavigator::new());
        let formatter: Arc<dyn ValueFormatter> = Arc::new(config.currency.format.clone());

        // Infrastructure adapters
        let api_client = ApiClient::new(&config.api.base_url, config.api.timeout)?;
        let food_repository = Arc::new(FoodRepositoryHttp::new(api_client.clone()));
        let favorite_repository = Arc::new(FavoriteRepositoryHttp::new(api_client.clone()));
        let order_repository = Arc::new(OrderRepositoryHttp::new(api_client));

        // Food details use cases
        let load_use_case = Arc::new(LoadFoodDetailsUseCaseImpl {
            food_repository,
            favorite_repository: favorite_repository.clone(),
            formatter: formatter.clone(),
            logger: logger.clone(),
        });
        let toggle_favorite_use_case = Arc::new(ToggleFavoriteUseCaseImpl {
            repository: favorite_repository,
            logger: logger.clone(),
        });
        let finish_order_use_case = Arc::new(FinishOrderUseCaseImpl {
            repository: order_repository,
            navigator: navigator.clone(),
            logger: logger.clone(),
        });

        let screen = FoodDetailsScreen::new(
            load_use_case,
            toggle_favorite_use_case,
            finish_order_use_case,
            formatter,
            logger,
        );

        Ok(Self { screen, navigator })
    }
}
