use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::food_details::errors::FoodDetailsError;
use crate::domain::food_details::reducers::order_total;
use crate::domain::food_details::services::{DASHBOARD_ROUTE, Navigator};
use crate::domain::food_details::use_cases::finish_order::{
    FinishOrderParams, FinishOrderUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::order::model::NewOrder;
use crate::domain::order::repository::OrderRepository;

pub struct FinishOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FinishOrderUseCase for FinishOrderUseCaseImpl {
    async fn execute(&self, params: FinishOrderParams) -> Result<NewOrder, FoodDetailsError> {
        let total = order_total(&params.food, params.food_quantity, &params.extras);
        let order = NewOrder::from_cart(&params.food, &params.extras, total);

        self.logger.info(&format!(
            "Placing order for food {} (quantity {}, total {:.2})",
            order.product_id, params.food_quantity, order.price
        ));

        self.repository.create(&order).await?;

        self.navigator.reset(DASHBOARD_ROUTE);

        self.logger
            .info(&format!("Order placed for food {}", order.product_id));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::food::model::{Extra, Food};
    use crate::domain::shared::value_objects::{ExtraId, FoodId};
    use mockall::mock;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn create(&self, order: &NewOrder) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Nav {}

        impl Navigator for Nav {
            fn reset(&self, root: &str);
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params() -> FinishOrderParams {
        FinishOrderParams {
            food: Food {
                id: FoodId::new(1),
                name: "Ao molho".to_string(),
                description: "Macarrão".to_string(),
                price: 20.0,
                image_url: "https://example.com/ao_molho.png".to_string(),
                formatted_price: None,
                category: 1,
                extras: vec![],
            },
            extras: vec![
                Extra {
                    id: ExtraId::new(1),
                    name: "Bacon".to_string(),
                    value: 1.5,
                    quantity: 0,
                },
                Extra {
                    id: ExtraId::new(2),
                    name: "Queijo".to_string(),
                    value: 5.0,
                    quantity: 3,
                },
            ],
            food_quantity: 2,
        }
    }

    #[tokio::test]
    async fn should_submit_cart_total_as_price_and_reset_navigation() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_create()
            .withf(|order| {
                order.price == 55.0
                    && order.product_id == FoodId::new(1)
                    && order.thumbnail_url == "https://example.com/ao_molho.png"
                    && order.extras.len() == 2
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut navigator = MockNav::new();
        navigator
            .expect_reset()
            .withf(|root| root.to_string() == "Dashboard")
            .times(1)
            .returning(|_| ());

        let use_case = FinishOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            navigator: Arc::new(navigator),
            logger: mock_logger(),
        };

        let order = use_case.execute(params()).await.unwrap();

        assert_eq!(order.price, 55.0);
        assert_eq!(order.extras[0].quantity, 0);
    }

    #[tokio::test]
    async fn should_not_navigate_when_order_fails() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Unreachable));
        let mut navigator = MockNav::new();
        navigator.expect_reset().never();

        let use_case = FinishOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            navigator: Arc::new(navigator),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            FoodDetailsError::Repository(RepositoryError::Unreachable)
        ));
    }
}
