use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::model::find_favorite;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::food::repository::FoodRepository;
use crate::domain::food_details::errors::FoodDetailsError;
use crate::domain::food_details::services::ValueFormatter;
use crate::domain::food_details::use_cases::load::{
    LoadFoodDetailsParams, LoadFoodDetailsUseCase, LoadedFoodDetails,
};
use crate::domain::logger::Logger;

pub struct LoadFoodDetailsUseCaseImpl {
    pub food_repository: Arc<dyn FoodRepository>,
    pub favorite_repository: Arc<dyn FavoriteRepository>,
    pub formatter: Arc<dyn ValueFormatter>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadFoodDetailsUseCase for LoadFoodDetailsUseCaseImpl {
    async fn execute(
        &self,
        params: LoadFoodDetailsParams,
    ) -> Result<LoadedFoodDetails, FoodDetailsError> {
        self.logger
            .info(&format!("Loading food details: {}", params.id));

        // Both requests run together; neither result is used unless both succeed.
        let (mut food, favorites) = tokio::try_join!(
            async {
                self.food_repository
                    .get_by_id(params.id)
                    .await
                    .map_err(|e| match e {
                        RepositoryError::NotFound => FoodDetailsError::FoodNotFound,
                        other => FoodDetailsError::Repository(other),
                    })
            },
            async {
                self.favorite_repository
                    .get_all()
                    .await
                    .map_err(FoodDetailsError::from)
            },
        )?;

        if food.formatted_price.is_none() {
            food.formatted_price = Some(self.formatter.format_value(food.price));
        }

        let favorite = find_favorite(favorites, food.id);
        let extras = food.extras_with_quantity();

        self.logger.debug(&format!(
            "Food {} loaded with {} extras (favorite: {})",
            food.id,
            extras.len(),
            favorite.is_some()
        ));

        Ok(LoadedFoodDetails {
            food,
            extras,
            favorite,
        })
    }
}
