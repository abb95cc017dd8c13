use async_trait::async_trait;

use crate::domain::favorite::model::FavoriteFood;
use crate::domain::food::model::{Extra, Food};
use crate::domain::food_details::errors::FoodDetailsError;
use crate::domain::shared::value_objects::FoodId;

pub struct LoadFoodDetailsParams {
    pub id: FoodId,
}

/// Result of the load sequence, ready to become the screen state.
#[derive(Debug, Clone)]
pub struct LoadedFoodDetails {
    pub food: Food,
    pub extras: Vec<Extra>,
    pub favorite: Option<FavoriteFood>,
}

#[async_trait]
pub trait LoadFoodDetailsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: LoadFoodDetailsParams,
    ) -> Result<LoadedFoodDetails, FoodDetailsError>;
}
