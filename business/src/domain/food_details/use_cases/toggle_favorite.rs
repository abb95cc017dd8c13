use async_trait::async_trait;

use crate::domain::favorite::model::FavoriteFood;
use crate::domain::food::model::Food;
use crate::domain::food_details::errors::FoodDetailsError;

pub struct ToggleFavoriteParams {
    pub food: Food,
    /// Stored favorite record; `Some` means the food is currently favorited.
    pub current: Option<FavoriteFood>,
}

/// Outcome of a toggle once the backend has confirmed it.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteToggle {
    Added(FavoriteFood),
    Removed,
}

impl FavoriteToggle {
    /// The favorite record to keep after the toggle.
    pub fn into_favorite(self) -> Option<FavoriteFood> {
        match self {
            FavoriteToggle::Added(favorite) => Some(favorite),
            FavoriteToggle::Removed => None,
        }
    }
}

#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: ToggleFavoriteParams)
    -> Result<FavoriteToggle, FoodDetailsError>;
}
