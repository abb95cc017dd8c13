use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::food_details::errors::FoodDetailsError;
use crate::domain::food_details::use_cases::toggle_favorite::{
    FavoriteToggle, ToggleFavoriteParams, ToggleFavoriteUseCase,
};
use crate::domain::logger::Logger;

pub struct ToggleFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleFavoriteUseCase for ToggleFavoriteUseCaseImpl {
    async fn execute(
        &self,
        params: ToggleFavoriteParams,
    ) -> Result<FavoriteToggle, FoodDetailsError> {
        match params.current {
            Some(favorite) => {
                self.logger
                    .info(&format!("Removing favorite: {}", favorite.id));

                self.repository.delete(favorite.id).await?;

                self.logger.info(&format!("Favorite removed: {}", favorite.id));
                Ok(FavoriteToggle::Removed)
            }
            None => {
                self.logger
                    .info(&format!("Adding favorite: {}", params.food.id));

                let created = self.repository.create(&params.food.to_favorite()).await?;

                self.logger.info(&format!("Favorite added: {}", created.id));
                Ok(FavoriteToggle::Added(created))
            }
        }
    }
}
