use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::FoodId;

use super::model::FavoriteFood;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<FavoriteFood>, RepositoryError>;
    /// Stores a favorite and returns the record as persisted by the backend.
    async fn create(&self, favorite: &FavoriteFood) -> Result<FavoriteFood, RepositoryError>;
    async fn delete(&self, id: FoodId) -> Result<(), RepositoryError>;
}
