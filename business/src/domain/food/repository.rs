use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::FoodId;

use super::model::Food;

#[async_trait]
pub trait FoodRepository: Send + Sync {
    async fn get_by_id(&self, id: FoodId) -> Result<Food, RepositoryError>;
}
