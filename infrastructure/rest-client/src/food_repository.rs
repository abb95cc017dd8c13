use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::food::model::Food;
use business::domain::food::repository::FoodRepository;
use business::domain::shared::value_objects::FoodId;

use crate::client::ApiClient;
use crate::dto::FoodDto;

pub struct FoodRepositoryHttp {
    client: ApiClient,
}

impl FoodRepositoryHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FoodRepository for FoodRepositoryHttp {
    async fn get_by_id(&self, id: FoodId) -> Result<Food, RepositoryError> {
        let response = self
            .client
            .send(self.client.client.get(self.client.food_url(id)))
            .await?;

        let dto: FoodDto = response
            .json()
            .await
            .map_err(|_| RepositoryError::decode_error())?;

        Ok(dto.into_domain())
    }
}
