use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::FavoriteFood;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::shared::value_objects::FoodId;

use crate::client::ApiClient;

pub struct FavoriteRepositoryHttp {
    client: ApiClient,
}

impl FavoriteRepositoryHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryHttp {
    async fn get_all(&self) -> Result<Vec<FavoriteFood>, RepositoryError> {
        let response = self
            .client
            .send(self.client.client.get(self.client.favorites_url()))
            .await?;

        response
            .json()
            .await
            .map_err(|_| RepositoryError::decode_error())
    }

    async fn create(&self, favorite: &FavoriteFood) -> Result<FavoriteFood, RepositoryError> {
        let response = self
            .client
            .send(
                self.client
                    .client
                    .post(self.client.favorites_url())
                    .json(favorite),
            )
            .await?;

        let body = response
            .bytes()
            .await
            .map_err(|_| RepositoryError::decode_error())?;

        // Some backends answer 201 without echoing the record.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(favorite.clone());
        }

        serde_json::from_slice(&body).map_err(|_| RepositoryError::decode_error())
    }

    async fn delete(&self, id: FoodId) -> Result<(), RepositoryError> {
        self.client
            .send(self.client.client.delete(self.client.favorite_url(id)))
            .await?;

        Ok(())
    }
}
