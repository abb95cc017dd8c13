use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::order::model::NewOrder;
use business::domain::order::repository::OrderRepository;

use crate::client::ApiClient;
use crate::dto::OrderDto;

pub struct OrderRepositoryHttp {
    client: ApiClient,
}

impl OrderRepositoryHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryHttp {
    async fn create(&self, order: &NewOrder) -> Result<(), RepositoryError> {
        self.client
            .send(
                self.client
                    .client
                    .post(self.client.orders_url())
                    .json(&OrderDto::from(order)),
            )
            .await?;

        Ok(())
    }
}
