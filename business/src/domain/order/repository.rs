use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::NewOrder;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: &NewOrder) -> Result<(), RepositoryError>;
}
