use async_trait::async_trait;

use crate::domain::food::model::{Extra, Food};
use crate::domain::food_details::errors::FoodDetailsError;
use crate::domain::order::model::NewOrder;

pub struct FinishOrderParams {
    pub food: Food,
    pub extras: Vec<Extra>,
    pub food_quantity: u32,
}

#[async_trait]
pub trait FinishOrderUseCase: Send + Sync {
    /// Submits the order and resets navigation; returns what was submitted.
    async fn execute(&self, params: FinishOrderParams) -> Result<NewOrder, FoodDetailsError>;
}
