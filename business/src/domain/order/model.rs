use crate::domain::food::model::{Extra, Food};
use crate::domain::shared::value_objects::FoodId;

/// Order ready to be submitted for the food currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub product_id: FoodId,
    pub name: String,
    pub description: String,
    /// Total charged for the whole cart, not the unit price of the food.
    pub price: f64,
    pub category: u64,
    pub thumbnail_url: String,
    /// Every extra on screen, including the ones left at zero.
    pub extras: Vec<Extra>,
}

impl NewOrder {
    pub fn from_cart(food: &Food, extras: &[Extra], total: f64) -> Self {
        Self {
            product_id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: total,
            category: food.category,
            thumbnail_url: food.image_url.clone(),
            extras: extras.to_vec(),
        }
    }
}
