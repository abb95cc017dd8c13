use serde::{Deserialize, Serialize};

use business::domain::food::model::{Extra, Food, FoodExtra};
use business::domain::order::model::NewOrder;
use business::domain::shared::value_objects::FoodId;

/// Body of `GET /foods/{id}`.
#[derive(Debug, Deserialize)]
pub struct FoodDto {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    #[serde(rename = "formattedPrice", default)]
    pub formatted_price: Option<String>,
    pub category: u64,
    #[serde(default)]
    pub extras: Vec<FoodExtra>,
}

impl FoodDto {
    pub fn into_domain(self) -> Food {
        Food {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            formatted_price: self.formatted_price,
            category: self.category,
            extras: self.extras,
        }
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Serialize)]
pub struct OrderDto<'a> {
    pub product_id: FoodId,
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub category: u64,
    pub thumbnail_url: &'a str,
    pub extras: &'a [Extra],
}

impl<'a> From<&'a NewOrder> for OrderDto<'a> {
    fn from(order: &'a NewOrder) -> Self {
        Self {
            product_id: order.product_id,
            name: &order.name,
            description: &order.description,
            price: order.price,
            category: order.category,
            thumbnail_url: &order.thumbnail_url,
            extras: &order.extras,
        }
    }
}
