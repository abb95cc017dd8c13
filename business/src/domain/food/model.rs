use serde::{Deserialize, Serialize};

use crate::domain::favorite::model::FavoriteFood;
use crate::domain::shared::value_objects::{ExtraId, FoodId};

/// Add-on as published by the backend, without any chosen quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodExtra {
    pub id: ExtraId,
    pub name: String,
    pub value: f64,
}

/// Add-on selected for the current order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub id: ExtraId,
    pub name: String,
    /// Unit price.
    pub value: f64,
    pub quantity: u32,
}

impl Extra {
    /// Subtotal contributed by this extra.
    pub fn subtotal(&self) -> f64 {
        self.value * f64::from(self.quantity)
    }
}

impl From<&FoodExtra> for Extra {
    fn from(extra: &FoodExtra) -> Self {
        Self {
            id: extra.id,
            name: extra.name.clone(),
            value: extra.value,
            quantity: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    /// Display price; filled in on load when the backend omits it.
    pub formatted_price: Option<String>,
    pub category: u64,
    pub extras: Vec<FoodExtra>,
}

impl Food {
    /// Extras ready to be ordered, every quantity starting at zero.
    pub fn extras_with_quantity(&self) -> Vec<Extra> {
        self.extras.iter().map(Extra::from).collect()
    }

    /// The record sent when marking this food as a favorite.
    pub fn to_favorite(&self) -> FavoriteFood {
        FavoriteFood {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
            formatted_price: self.formatted_price.clone(),
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_with_extras() -> Food {
        Food {
            id: FoodId::new(1),
            name: "Ao molho".to_string(),
            description: "Macarrão ao molho branco".to_string(),
            price: 19.9,
            image_url: "https://example.com/ao_molho.png".to_string(),
            formatted_price: None,
            category: 1,
            extras: vec![
                FoodExtra {
                    id: ExtraId::new(1),
                    name: "Bacon".to_string(),
                    value: 1.5,
                },
                FoodExtra {
                    id: ExtraId::new(2),
                    name: "Frango".to_string(),
                    value: 2.0,
                },
            ],
        }
    }

    #[test]
    fn should_start_every_extra_at_zero_quantity() {
        let extras = food_with_extras().extras_with_quantity();

        assert_eq!(extras.len(), 2);
        assert!(extras.iter().all(|extra| extra.quantity == 0));
        assert_eq!(extras[0].id, ExtraId::new(1));
        assert_eq!(extras[1].name, "Frango");
    }

    #[test]
    fn should_compute_extra_subtotal() {
        let extra = Extra {
            id: ExtraId::new(3),
            name: "Queijo".to_string(),
            value: 5.0,
            quantity: 3,
        };

        assert_eq!(extra.subtotal(), 15.0);
    }

    #[test]
    fn should_drop_extras_when_converting_to_favorite() {
        let food = food_with_extras();
        let favorite = food.to_favorite();

        assert_eq!(favorite.id, food.id);
        assert_eq!(favorite.name, food.name);
        assert_eq!(favorite.price, food.price);
        // The favorites collection stores food records without extras.
        let json = serde_json::to_value(&favorite).unwrap();
        assert!(json.get("extras").is_none());
    }
}
