use crate::domain::favorite::model::FavoriteFood;
use crate::domain::food::model::{Extra, Food};
use crate::domain::shared::value_objects::{ExtraId, FoodId};

use super::reducers::{self, FOOD_QUANTITY_FLOOR};
use super::view::FavoriteIcon;

/// Everything the food details screen holds between two user events.
///
/// The favorite flag is not stored on its own: a food is favorited exactly
/// when `favorite` carries the backend record used to remove it.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodDetailsState {
    pub food: Option<Food>,
    pub extras: Vec<Extra>,
    pub favorite: Option<FavoriteFood>,
    pub food_quantity: u32,
}

impl Default for FoodDetailsState {
    fn default() -> Self {
        Self {
            food: None,
            extras: Vec::new(),
            favorite: None,
            food_quantity: FOOD_QUANTITY_FLOOR,
        }
    }
}

impl FoodDetailsState {
    pub fn loaded(food: Food, extras: Vec<Extra>, favorite: Option<FavoriteFood>) -> Self {
        Self {
            food: Some(food),
            extras,
            favorite,
            food_quantity: FOOD_QUANTITY_FLOOR,
        }
    }

    pub fn food_id(&self) -> Option<FoodId> {
        self.food.as_ref().map(|food| food.id)
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite.is_some()
    }

    pub fn favorite_icon(&self) -> FavoriteIcon {
        FavoriteIcon::from_flag(self.is_favorite())
    }

    pub fn has_extra(&self, id: ExtraId) -> bool {
        self.extras.iter().any(|extra| extra.id == id)
    }

    pub fn extra_quantity(&self, id: ExtraId) -> Option<u32> {
        self.extras
            .iter()
            .find(|extra| extra.id == id)
            .map(|extra| extra.quantity)
    }

    /// Zero until a food is loaded.
    pub fn order_total(&self) -> f64 {
        self.food
            .as_ref()
            .map(|food| reducers::order_total(food, self.food_quantity, &self.extras))
            .unwrap_or(0.0)
    }

    pub fn with_extra_delta(self, id: ExtraId, delta: i32) -> Self {
        Self {
            extras: reducers::adjust_extra(&self.extras, id, delta),
            ..self
        }
    }

    pub fn with_food_delta(self, delta: i32) -> Self {
        Self {
            food_quantity: reducers::adjust_quantity(self.food_quantity, delta, FOOD_QUANTITY_FLOOR),
            ..self
        }
    }

    pub fn with_favorite(self, favorite: Option<FavoriteFood>) -> Self {
        Self { favorite, ..self }
    }
}
