use crate::domain::shared::value_objects::ExtraId;

use super::services::ValueFormatter;
use super::state::FoodDetailsState;

/// Header icon reflecting the favorite flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteIcon {
    Favorite,
    FavoriteBorder,
}

impl FavoriteIcon {
    pub fn from_flag(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteIcon::Favorite
        } else {
            FavoriteIcon::FavoriteBorder
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FavoriteIcon::Favorite => "favorite",
            FavoriteIcon::FavoriteBorder => "favorite-border",
        }
    }
}

impl std::fmt::Display for FavoriteIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtraRow {
    pub id: ExtraId,
    pub name: String,
    pub quantity: u32,
}

/// Display values of the screen, ready to be bound to widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodDetailsView {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub formatted_price: String,
    pub extras: Vec<ExtraRow>,
    pub food_quantity: u32,
    pub formatted_total: String,
    pub favorite_icon: FavoriteIcon,
}

impl FoodDetailsView {
    /// Returns `None` while no food is loaded.
    pub fn from_state(state: &FoodDetailsState, formatter: &dyn ValueFormatter) -> Option<Self> {
        let food = state.food.as_ref()?;

        Some(Self {
            title: food.name.clone(),
            description: food.description.clone(),
            image_url: food.image_url.clone(),
            formatted_price: food
                .formatted_price
                .clone()
                .unwrap_or_else(|| formatter.format_value(food.price)),
            extras: state
                .extras
                .iter()
                .map(|extra| ExtraRow {
                    id: extra.id,
                    name: extra.name.clone(),
                    quantity: extra.quantity,
                })
                .collect(),
            food_quantity: state.food_quantity,
            formatted_total: formatter.format_value(state.order_total()),
            favorite_icon: state.favorite_icon(),
        })
    }
}
