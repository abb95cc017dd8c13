use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::FoodId;

/// Server-side favorite: a food record without its extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteFood {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    #[serde(
        rename = "formattedPrice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub formatted_price: Option<String>,
    pub category: u64,
}

/// Finds the favorite matching `id`, if any.
pub fn find_favorite(favorites: Vec<FavoriteFood>, id: FoodId) -> Option<FavoriteFood> {
    favorites.into_iter().find(|favorite| favorite.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(id: u64) -> FavoriteFood {
        FavoriteFood {
            id: FoodId::new(id),
            name: format!("Food {}", id),
            description: String::new(),
            price: 10.0,
            image_url: String::new(),
            formatted_price: None,
            category: 1,
        }
    }

    #[test]
    fn should_find_favorite_with_matching_id() {
        let found = find_favorite(
            vec![favorite(1), favorite(2), favorite(3)],
            FoodId::new(2),
        );

        assert_eq!(found, Some(favorite(2)));
    }

    #[test]
    fn should_return_none_when_food_not_in_favorites() {
        assert!(find_favorite(vec![favorite(1)], FoodId::new(9)).is_none());
        assert!(find_favorite(vec![], FoodId::new(1)).is_none());
    }

    #[test]
    fn should_read_favorite_without_formatted_price() {
        let json = r#"{"id":4,"name":"Veggie","description":"Salad","price":21.5,"image_url":"x.png","category":2}"#;
        let favorite: FavoriteFood = serde_json::from_str(json).unwrap();

        assert_eq!(favorite.id, FoodId::new(4));
        assert!(favorite.formatted_price.is_none());
    }
}
