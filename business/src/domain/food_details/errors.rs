#[derive(Debug, thiserror::Error)]
pub enum FoodDetailsError {
    #[error("food_details.food_not_found")]
    FoodNotFound,
    #[error("food_details.not_loaded")]
    NotLoaded,
    #[error("repository.request_failed")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
