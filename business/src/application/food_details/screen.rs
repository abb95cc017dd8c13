use std::sync::Arc;

use crate::domain::food_details::errors::FoodDetailsError;
use crate::domain::food_details::services::{RouteParams, ValueFormatter};
use crate::domain::food_details::state::FoodDetailsState;
use crate::domain::food_details::use_cases::finish_order::{
    FinishOrderParams, FinishOrderUseCase,
};
use crate::domain::food_details::use_cases::load::{
    LoadFoodDetailsParams, LoadFoodDetailsUseCase,
};
use crate::domain::food_details::use_cases::toggle_favorite::{
    ToggleFavoriteParams, ToggleFavoriteUseCase,
};
use crate::domain::food_details::view::{FavoriteIcon, FoodDetailsView};
use crate::domain::logger::Logger;
use crate::domain::order::model::NewOrder;
use crate::domain::shared::value_objects::ExtraId;

/// Controller of the food details screen.
///
/// Holds the screen state and turns user events into state transitions or
/// backend calls. State only changes once a backend call has succeeded; a
/// failed call leaves it as it was.
pub struct FoodDetailsScreen {
    load_use_case: Arc<dyn LoadFoodDetailsUseCase>,
    toggle_favorite_use_case: Arc<dyn ToggleFavoriteUseCase>,
    finish_order_use_case: Arc<dyn FinishOrderUseCase>,
    formatter: Arc<dyn ValueFormatter>,
    logger: Arc<dyn Logger>,
    state: FoodDetailsState,
}

impl FoodDetailsScreen {
    pub fn new(
        load_use_case: Arc<dyn LoadFoodDetailsUseCase>,
        toggle_favorite_use_case: Arc<dyn ToggleFavoriteUseCase>,
        finish_order_use_case: Arc<dyn FinishOrderUseCase>,
        formatter: Arc<dyn ValueFormatter>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            load_use_case,
            toggle_favorite_use_case,
            finish_order_use_case,
            formatter,
            logger,
            state: FoodDetailsState::default(),
        }
    }

    /// Loads the food named by `route`. Opening the food already on screen
    /// does nothing.
    pub async fn open(&mut self, route: RouteParams) -> Result<(), FoodDetailsError> {
        if self.state.food_id() == Some(route.id) {
            self.logger
                .debug(&format!("Food {} already on screen", route.id));
            return Ok(());
        }

        let loaded = self
            .load_use_case
            .execute(LoadFoodDetailsParams { id: route.id })
            .await?;

        self.state = FoodDetailsState::loaded(loaded.food, loaded.extras, loaded.favorite);
        Ok(())
    }

    pub fn state(&self) -> &FoodDetailsState {
        &self.state
    }

    pub fn has_extra(&self, id: ExtraId) -> bool {
        self.state.has_extra(id)
    }

    /// # Panics
    ///
    /// Panics if `id` is not one of the extras on screen.
    pub fn increment_extra(&mut self, id: ExtraId) {
        self.state = std::mem::take(&mut self.state).with_extra_delta(id, 1);
    }

    /// Does nothing when the extra is already at zero.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not one of the extras on screen.
    pub fn decrement_extra(&mut self, id: ExtraId) {
        self.state = std::mem::take(&mut self.state).with_extra_delta(id, -1);
    }

    pub fn increment_food(&mut self) {
        self.state = std::mem::take(&mut self.state).with_food_delta(1);
    }

    /// Does nothing when the quantity is already one.
    pub fn decrement_food(&mut self) {
        self.state = std::mem::take(&mut self.state).with_food_delta(-1);
    }

    /// Adds or removes the favorite, flipping the flag once the backend
    /// confirms.
    pub async fn toggle_favorite(&mut self) -> Result<(), FoodDetailsError> {
        let food = self.state.food.clone().ok_or(FoodDetailsError::NotLoaded)?;

        let toggle = self
            .toggle_favorite_use_case
            .execute(ToggleFavoriteParams {
                food,
                current: self.state.favorite.clone(),
            })
            .await?;

        self.state = std::mem::take(&mut self.state).with_favorite(toggle.into_favorite());
        Ok(())
    }

    /// Submits the current cart; navigation is reset by the use case.
    pub async fn finish_order(&mut self) -> Result<NewOrder, FoodDetailsError> {
        let food = self.state.food.clone().ok_or(FoodDetailsError::NotLoaded)?;

        self.finish_order_use_case
            .execute(FinishOrderParams {
                food,
                extras: self.state.extras.clone(),
                food_quantity: self.state.food_quantity,
            })
            .await
    }

    pub fn is_favorite(&self) -> bool {
        self.state.is_favorite()
    }

    pub fn favorite_icon(&self) -> FavoriteIcon {
        self.state.favorite_icon()
    }

    pub fn order_total(&self) -> f64 {
        self.state.order_total()
    }

    pub fn formatted_total(&self) -> String {
        self.formatter.format_value(self.order_total())
    }

    pub fn view(&self) -> Option<FoodDetailsView> {
        FoodDetailsView::from_state(&self.state, self.formatter.as_ref())
    }
}
