//! Pure state transitions of the food details screen.
//!
//! Every function takes the current value and returns the next one; floors are
//! enforced here so callers never have to check them.

use crate::domain::food::model::{Extra, Food};
use crate::domain::shared::value_objects::ExtraId;

/// Lowest quantity the food itself can be ordered in.
pub const FOOD_QUANTITY_FLOOR: u32 = 1;
/// Lowest quantity of any extra.
pub const EXTRA_QUANTITY_FLOOR: u32 = 0;

/// Applies `delta` to `quantity`, leaving it untouched when the step would
/// cross `floor`.
pub fn adjust_quantity(quantity: u32, delta: i32, floor: u32) -> u32 {
    let next = i64::from(quantity) + i64::from(delta);

    if next < i64::from(floor) {
        return quantity;
    }

    u32::try_from(next).unwrap_or(u32::MAX)
}

/// Returns a copy of `extras` where only the extra with `id` has its quantity
/// adjusted by `delta`, floored at zero. Order is preserved.
///
/// # Panics
///
/// Panics if no extra has the given id. Ids handed to this function come from
/// the same collection, so a miss is a programming error.
pub fn adjust_extra(extras: &[Extra], id: ExtraId, delta: i32) -> Vec<Extra> {
    assert!(
        extras.iter().any(|extra| extra.id == id),
        "extra {} is not part of the loaded extras",
        id
    );

    extras
        .iter()
        .map(|extra| {
            if extra.id != id {
                return extra.clone();
            }

            Extra {
                quantity: adjust_quantity(extra.quantity, delta, EXTRA_QUANTITY_FLOOR),
                ..extra.clone()
            }
        })
        .collect()
}

/// `food.price * food_quantity` plus the subtotal of every extra.
pub fn order_total(food: &Food, food_quantity: u32, extras: &[Extra]) -> f64 {
    let food_subtotal = food.price * f64::from(food_quantity);
    let extras_subtotal = extras
        .iter()
        .fold(0.0, |total, extra| total + extra.subtotal());

    food_subtotal + extras_subtotal
}
