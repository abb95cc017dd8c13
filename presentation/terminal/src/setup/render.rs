use std::fmt::{self, Write};

use business::domain::food_details::view::{FavoriteIcon, FoodDetailsView};

/// Renders the screen as plain text.
pub fn render(view: &FoodDetailsView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_view(&mut out, view)?;
    Ok(out)
}

fn write_view(out: &mut impl Write, view: &FoodDetailsView) -> fmt::Result {
    let heart = match view.favorite_icon {
        FavoriteIcon::Favorite => "♥",
        FavoriteIcon::FavoriteBorder => "♡",
    };

    writeln!(out, "{} {}", view.title, heart)?;
    writeln!(out, "{}", view.description)?;
    writeln!(out, "{}", view.formatted_price)?;
    writeln!(out, "[{}]", view.image_url)?;
    writeln!(out)?;
    writeln!(out, "Adicionais")?;
    if view.extras.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for extra in &view.extras {
        writeln!(out, "  #{:<3} {:<24} - {} +", extra.id.value(), extra.name, extra.quantity)?;
    }
    writeln!(out)?;
    writeln!(out, "Total do pedido")?;
    write!(
        out,
        "  {:<28} - {} +",
        view.formatted_total, view.food_quantity
    )
}
