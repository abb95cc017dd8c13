use business::domain::shared::value_objects::ExtraId;

/// A user action typed at the prompt, standing in for a tap on the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    IncrementExtra(ExtraId),
    DecrementExtra(ExtraId),
    IncrementFood,
    DecrementFood,
    ToggleFavorite,
    FinishOrder,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  + <extra id>   add one unit of an extra
  - <extra id>   remove one unit of an extra
  more           add one unit of the food
  less           remove one unit of the food
  fav            toggle favorite
  order          confirm the order
  show           render the screen again
  help           show this help
  quit           leave without ordering";

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let argument = parts.next();

        let command = match (name, argument) {
            ("+", Some(id)) => Command::IncrementExtra(id.parse()?),
            ("-", Some(id)) => Command::DecrementExtra(id.parse()?),
            ("+" | "-", None) => return Err(format!("Missing extra id after '{}'", name)),
            ("more", None) => Command::IncrementFood,
            ("less", None) => Command::DecrementFood,
            ("fav", None) => Command::ToggleFavorite,
            ("order", None) => Command::FinishOrder,
            ("show" | "", None) => Command::Show,
            ("help", None) => Command::Help,
            ("quit" | "exit", None) => Command::Quit,
            _ => return Err(format!("Unknown command: {}", s.trim())),
        };

        if parts.next().is_some() {
            return Err(format!("Unexpected arguments in: {}", s.trim()));
        }

        Ok(command)
    }
}
