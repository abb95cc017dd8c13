use tokio::io::{AsyncBufReadExt, BufReader};

use business::application::food_details::screen::FoodDetailsScreen;
use business::domain::food_details::services::RouteParams;

use crate::setup::command::{Command, HELP};
use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::navigator::ConsoleNavigator;
use crate::setup::render::render;

/// What the loop does after a command.
#[derive(Debug, PartialEq)]
enum Flow {
    Render,
    Stay,
    Exit,
}

pub struct Session;

impl Session {
    pub async fn run(container: DependencyContainer, route: RouteParams) -> anyhow::Result<()> {
        let DependencyContainer {
            mut screen,
            navigator,
        } = container;

        screen.open(route).await?;
        print_screen(&screen);
        println!("{}", HELP);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            };

            match apply(&mut screen, &navigator, command).await {
                Flow::Render => print_screen(&screen),
                Flow::Stay => {}
                Flow::Exit => break,
            }
        }

        Ok(())
    }
}

async fn apply(
    screen: &mut FoodDetailsScreen,
    navigator: &ConsoleNavigator,
    command: Command,
) -> Flow {
    match command {
        Command::IncrementExtra(id) | Command::DecrementExtra(id) if !screen.has_extra(id) => {
            println!("Unknown extra: {}", id);
            Flow::Stay
        }
        Command::IncrementExtra(id) => {
            screen.increment_extra(id);
            Flow::Render
        }
        Command::DecrementExtra(id) => {
            screen.decrement_extra(id);
            Flow::Render
        }
        Command::IncrementFood => {
            screen.increment_food();
            Flow::Render
        }
        Command::DecrementFood => {
            screen.decrement_food();
            Flow::Render
        }
        Command::ToggleFavorite => match screen.toggle_favorite().await {
            Ok(()) => Flow::Render,
            Err(e) => {
                tracing::error!(error = %e, "Favorite toggle failed");
                println!("Could not update favorite: {}", e);
                Flow::Stay
            }
        },
        Command::FinishOrder => match screen.finish_order().await {
            Ok(order) => {
                println!("Order placed: {} for {}", order.name, screen.formatted_total());
                if let Some(root) = navigator.current_root() {
                    println!("Back to {}", root);
                }
                Flow::Exit
            }
            Err(e) => {
                tracing::error!(error = %e, "Order submission failed");
                println!("Could not place order: {}", e);
                Flow::Stay
            }
        },
        Command::Show => Flow::Render,
        Command::Help => {
            println!("{}", HELP);
            Flow::Stay
        }
        Command::Quit => Flow::Exit,
    }
}

fn print_screen(screen: &FoodDetailsScreen) {
    if let Some(view) = screen.view() {
        match render(&view) {
            Ok(text) => println!("\n{}\n", text),
            Err(e) => tracing::error!(error = %e, "Screen rendering failed"),
        }
    }
}
