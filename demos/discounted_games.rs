use steam_catalog::CatalogManager;
use owo_colors::OwoColorize;

fn format_price(cents: Option<u64>) -> String {
    match cents {
        Some(cents) => format!("{}.{:02}", cents / 100, cents % 100),
        None => String::from("?"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    
    let manager = CatalogManager::from_env()?;
    
    for game in manager.discounted_games().await? {
        println!(
            "{} -{}% {} -> {}",
            game.name.bold(),
            game.discount_percent.unwrap_or(0),
            format_price(game.original_price).strikethrough(),
            format_price(game.final_price).green(),
        );
    }
    
    Ok(())
}
