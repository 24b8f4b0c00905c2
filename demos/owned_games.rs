use steam_catalog::CatalogManager;
use owo_colors::OwoColorize;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    
    let username = std::env::args()
        .nth(1)
        .ok_or("usage: owned_games <steam username>")?;
    // Reads STEAM_API_KEY and the other settings from the environment.
    let manager = CatalogManager::from_env()?;
    let games = manager.owned_games_for(&username).await?;
    
    println!("{} owns {} games", username.bold(), games.len());
    
    for game in games {
        let hours = game.playtime_forever().unwrap_or(0) / 60;
        
        println!("{} {} ({hours}h)", game.appid.dimmed(), game.name);
    }
    
    Ok(())
}
