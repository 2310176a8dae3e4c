use anyhow::Result;
use ticklist::commands::Cli;
use ticklist::libs::logging;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    Cli::menu().await
}
