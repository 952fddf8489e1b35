use anyhow::Result;

use pulseboard::config::Config;
use pulseboard::render;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    render::run(&cfg).await?;
    Ok(())
}
