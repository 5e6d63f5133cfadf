use anyhow::Result;
use wedding_site::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
