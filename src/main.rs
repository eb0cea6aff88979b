use anyhow::Result;
use victoria::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
