use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    venture_cli::run_cli().await
}
