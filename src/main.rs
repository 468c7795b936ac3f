#[tokio::main]
async fn main() -> anyhow::Result<()> {
    jums::app::run().await
}
