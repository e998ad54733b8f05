use orbit_edge::{serve, EdgeConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = EdgeConfig::from_env()?;
    if config.message.is_none() {
        log::info!("[edge] VALUE_FROM_CLOUDFLARE unset, serving default greeting");
    }
    serve(config).await?;
    Ok(())
}
