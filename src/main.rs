use lag::{Config, LagError};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), LagError> {
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    // Only fails if something else already installed a subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);

    // optional config path from command line
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).await?,
        None => Config::default(),
    };

    let lag = config.lag()?;
    info!("Sampling {} lags of {}", config.samples, lag);

    for sample in 0..config.samples {
        let slept = lag.sleep().await;
        info!("Sample {} slept for {:?}", sample, slept);
    }

    Ok(())
}
