use activity_timing::{
    config::Config,
    config_source::{ConfigSource, FileConfigSource},
    routes,
    state::LiveState,
};
use tokio::net::TcpListener;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "timing.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // parse config path from command line
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let source = FileConfigSource::new(path);

    let config = match source.load().await? {
        Some(config) => {
            info!("Loaded config from {}", source.path().display());
            config
        }
        None => {
            info!("No config at {}, using defaults", source.path().display());
            Config::default()
        }
    };

    let timings = config.timings()?;
    info!(
        "Timing activities {:?} (fallback: {})",
        timings.activities(),
        timings.has_fallback()
    );

    let router = routes::make_router(LiveState::new(timings));

    let url = config.address();
    let listener = TcpListener::bind(&url).await?;
    info!("Listening on {}", url);
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
