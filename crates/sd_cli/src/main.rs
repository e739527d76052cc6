use clap::Parser;
use sd_core::{ArticleRegistry, ArticleStore, Error, Result};
use sd_scraper::{Fetch, Fetcher, RefreshScheduler, Refresher};
use sd_web::{create_app, AppState};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};
use url::Url;

const INDEX_URL: &str = "https://www.ghanaweb.com/GhanaHomePage/SportsArchive/";
const LISTEN_PORT: u16 = 5003;
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Some(num) = current_number.parse::<u64>().ok() {
                match c {
                    's' => total_seconds += num,
                    'm' => total_seconds += num * 60,
                    'h' => total_seconds += num * 3600,
                    'd' => total_seconds += num * 86400,
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                }
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // If we have a number but no unit, assume seconds
        if !current_number.is_empty() {
            if let Ok(num) = current_number.parse::<u64>() {
                total_seconds += num;
                has_unit = true;
            } else {
                return Err("Invalid number in duration".to_string());
            }
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Index page to scrape
    #[arg(long, default_value = INDEX_URL)]
    index_url: String,
    /// Time between refresh cycles (e.g. 30m, 1h15m30s)
    #[arg(long, default_value = "30m")]
    interval: HumanDuration,
    /// Port to listen on
    #[arg(long, default_value_t = LISTEN_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let index_url = Url::parse(&cli.index_url)
        .map_err(|e| Error::Scraping(format!("invalid index URL {}: {}", cli.index_url, e)))?;

    let store = Arc::new(ArticleStore::new());
    let registry = Arc::new(ArticleRegistry::new());
    let fetcher: Arc<dyn Fetch> = Arc::new(Fetcher::new(FETCH_TIMEOUT)?);

    let refresher = Refresher::new(
        fetcher.clone(),
        store.clone(),
        registry.clone(),
        index_url.clone(),
    );
    let scheduler = RefreshScheduler::start(refresher, cli.interval.0);
    info!("🔄 Refreshing {} every {:?}", index_url, cli.interval.0);

    let app = create_app(AppState {
        store,
        registry,
        fetcher,
    })
    .await;

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🏟️ Serving sports news on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown().await;
    info!("Scheduler stopped, exiting");

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
