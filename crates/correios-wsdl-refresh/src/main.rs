//! Correios WSDL refresher binary.

use anyhow::Context;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use correios_wsdl_refresh::{Catalog, HttpFetcher, Refresher, Settings, write_report};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "correios_wsdl_refresh=debug,info";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Settings decide where logs go, so they are resolved before tracing starts
    let settings = Settings::resolve().context("failed to resolve settings")?;

    let writer = if settings.report().logs_to_stderr() {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    let catalog = Catalog::correios().context("invalid built-in catalog")?;

    tracing::info!(
        "Starting Correios WSDL refresh v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Target directory: {}", settings.target_dir().display());
    tracing::info!("Request timeout: {:?}", settings.timeout());

    let fetcher = HttpFetcher::new(settings.timeout())?;
    let refresher = Refresher::from_settings(fetcher, &settings, catalog);

    let report = refresher
        .refresh_all()
        .await
        .context("refresh aborted")?;

    for failure in report.fetch_failures().chain(report.write_failures()) {
        tracing::debug!("Not refreshed: {} ({:?})", failure.filename(), failure.status());
    }

    write_report(&report, settings.report(), std::io::stdout().lock())
        .context("failed to write report")?;

    Ok(())
}
