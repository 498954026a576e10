use anyhow::{Context, Result};
use northgate::{Config, SiteOptions};
use tracing::info;

fn configure_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    configure_logging();
    config.validate().context("Invalid configuration")?;

    let options = SiteOptions {
        output: config.output.clone(),
        base_path: config.base_path.clone(),
        year: config.copyright_year(),
    };

    let report = northgate::generate_site(&options).context("Failed to generate site")?;

    info!(
        pages = report.pages.len(),
        assets = %report.assets_dir.display(),
        "Generated site in {}",
        options.output.display()
    );

    Ok(())
}
