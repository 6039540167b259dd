//! Generate the static landing page bundle.
//!
//! Writes index.html, page.md, reader.html and page.json to `OUTPUT_DIR`
//! (default `dist`). Fails without writing if the content lint finds issues.
//! Run with: cargo run --bin generate_page

use sadhaka_page::{bundle, GeneratorConfig, SITE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sadhaka_page=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GeneratorConfig::from_env();
    tracing::info!("Generating page into {}", config.output_dir.display());

    let written = bundle::write_bundle(&SITE, &config.render, &config.output_dir)?;
    tracing::info!("Done: {} files written", written.len());

    Ok(())
}
