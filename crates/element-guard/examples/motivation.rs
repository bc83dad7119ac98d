//! Print the accuracy report for the full tag catalog
//!
//! RUST_LOG=debug shows every element as it is created and the summary counts.

use element_guard::{AccuracyReport, TagName};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let report = AccuracyReport::analyze(TagName::ALL)?;
    println!("{}", report);
    Ok(())
}
