use anyhow::Result;
use clap::Parser;
use coupon_reduce::{
    cli::Args,
    models::Catalog,
    services::ReduceReport,
    utils::{init_logging, Config},
};

fn main() -> Result<()> {
    Args::parse();

    let config = Config::from_env();
    init_logging(&config);

    if let Some(rejected) = &config.rejected_log_level {
        tracing::warn!(
            "Ignoring invalid LOG_LEVEL '{}', using '{}'",
            rejected,
            config.log_level
        );
    }
    tracing::info!("coupon-reduce starting ({} environment)", config.environment);

    let catalog = Catalog::seed().map_err(|e| {
        tracing::error!("Failed to build seed catalog: {}", e);
        e
    })?;

    let report = ReduceReport::compute(&catalog);
    for line in report.lines() {
        println!("{}", line);
    }

    tracing::info!("coupon-reduce finished");
    Ok(())
}
