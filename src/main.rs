use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tokio::runtime::Runtime;

use stock_heatmap::config::HEATMAP;
use stock_heatmap::{Cli, HeatmapEngine, MockPriceSource, report};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Build the feed and engine
    let source = match args.seed {
        Some(seed) => MockPriceSource::seeded(seed),
        None => MockPriceSource::new(),
    }
    .with_latency(Duration::from_millis(args.latency_ms));

    let mut engine = HeatmapEngine::new(Arc::new(source));
    let applied = engine.set_minutes(args.minutes);
    if applied != args.minutes {
        log::warn!("Requested {} minutes, using {}", args.minutes, applied);
    }
    if let Some(ticker) = &args.ticker {
        engine.select_ticker(ticker)?;
    }

    // D. Fetch
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let snapshot = rt.block_on(engine.refresh());
    let ticker_view = match &args.ticker {
        Some(_) => Some(rt.block_on(engine.load_selected())?),
        None => None,
    };

    // E. Present
    if args.json {
        println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
        return Ok(());
    }

    println!("Stock Correlation Heatmap ({} minutes)\n", snapshot.minutes);
    for warning in &snapshot.warnings {
        println!("Error: {}", warning);
    }
    match &snapshot.matrix {
        Some(matrix) => println!("{}", report::render_matrix(matrix, engine.registry())),
        None => println!("Correlation matrix unavailable for this cycle."),
    }
    println!("{}", report::render_statistics(&snapshot.symbols, &snapshot.statistics));
    let legend = report::render_legend(HEATMAP.legend_steps)
        .map_err(|e| anyhow!("Failed to build legend gradient: {:?}", e))?;
    println!("{}", legend);

    if let Some(view) = ticker_view {
        println!("\n{}", report::render_ticker(&view, engine.registry()));
    }

    Ok(())
}
