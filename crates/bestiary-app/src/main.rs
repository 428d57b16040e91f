//! # Bestiary - Creature ranking from a remote creature list
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Creates: HttpCreatureSource (fixed endpoint)            │
//! │    ├── Creates: SummarizeBestiary (use case)                   │
//! │    ├── Creates: ConsoleSink (presentation)                     │
//! │    └── Runs: One summary run                                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod sink;

use bestiary_adapter::gateway::http::{DEFAULT_CREATURE_URL, DEFAULT_TIMEOUT};
use bestiary_adapter::HttpCreatureSource;
use bestiary_usecase::SummarizeBestiary;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sink::ConsoleSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for the summary
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // ========================================
    // Dependency Injection - Wire the source
    // ========================================

    let source = HttpCreatureSource::new(DEFAULT_CREATURE_URL, DEFAULT_TIMEOUT)?;
    info!(url = %source.url(), "Loading creatures from API");

    let mut sink = ConsoleSink::stdout();
    let outcome = SummarizeBestiary::new(source).run(&mut sink).await;

    info!(?outcome, "Bestiary run finished");
    Ok(())
}
