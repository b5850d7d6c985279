//! gowhere — pick a random place to go in South Korea.
//!
//! Samples a coordinate inside the chosen region (or anywhere, for 전국),
//! resolves it to district and neighbourhood names, saves it to history, and
//! prints the search hand-off plus an optional straight-line travel estimate.
//!
//! ```text
//! gowhere regions
//! gowhere generate 서울 --from 37.5665,126.9780
//! gowhere history list
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gw_catalog::{RegionCatalog, RegionCategory};
use gw_core::{GeoRng, GwError, LocationId};
use gw_generator::{LocationGenerator, LocationRecord};
use gw_history::{BlobHistory, HistoryStore};
use gw_travel::{GreatCircleDirections, SearchHandoff, TravelEstimate};

use cli::{Cli, Command, HistoryCommand};

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = cli.generator_config();
    config.validate()?;

    let catalog = RegionCatalog::korea();

    match &cli.command {
        Command::Regions => print_regions(&catalog),

        Command::Generate { region, count, from, speed } => {
            let region = match region {
                Some(name) => catalog
                    .by_name(name)
                    .ok_or_else(|| GwError::UnknownRegion(name.clone()))?,
                None => catalog.nationwide(),
            };
            let generator = LocationGenerator::with_config(&catalog, &config)?;
            let mut rng = GeoRng::from_seed_opt(config.seed);
            let mut history = open_history(&cli)?;
            let directions = GreatCircleDirections::new(*speed);

            info!(region = %region, count, seed = ?config.seed, "generating");
            for _ in 0..*count {
                let record = generator.generate(region, &mut rng);
                print_record(&record);

                let handoff = SearchHandoff::for_record(&record);
                println!("  search: {}", handoff.query);

                if let Some(origin) = from {
                    let estimate = TravelEstimate::request(
                        &directions,
                        *origin,
                        handoff.destination,
                        chrono::Local::now(),
                    )?;
                    println!(
                        "  travel: {} ({})",
                        estimate.formatted_travel_time(),
                        estimate.formatted_arrival()
                    );
                }

                history.save(record)?;
            }
        }

        Command::History { command } => {
            let mut history = open_history(&cli)?;
            match command {
                HistoryCommand::List => {
                    let records = history.fetch_all()?;
                    if records.is_empty() {
                        println!("(no saved locations)");
                    }
                    for record in &records {
                        print_record(record);
                    }
                }
                HistoryCommand::Delete { id } => {
                    let id: LocationId = id.parse().map_err(GwError::from)?;
                    history.delete(id)?;
                    info!(%id, "deleted");
                }
                HistoryCommand::Clear => {
                    history.clear_all()?;
                    info!("history cleared");
                }
            }
        }
    }

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn print_regions(catalog: &RegionCatalog) {
    let nationwide = catalog.nationwide();
    println!("{} (radius {:.0} km)", nationwide.name, nationwide.radius_m / 1_000.0);
    for category in RegionCategory::ALL {
        let names: Vec<&str> = catalog.in_category(category).map(|r| r.name.as_str()).collect();
        println!("{category}: {}", names.join(", "));
    }
}

fn print_record(record: &LocationRecord) {
    println!(
        "{}  {}  {}  [{}]",
        record.generated_at().format("%Y-%m-%d %H:%M"),
        record.location_name(),
        record.coordinate(),
        record.id()
    );
}

#[cfg(not(feature = "sqlite"))]
fn open_history(cli: &Cli) -> Result<Box<dyn HistoryStore>> {
    let store = gw_history::FileBlobStore::new(&cli.data_dir)?;
    Ok(Box::new(BlobHistory::with_limit(store, cli.history_limit)))
}

#[cfg(feature = "sqlite")]
fn open_history(cli: &Cli) -> Result<Box<dyn HistoryStore>> {
    std::fs::create_dir_all(&cli.data_dir)?;
    let store = gw_history::SqliteBlobStore::open(&cli.data_dir.join("gowhere.db"))?;
    Ok(Box::new(BlobHistory::with_limit(store, cli.history_limit)))
}
