//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use gw_core::{GeneratorConfig, GeoPoint};

#[derive(Parser)]
#[command(name = "gowhere")]
#[command(about = "Pick a random place to go in South Korea")]
#[command(version)]
pub struct Cli {
    /// Fixed RNG seed for reproducible picks
    #[arg(long, global = true, env = "GOWHERE_SEED")]
    pub seed: Option<u64>,

    /// Number of history records to keep
    #[arg(long, global = true, env = "GOWHERE_HISTORY",
          default_value_t = GeneratorConfig::DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,

    /// Sample-and-resolve attempts per pick
    #[arg(long, global = true, default_value_t = GeneratorConfig::DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Directory holding the history store
    #[arg(long, global = true, env = "GOWHERE_DATA_DIR", default_value = ".gowhere")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            max_attempts:  self.max_attempts,
            history_limit: self.history_limit,
            seed:          self.seed,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List selectable regions grouped by category
    Regions,

    /// Pick random locations and save them to history
    Generate {
        /// Region name (e.g. 서울); nationwide when omitted
        region: Option<String>,

        /// How many locations to pick
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Starting point as "lat,lon" for a travel-time estimate
        #[arg(long, value_parser = parse_point)]
        from: Option<GeoPoint>,

        /// Average speed for the straight-line estimate, km/h
        #[arg(long, default_value_t = 30.0)]
        speed: f64,
    },

    /// Inspect or edit saved locations
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// Show saved locations, most recent first
    List,
    /// Remove a saved location by id
    Delete {
        id: String,
    },
    /// Remove every saved location
    Clear,
}

/// `"37.5665,126.9780"` → `GeoPoint`.
pub fn parse_point(s: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lon\", got {s:?}"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude: {e}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("bad longitude: {e}"))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(format!("coordinate out of range: {lat},{lon}"));
    }
    Ok(GeoPoint::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lat_lon() {
        let p = parse_point("37.5665, 126.9780").unwrap();
        assert_eq!(p, GeoPoint::new(37.5665, 126.9780));
    }

    #[test]
    fn rejects_malformed_points() {
        assert!(parse_point("37.5").is_err());
        assert!(parse_point("north,east").is_err());
        assert!(parse_point("91.0,0.0").is_err());
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "gowhere", "--seed", "7", "--max-attempts", "5", "generate", "서울",
        ])
        .unwrap();
        let cfg = cli.generator_config();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.max_attempts, 5);
        assert!(matches!(cli.command, Command::Generate { region: Some(ref r), .. } if r == "서울"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
