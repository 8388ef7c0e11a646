use anyhow::{Context, Result};
use best_seats::{
    Config, FailureTier, RawSeatMap, SeatError, SeatMap, Selection, Zone, read_snapshot,
    select_best_seats,
};
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Pick the best block of free seats from a seating chart snapshot", long_about = None)]
struct Args {
    /// Seating chart snapshot (.json or .csv)
    #[arg(short = 's', long = "snapshot")]
    snapshot: PathBuf,

    /// Number of tickets
    #[arg(short = 't', long = "tickets")]
    tickets: usize,

    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "config/default.toml")]
    config: PathBuf,

    /// Preferred zone, e.g. back-center (overrides the config file)
    #[arg(short = 'z', long = "zone")]
    zone: Option<Zone>,

    /// Print the selection as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    let mut config = if args.config.exists() {
        Config::load_from_file(&args.config)
            .with_context(|| format!("Loading {}", args.config.display()))?
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            args.config.display()
        );
        Config::default()
    };
    if args.zone.is_some() {
        config.zone = args.zone;
    }

    let raw = read_snapshot(&args.snapshot)
        .with_context(|| format!("Reading snapshot {}", args.snapshot.display()))?;

    match select(&raw, args.tickets, &config) {
        Ok(selection) => {
            print_selection(&selection, args.json)?;
            Ok(())
        }
        Err(e) => {
            error!("Error: {e}");
            print_hint(&e);
            std::process::exit(1);
        }
    }
}

/// Loads the venue, then selects seats
fn select(raw: &RawSeatMap, tickets: usize, config: &Config) -> best_seats::Result<Selection> {
    let map = SeatMap::load(raw)?;
    info!(
        "Venue: {} rows, {} free seats",
        map.rows.len(),
        map.free_seat_count()
    );
    select_best_seats(&map, tickets, config)
}

fn print_selection(selection: &Selection, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(selection)?);
        return Ok(());
    }

    let seats: Vec<String> = selection.seats.iter().map(|s| s.to_string()).collect();
    info!("Row {}: seats {}", selection.row, seats.join(", "));
    if selection.steps > 0 {
        info!("{} steps away from the ideal position", selection.steps);
    }
    Ok(())
}

fn print_hint(e: &SeatError) {
    match e.tier() {
        FailureTier::Structural => {
            error!("Hint: No row can seat the whole party. Try fewer tickets.");
        }
        FailureTier::Reachability => {
            error!("Hint: Raise row_steps or choose another zone.");
        }
        FailureTier::Exhausted => {
            error!("Hint: No good seats left, do not book this screening.");
        }
        FailureTier::Input => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_venue_is_structural() {
        let err = select(&RawSeatMap::default(), 2, &Config::default()).unwrap_err();
        assert!(matches!(err, SeatError::EmptyVenue));
        assert_eq!(err.tier(), FailureTier::Structural);
    }
}
