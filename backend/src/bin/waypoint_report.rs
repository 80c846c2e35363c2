//! Report classified roads and the resolved place for a batch of waypoints.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use road_lookup::domain::CoordinatePair;
use road_lookup::domain::ports::{RoadElementKinds, RoadLookupQuery, WaypointOptions};
use road_lookup::settings::ServerSettings;

/// `waypoint-report` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "waypoint-report",
    about = "Classify roads near each waypoint and resolve its address",
    version
)]
struct CliArgs {
    /// Waypoint as `lat,lon`; repeat for multiple waypoints.
    #[arg(
        long = "waypoint",
        value_name = "lat,lon",
        required = true,
        value_parser = parse_waypoint
    )]
    waypoints: Vec<CoordinatePair>,
    /// Query ways only, skipping highway-tagged nodes.
    #[arg(long = "ways-only")]
    ways_only: bool,
    /// Drop roads whose category is `Unknown`.
    #[arg(long = "known-only")]
    known_only: bool,
    /// Overpass endpoint override. Falls back to `ROAD_LOOKUP_OVERPASS_URL`.
    #[arg(long = "overpass-url", value_name = "url")]
    overpass_url: Option<String>,
    /// Nominatim endpoint override. Falls back to `ROAD_LOOKUP_NOMINATIM_URL`.
    #[arg(long = "nominatim-url", value_name = "url")]
    nominatim_url: Option<String>,
}

impl CliArgs {
    fn options(&self) -> WaypointOptions {
        WaypointOptions {
            kinds: if self.ways_only {
                RoadElementKinds::WaysOnly
            } else {
                RoadElementKinds::NodesAndWays
            },
            known_only: self.known_only,
        }
    }

    fn apply_overrides(&self, mut settings: ServerSettings) -> ServerSettings {
        if let Some(url) = &self.overpass_url {
            settings.overpass_url = Some(url.clone());
        }
        if let Some(url) = &self.nominatim_url {
            settings.nominatim_url = Some(url.clone());
        }
        settings
    }
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    // Flags belong to this command; settings come from the environment only.
    let settings = ServerSettings::load_from_iter([OsString::from("waypoint-report")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let service = args
        .apply_overrides(settings)
        .road_lookup_service()
        .map_err(io::Error::other)?;

    let options = args.options();
    let mut stdout = io::stdout().lock();
    let mut failures = 0_usize;
    for point in &args.waypoints {
        match service.report_waypoint(*point, options).await {
            Ok(report) => {
                if report.place.is_none() {
                    warn!(%point, "no place resolved for waypoint");
                }
                let line = serde_json::to_string(&report).map_err(io::Error::other)?;
                writeln!(stdout, "{line}")?;
            }
            Err(err) => {
                failures += 1;
                error!(%point, error = %err, "waypoint lookup failed");
            }
        }
    }

    if failures > 0 {
        return Err(io::Error::other(format!(
            "{failures} of {} waypoints failed",
            args.waypoints.len()
        )));
    }
    Ok(())
}

fn parse_waypoint(raw: &str) -> Result<CoordinatePair, String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| "waypoint must be `lat,lon`".to_owned())?;
    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("failed to parse waypoint latitude: {error}"))?;
    let lon = lon
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("failed to parse waypoint longitude: {error}"))?;
    CoordinatePair::new(lat, lon).map_err(|error| error.to_string())
}
