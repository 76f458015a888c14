//! Map command - drive a marker board session from the terminal
//!
//! One invocation is one board session: initialize at the given device
//! position, replay any scripted clicks, optionally move the device and
//! refresh, optionally clear, then print the final marker set. Clicks go
//! through the headless map so they take the same path a real map SDK
//! event would.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use photomap_core::domain::newtypes::GeoPosition;
use photomap_core::usecases::MarkerBoard;
use photomap_device::{ConsoleNotifier, HeadlessMapSurface, SettableGeolocation};

use crate::CliContext;

#[derive(Debug, clap::Subcommand)]
pub enum MapCommand {
    /// Run a marker board session at a device position
    Locate(LocateCommand),
}

impl MapCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        match self {
            MapCommand::Locate(cmd) => cmd.execute(ctx).await,
        }
    }
}

#[derive(Debug, Args)]
pub struct LocateCommand {
    /// Device latitude
    #[arg(long)]
    pub lat: f64,

    /// Device longitude
    #[arg(long)]
    pub lng: f64,

    /// Map click to replay, as "LAT,LNG" (repeatable)
    #[arg(long = "click", value_name = "LAT,LNG")]
    pub clicks: Vec<String>,

    /// Move the device here and refresh the location marker, as "LAT,LNG"
    #[arg(long = "refresh-to", value_name = "LAT,LNG")]
    pub refresh_to: Option<String>,

    /// Clear all markers at the end of the session
    #[arg(long)]
    pub clear: bool,
}

impl LocateCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        let position = GeoPosition::new(self.lat, self.lng)
            .context("Invalid device position")?;
        let clicks = self
            .clicks
            .iter()
            .map(|s| parse_coords(s))
            .collect::<Result<Vec<_>>>()?;
        let refresh_to = self
            .refresh_to
            .as_deref()
            .map(parse_coords)
            .transpose()?;

        let geolocation = Arc::new(SettableGeolocation::at(position));
        let surface = Arc::new(HeadlessMapSurface::new());
        let notifier = Arc::new(ConsoleNotifier::new());

        let board = MarkerBoard::new(
            Arc::clone(&geolocation) as _,
            Arc::clone(&surface) as _,
            notifier,
            ctx.config.map.zoom,
        );

        board.initialize().await;
        let map = surface
            .created_map()
            .ok_or_else(|| anyhow!("Map initialization failed"))?;

        for clicked in clicks {
            map.simulate_click(clicked);
        }

        if let Some(destination) = refresh_to {
            geolocation.set_position(destination);
            board.refresh_location().await;
        }

        if self.clear {
            board.clear_all();
        }

        let markers = board.markers();
        let details: Vec<String> = markers
            .iter()
            .map(|m| format!("{} at {}", m.title(), m.position()))
            .collect();
        let snapshot: Vec<_> = markers
            .iter()
            .map(|m| {
                serde_json::json!({
                    "title": m.title(),
                    "latitude": m.position().latitude(),
                    "longitude": m.position().longitude(),
                })
            })
            .collect();

        ctx.format.emit(
            &format!("{} marker(s) on the board", markers.len()),
            &details,
            &serde_json::Value::Array(snapshot),
        )
    }
}

/// Parses a "LAT,LNG" pair into a validated position
fn parse_coords(raw: &str) -> Result<GeoPosition> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| anyhow!("Expected LAT,LNG, got '{raw}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("Invalid latitude in '{raw}'"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("Invalid longitude in '{raw}'"))?;
    GeoPosition::new(lat, lng).with_context(|| format!("Out-of-range position '{raw}'"))
}
