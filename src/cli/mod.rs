// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the vendex command-line interface.
//!
//! Two subcommands: `search` ranks a catalog against a query (optionally
//! around a point), and `inspect` summarizes a catalog file.

pub mod display;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vendex",
    about = "Rank local vendor listings by relevance, rating and distance",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a catalog against a query and display results
    Search {
        /// Path to a JSON vendor catalog
        catalog: String,

        /// Search query (empty string ranks by rating alone)
        query: String,

        #[command(flatten)]
        geo: GeoArgs,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Ranking config (TOML); defaults apply when omitted
        #[arg(short, long)]
        config: Option<String>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize a catalog file
    Inspect {
        /// Path to a JSON vendor catalog
        catalog: String,
    },
}

/// Reference point for distance ranking.
#[derive(Args, Debug, Clone, Copy)]
pub struct GeoArgs {
    /// Reference latitude in decimal degrees
    #[arg(long, requires = "lng", allow_hyphen_values = true, value_parser = parse_degrees)]
    pub lat: Option<f64>,

    /// Reference longitude in decimal degrees
    #[arg(long, requires = "lat", allow_hyphen_values = true, value_parser = parse_degrees)]
    pub lng: Option<f64>,

    /// Drop vendors farther than this many kilometers
    #[arg(long, requires = "lat", value_parser = parse_radius)]
    pub radius_km: Option<f64>,
}

fn parse_degrees(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{}", e))?;
    if !value.is_finite() {
        return Err(format!("`{}` is not a finite number of degrees", raw));
    }
    Ok(value)
}

fn parse_radius(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{}", e))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("radius must be a finite, non-negative number of km, got `{}`", raw));
    }
    Ok(value)
}

impl GeoArgs {
    pub fn to_context(self) -> Option<vendex::GeoContext> {
        let (lat, lng) = (self.lat?, self.lng?);
        let geo = vendex::GeoContext::new(vendex::Coordinate::new(lat, lng));
        Some(match self.radius_km {
            Some(radius) => geo.with_radius(radius),
            None => geo,
        })
    }
}
