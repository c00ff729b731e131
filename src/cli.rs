mod api;
mod diagnostics;
mod energy;
mod forecast;
mod now;
mod series;
mod watch;

use clap::{Parser, Subcommand};

pub use self::{
    api::ApiArgs,
    diagnostics::DiagnosticsArgs,
    energy::EnergyArgs,
    forecast::ForecastArgs,
    now::NowArgs,
    series::SeriesArgs,
    watch::WatchArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the forecast and print the current sensor values.
    Now(NowArgs),

    /// Fetch the forecast and print the power and energy series.
    Series(SeriesArgs),

    /// Fetch the forecast and print the upcoming power in 15-minute steps.
    Forecast(ForecastArgs),

    /// Fetch the forecast and dump the redacted diagnostics.
    Diagnostics(DiagnosticsArgs),

    /// Fetch the forecast and dump the hourly energy for the energy dashboard.
    Energy(EnergyArgs),

    /// Periodically refresh the forecast and log the sensor values.
    Watch(WatchArgs),
}

impl Command {
    pub async fn run(self, api: ApiArgs) -> sunbeam::prelude::Result {
        match self {
            Self::Now(args) => args.run(&api).await,
            Self::Series(args) => args.run(&api).await,
            Self::Forecast(args) => args.run(&api).await,
            Self::Diagnostics(args) => args.run(&api).await,
            Self::Energy(args) => args.run(&api).await,
            Self::Watch(args) => args.run(&api).await,
        }
    }
}
