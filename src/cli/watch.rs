use chrono::TimeDelta;
use clap::Parser;
use sunbeam::{
    coordinator::{Coordinator, DEFAULT_REFRESH_INTERVAL},
    core::Estimate,
    prelude::*,
};
use tokio::{
    select,
    signal,
    time::{MissedTickBehavior, interval},
};

use crate::cli::ApiArgs;

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(long, env = "REFRESH_INTERVAL", default_value = "30min")]
    refresh_interval: humantime::Duration,

    /// How often to re-evaluate the sensors against the last estimate, without refetching.
    #[clap(long, env = "STATE_INTERVAL", default_value = "1min")]
    state_interval: humantime::Duration,
}

impl WatchArgs {
    /// Zero periods would make the intervals panic.
    fn validate(&self) -> Result {
        ensure!(!self.refresh_interval.is_zero(), "the refresh interval must be positive");
        ensure!(!self.state_interval.is_zero(), "the state interval must be positive");
        Ok(())
    }

    pub async fn run(self, api: &ApiArgs) -> Result {
        self.validate()?;
        if *self.refresh_interval != DEFAULT_REFRESH_INTERVAL {
            info!(refresh_interval = %self.refresh_interval, "using a custom refresh interval");
        }
        let coordinator = Coordinator::new(api.build());

        let mut refresh_interval = interval(self.refresh_interval.into());
        refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut state_interval = interval(self.state_interval.into());
        state_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            select! {
                _ = refresh_interval.tick() => {
                    // Failure is logged by the coordinator, and the last estimate stays:
                    if let Ok(estimate) = coordinator.refresh().await {
                        log_state(&estimate);
                    }
                }
                _ = state_interval.tick() => {
                    match coordinator.current() {
                        Some(estimate) => log_state(&estimate),
                        None => debug!("no estimate yet"),
                    }
                }
                result = signal::ctrl_c() => {
                    result.context("failed to listen for Ctrl+C")?;
                    info!("stopping…");
                    break Ok(());
                }
            }
        }
    }
}

fn log_state(estimate: &Estimate) {
    info!(
        power_now = %estimate.power_production_now(),
        power_in_15_minutes = %estimate.power_production_in(TimeDelta::minutes(15)),
        power_in_30_minutes = %estimate.power_production_in(TimeDelta::minutes(30)),
        energy_in_24_hours = %estimate.energy_between(24),
        "sensors",
    );
}
