use chrono::TimeDelta;
use clap::Parser;
use sunbeam::prelude::*;

use crate::{cli::ApiArgs, tables::build_sensors_table};

#[derive(Parser)]
pub struct NowArgs {
    /// Number of upcoming hours to sum the energy over.
    #[clap(long, default_value = "24")]
    hours: u32,
}

impl NowArgs {
    pub async fn run(self, api: &ApiArgs) -> Result {
        let estimate = api.fetch().await?;
        let table = build_sensors_table(
            estimate.power_production_now(),
            estimate.power_production_in(TimeDelta::minutes(15)),
            estimate.power_production_in(TimeDelta::minutes(30)),
            self.hours,
            estimate.energy_between(self.hours),
        );
        println!("{table}");
        Ok(())
    }
}
