use clap::Parser;
use sunbeam::{prelude::*, report::SolarForecast};

use crate::cli::ApiArgs;

#[derive(Parser)]
pub struct EnergyArgs {}

impl EnergyArgs {
    pub async fn run(self, api: &ApiArgs) -> Result {
        let estimate = api.fetch().await?;
        let forecast = SolarForecast::from_estimate(Some(&estimate));
        println!("{}", serde_json::to_string_pretty(&forecast)?);
        Ok(())
    }
}
