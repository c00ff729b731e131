use chrono::TimeDelta;
use clap::Parser;
use sunbeam::prelude::*;

use crate::{cli::ApiArgs, tables::build_forecast_table};

#[derive(Parser)]
pub struct ForecastArgs {
    /// Number of steps, 24 hours by default.
    #[clap(long, default_value = "96")]
    n_steps: usize,

    #[clap(long, default_value = "15min")]
    step: humantime::Duration,
}

impl ForecastArgs {
    fn step(&self) -> Result<TimeDelta> {
        TimeDelta::from_std(self.step.into())
            .with_context(|| format!("the step `{}` is out of range", self.step))
    }

    pub async fn run(self, api: &ApiArgs) -> Result {
        let step = self.step()?;
        let estimate = api.fetch().await?;
        let forecast = estimate.power_forecast(estimate.now(), step, self.n_steps);
        println!("{}", build_forecast_table(&forecast));
        Ok(())
    }
}
