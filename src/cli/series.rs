use clap::Parser;
use sunbeam::prelude::*;

use crate::{cli::ApiArgs, tables::build_series_table};

#[derive(Parser)]
pub struct SeriesArgs {}

impl SeriesArgs {
    pub async fn run(self, api: &ApiArgs) -> Result {
        let estimate = api.fetch().await?;
        println!("{}", build_series_table("Power", estimate.watts()));
        println!("{}", build_series_table("Period energy", estimate.wh_period()));
        println!("{}", build_series_table("Hourly energy", estimate.wh_hours()));
        Ok(())
    }
}
