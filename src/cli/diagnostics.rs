use clap::Parser;
use sunbeam::{prelude::*, report::Diagnostics};

use crate::cli::ApiArgs;

#[derive(Parser)]
pub struct DiagnosticsArgs {
    #[clap(long, default_value = "Solar Manager")]
    title: String,
}

impl DiagnosticsArgs {
    pub async fn run(self, api: &ApiArgs) -> Result {
        // The dump is still useful when the fetch fails:
        let estimate = api
            .fetch()
            .await
            .inspect_err(|error| warn!("failed to fetch the forecast: {error:#}"))
            .ok();
        let diagnostics = Diagnostics::builder()
            .title(self.title)
            .config(api.config())
            .maybe_estimate(estimate.as_ref())
            .build();
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        Ok(())
    }
}
