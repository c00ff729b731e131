pub mod provider;
pub mod solar_manager;

pub use self::{
    provider::ForecastProvider,
    solar_manager::{Api as SolarManager, Credentials, FetchError},
};
