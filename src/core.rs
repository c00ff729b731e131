mod estimate;
mod sample;
mod series;

pub use self::{
    estimate::{DEFAULT_INTERVAL, Estimate},
    sample::{RawSample, RawSamples},
    series::{Point, Series},
};
