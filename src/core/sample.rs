use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;
use serde_with::serde_as;

use crate::{prelude::*, quantity::power::Watts};

/// Forecast feed entry.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
pub struct RawSample {
    /// Missing timestamp makes the sample unusable, but not malformed.
    #[serde(rename = "t", default)]
    pub timestamp: Option<DateTime<FixedOffset>>,

    /// Missing power is treated as zero.
    #[serde(rename = "pW", default, deserialize_with = "deserialize_power")]
    pub power: Option<Watts>,
}

/// Forecast feed entries, malformed ones are skipped.
#[must_use]
#[serde_as]
#[derive(Debug, Default, Deserialize, derive_more::IntoIterator)]
pub struct RawSamples(#[serde_as(as = "serde_with::VecSkipError<_>")] pub Vec<RawSample>);

/// Accept anything that reads as a number, truncating towards zero.
fn deserialize_power<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Watts>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let watts = match &value {
        Value::Null => return Ok(None),
        Value::Bool(flag) => return Ok(Some(Watts::from(i64::from(*flag)))),
        Value::Number(number) => number.as_f64().and_then(truncate),
        Value::String(string) if string.trim().is_empty() => return Ok(None),
        Value::String(string) => string.trim().parse::<f64>().ok().and_then(truncate),
        Value::Array(_) | Value::Object(_) => None,
    };
    watts.map(Some).ok_or_else(|| de::Error::custom(format!("`{value}` is not a power value")))
}

/// Anything beyond a terawatt is not a rooftop forecast and would overflow the energy sums.
const MAX_ABS_POWER: f64 = 1e12;

#[expect(clippy::cast_possible_truncation)]
fn truncate(watts: f64) -> Option<Watts> {
    (watts.abs() <= MAX_ABS_POWER).then(|| Watts::from(watts.trunc() as i64))
}
