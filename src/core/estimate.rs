use std::iter::successors;

use chrono::{
    DateTime,
    DurationRound,
    MappedLocalTime,
    NaiveDateTime,
    Offset,
    TimeDelta,
    TimeZone,
    Utc,
};
use chrono_tz::Tz;
use itertools::Itertools;
use serde::Serialize;
use serde_with::serde_as;

use crate::{
    core::{
        sample::RawSample,
        series::{Point, Series},
    },
    prelude::*,
    quantity::{
        energy::{ExactWattHours, WattHours},
        power::Watts,
    },
};

/// Validity of the last sample, which has no successor to end its period.
pub const DEFAULT_INTERVAL: TimeDelta = TimeDelta::minutes(15);

/// Immutable forecast snapshot built from a single feed payload.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, Serialize)]
pub struct Estimate {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    timezone: Tz,

    /// Instantaneous power at each sample.
    watts: Series<Watts>,

    /// Energy produced from each sample until the next one.
    wh_period: Series<WattHours>,

    /// Energy of the periods starting within each local hour.
    wh_hours: Series<WattHours>,
}

impl Estimate {
    pub fn build(samples: impl IntoIterator<Item = RawSample>, timezone: Tz) -> Self {
        Self::build_with_interval(samples, timezone, DEFAULT_INTERVAL)
    }

    /// Build the estimate from the raw samples.
    ///
    /// Samples without a timestamp are dropped. Should several samples share a timestamp,
    /// the last one in the original order wins.
    ///
    /// Period energies are rounded individually, while hourly energies are accumulated
    /// from the exact period energies and rounded once per hour.
    #[instrument(skip_all, fields(timezone = %timezone))]
    pub fn build_with_interval(
        samples: impl IntoIterator<Item = RawSample>,
        timezone: Tz,
        default_interval: TimeDelta,
    ) -> Self {
        let mut samples = samples
            .into_iter()
            .filter_map(|sample| {
                let timestamp = sample.timestamp?.with_timezone(&timezone);
                Some((timestamp, sample.power.unwrap_or(Watts::ZERO)))
            })
            .collect_vec();
        samples.sort_by_key(|(timestamp, _)| *timestamp);
        let watts = samples
            .into_iter()
            .coalesce(|previous, next| {
                if previous.0 == next.0 { Ok(next) } else { Err((previous, next)) }
            })
            .collect_vec();

        let mut wh_period = Vec::with_capacity(watts.len());
        let mut wh_hours: Vec<Point<ExactWattHours>> = Vec::new();

        for (index, (start, power)) in watts.iter().enumerate() {
            let end = watts.get(index + 1).map_or(*start + default_interval, |(next, _)| *next);
            let duration = end - *start;
            if duration <= TimeDelta::zero() {
                warn!(%start, %end, "skipped a non-positive period");
                continue;
            }

            let energy = *power * duration;
            wh_period.push((*start, energy.round()));

            let Some(hour) = start_of_hour(start) else {
                warn!(%start, "could not truncate to the hour");
                continue;
            };
            match wh_hours.last_mut() {
                Some((last_hour, total)) if *last_hour == hour => *total += energy,
                _ => wh_hours.push((hour, energy)),
            }
        }

        debug!(n_samples = watts.len(), n_hours = wh_hours.len(), "built");
        Self {
            timezone,
            watts: Series::from_sorted(watts),
            wh_period: Series::from_sorted(wh_period),
            wh_hours: Series::from_sorted(
                wh_hours.into_iter().map(|(hour, energy)| (hour, energy.round())).collect(),
            ),
        }
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    pub const fn watts(&self) -> &Series<Watts> {
        &self.watts
    }

    pub const fn wh_period(&self) -> &Series<WattHours> {
        &self.wh_period
    }

    pub const fn wh_hours(&self) -> &Series<WattHours> {
        &self.wh_hours
    }

    /// Current time in the estimate's timezone.
    #[must_use]
    pub fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }

    /// Estimated power at the specified time, `None` if there are no samples.
    #[must_use]
    pub fn power_at<Z: TimeZone>(&self, at: &DateTime<Z>) -> Option<Watts> {
        self.watts.value_at(&at.with_timezone(&self.timezone)).copied()
    }

    /// Estimated power at the wall-clock time in the estimate's timezone.
    #[must_use]
    pub fn power_at_naive(&self, at: NaiveDateTime) -> Option<Watts> {
        self.power_at(&self.localize(at))
    }

    #[must_use]
    pub fn power_production_now(&self) -> Watts {
        self.power_production_in(TimeDelta::zero())
    }

    /// Estimated power at the specified offset from now.
    #[must_use]
    pub fn power_production_in(&self, offset: TimeDelta) -> Watts {
        self.now()
            .checked_add_signed(offset)
            .and_then(|at| self.power_at(&at))
            .unwrap_or(Watts::ZERO)
    }

    /// Sample the estimated power `n` times with the `step` starting at `since`.
    ///
    /// The forecast stops early when a step runs out of the representable time range.
    pub fn power_forecast(
        &self,
        since: DateTime<Tz>,
        step: TimeDelta,
        n: usize,
    ) -> Vec<Point<Watts>> {
        successors(Some(since), |timestamp| timestamp.checked_add_signed(step))
            .take(n)
            .map(|timestamp| (timestamp, self.power_at(&timestamp).unwrap_or(Watts::ZERO)))
            .collect()
    }

    /// Estimated energy production in the upcoming `hours_ahead` hours.
    #[must_use]
    pub fn energy_between(&self, hours_ahead: u32) -> WattHours {
        self.energy_between_at(&self.now(), hours_ahead)
    }

    /// Sum the hourly energies after the current hour.
    ///
    /// The window starts at `HH:59:59.000999` of the hour `now` falls in (exclusive)
    /// and lasts `hours_ahead` hours (inclusive). Hence, the current hour is never counted,
    /// and zero hours ahead always yields zero.
    #[must_use]
    pub fn energy_between_at<Z: TimeZone>(&self, now: &DateTime<Z>, hours_ahead: u32) -> WattHours {
        let now = now.with_timezone(&self.timezone);
        let start = start_of_hour(&now).map_or(now, |hour| {
            hour + TimeDelta::minutes(59) + TimeDelta::seconds(59) + TimeDelta::microseconds(999)
        });
        // Beyond the representable range, the window covers the rest of the series:
        let end = start
            .checked_add_signed(TimeDelta::hours(i64::from(hours_ahead)))
            .or_else(|| self.wh_hours.last().map(|(last, _)| *last))
            .unwrap_or(start);
        self.wh_hours.sum_between(&start, &end)
    }

    fn localize(&self, at: NaiveDateTime) -> DateTime<Tz> {
        match self.timezone.from_local_datetime(&at) {
            MappedLocalTime::Single(at) | MappedLocalTime::Ambiguous(at, _) => at,
            MappedLocalTime::None => {
                // Skipped by a DST transition:
                let offset = self.timezone.offset_from_utc_datetime(&at).fix();
                self.timezone.from_utc_datetime(
                    &(at - TimeDelta::seconds(i64::from(offset.local_minus_utc()))),
                )
            }
        }
    }
}

/// Truncate to the top of the local hour.
fn start_of_hour(timestamp: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    timestamp.duration_trunc(TimeDelta::hours(1)).ok()
}
