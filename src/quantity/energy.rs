use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Energy rounded to whole watt-hours, as stored in an estimate.
pub type WattHours = Quantity<i64, 1, 1>;

/// Exact energy, before rounding.
pub type ExactWattHours = Quantity<f64, 1, 1>;

impl ExactWattHours {
    /// Round half to even, the way the forecast feed consumers expect.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn round(self) -> WattHours {
        Quantity(self.0.round_ties_even() as i64)
    }
}

impl Display for WattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Wh", self.0)
    }
}

impl Debug for WattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Wh", self.0)
    }
}

impl Debug for ExactWattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}Wh", self.0)
    }
}
