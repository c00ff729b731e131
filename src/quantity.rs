pub mod energy;
pub mod power;

use serde::{Deserialize, Serialize};

/// Physical quantity with its dimension encoded in the type.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<T, const POWER: isize, const TIME: isize>(pub T);

impl<const POWER: isize, const TIME: isize> Quantity<i64, POWER, TIME> {
    pub const ZERO: Self = Self(0);
}

impl<const POWER: isize, const TIME: isize> Quantity<f64, POWER, TIME> {
    pub const ZERO: Self = Self(0.0);
}
