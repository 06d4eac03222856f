use std::ops::Mul;

use crate::quantity::percent::Percent;

quantity!(
    /// Delivery cost, in the currency of the base delivery cost.
    Cost, via: f64, suffix: "", precision: 0
);

impl Cost {
    /// Round to a whole currency unit, half away from zero.
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}

impl Mul<Percent> for Cost {
    type Output = Self;

    fn mul(self, percent: Percent) -> Self::Output {
        Self(self.0 * f64::from(percent.0) / 100.0)
    }
}
