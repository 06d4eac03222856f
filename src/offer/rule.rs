use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::{
    package::{OfferCode, Package},
    prelude::*,
    quantity::{distance::Kilometers, mass::Kilograms, percent::Percent},
};

/// Offer rule as it is written in an offer table file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfferRecord {
    pub code: String,

    #[serde(default)]
    pub percent: Percent,

    #[serde(default)]
    pub weight: Option<[Kilograms; 2]>,

    #[serde(default)]
    pub distance: Option<[Kilometers; 2]>,
}

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct OfferRule {
    pub code: OfferCode,
    pub percent: Percent,

    /// Inclusive, unconstrained when `None`.
    pub weight: Option<RangeInclusive<Kilograms>>,

    /// Inclusive, unconstrained when `None`.
    pub distance: Option<RangeInclusive<Kilometers>>,
}

impl OfferRule {
    /// Discount percent granted to the package, zero when it is out of range.
    ///
    /// The offer code is not checked here.
    pub fn percent_for(&self, package: &Package) -> Percent {
        let is_in_weight_range =
            self.weight.as_ref().is_none_or(|range| range.contains(&package.weight));
        let is_in_distance_range =
            self.distance.as_ref().is_none_or(|range| range.contains(&package.distance));
        if is_in_weight_range && is_in_distance_range { self.percent } else { Percent::ZERO }
    }
}

impl TryFrom<OfferRecord> for OfferRule {
    type Error = Error;

    fn try_from(record: OfferRecord) -> Result<Self> {
        ensure!(!record.code.trim().is_empty(), "offer code must not be empty");
        ensure!(
            record.percent <= Percent::HUNDRED,
            "offer `{}` grants {}, which exceeds 100%",
            record.code,
            record.percent,
        );
        Ok(Self {
            weight: record
                .weight
                .map(|[min, max]| try_range(min, max))
                .transpose()
                .with_context(|| format!("invalid weight range of `{}`", record.code))?,
            distance: record
                .distance
                .map(|[min, max]| try_range(min, max))
                .transpose()
                .with_context(|| format!("invalid distance range of `{}`", record.code))?,
            code: OfferCode::new(&record.code),
            percent: record.percent,
        })
    }
}

fn try_range<T: PartialOrd + std::fmt::Debug>(min: T, max: T) -> Result<RangeInclusive<T>> {
    ensure!(min <= max, "{min:?} is greater than {max:?}");
    Ok(min..=max)
}
