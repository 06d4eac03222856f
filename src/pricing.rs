use bon::Builder;

use crate::{
    offer::OfferTable,
    package::Package,
    quantity::{
        cost::Cost,
        rate::{KilogramRate, KilometerRate},
    },
};

/// Delivery cost model: `base + weight × weight rate + distance × distance rate`,
/// minus the offer discount.
///
/// Amounts are rounded half away from zero to whole currency units.
#[derive(Builder)]
pub struct CostModel<'a> {
    offers: &'a OfferTable,

    #[builder(default = CostModel::WEIGHT_RATE)]
    weight_rate: KilogramRate,

    #[builder(default = CostModel::DISTANCE_RATE)]
    distance_rate: KilometerRate,
}

#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    /// Undiscounted and unrounded.
    pub delivery_cost: Cost,

    pub discount: Cost,

    /// Final cost to pay.
    pub total: Cost,
}

impl CostModel<'_> {
    pub const WEIGHT_RATE: KilogramRate = KilogramRate(10.0);
    pub const DISTANCE_RATE: KilometerRate = KilometerRate(5.0);

    pub fn delivery_cost(&self, base_cost: Cost, package: &Package) -> Cost {
        base_cost + package.weight * self.weight_rate + package.distance * self.distance_rate
    }

    pub fn quote(&self, base_cost: Cost, package: &Package) -> Quote {
        let delivery_cost = self.delivery_cost(base_cost, package);
        let discount = (delivery_cost * self.offers.lookup(package)).round();
        Quote { delivery_cost, discount, total: (delivery_cost - discount).round() }
    }
}
