use crate::{
    dispatch::{Assignment, QueueStrategy, estimate_times},
    input::Manifest,
    offer::OfferTable,
    prelude::*,
    pricing::CostModel,
    quantity::{cost::Cost, time::Hours},
};

/// Cost and delivery time estimate of a single package.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    pub package_id: String,
    pub discount: Cost,
    pub total: Cost,

    /// `None` when no vehicle may deliver the package.
    pub assignment: Option<Assignment>,
}

impl Estimate {
    pub fn eta(&self) -> Option<Hours> {
        self.assignment.map(|assignment| assignment.eta)
    }
}

/// Price and dispatch the batch.
///
/// The manifest must be validated beforehand. Estimates follow the package order.
#[instrument(skip_all, name = "Estimating…", fields(n_packages = manifest.packages.len()))]
pub fn estimate(
    manifest: Manifest,
    offers: &OfferTable,
    strategy: QueueStrategy,
) -> Result<Vec<Estimate>> {
    let Manifest { base_cost, mut packages, fleet } = manifest;
    let fleet = fleet.unwrap_or_default();
    info!(
        n_vehicles = fleet.n_vehicles,
        max_speed = %fleet.max_speed,
        capacity = %fleet.capacity,
        "fleet",
    );

    offers.mark_eligibility(&mut packages);
    let cost_model = CostModel::builder().offers(offers).build();
    let dispatches = estimate_times(&packages, &fleet, strategy);

    packages
        .iter()
        .zip(dispatches)
        .map(|(package, dispatch)| {
            ensure!(package.id == dispatch.package_id, "dispatches are out of order");
            let quote = cost_model.quote(base_cost, package);
            debug!(
                package_id = %package.id,
                delivery_cost = %quote.delivery_cost,
                discount = %quote.discount,
                total = %quote.total,
                "priced",
            );
            Ok(Estimate {
                package_id: dispatch.package_id,
                discount: quote.discount,
                total: quote.total,
                assignment: dispatch.assignment,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fleet::VehicleId, validation::validate_manifest};

    const SAMPLE: &str = "\
        100 5
        PKG1 50 30 OFR001
        PKG2 75 125 OFR008
        PKG3 175 100 OFR003
        PKG4 110 60 OFR002
        PKG5 155 95 NA
        2 70 200
    ";

    fn run(input: &str) -> Vec<Estimate> {
        let manifest = input.parse::<Manifest>().unwrap();
        validate_manifest(&manifest).unwrap();
        estimate(manifest, &OfferTable::builtin(), QueueStrategy::Heap).unwrap()
    }

    #[test]
    fn test_costs_without_fleet_line() {
        let estimates = run("100 3\nPKG1 5 5 OFR001\nPKG2 15 5 OFR002\nPKG3 10 100 OFR003\n");
        let costs = estimates
            .iter()
            .map(|estimate| (estimate.package_id.as_str(), estimate.discount.0, estimate.total.0))
            .collect::<Vec<_>>();
        assert_eq!(costs, [("PKG1", 0.0, 175.0), ("PKG2", 0.0, 275.0), ("PKG3", 35.0, 665.0)]);
    }

    #[test]
    fn test_sample_batch() {
        let estimates = run(SAMPLE);
        let rows = estimates
            .iter()
            .map(|estimate| {
                (
                    estimate.package_id.as_str(),
                    estimate.discount.0,
                    estimate.total.0,
                    estimate.eta().map(|eta| eta.0),
                )
            })
            .collect::<Vec<_>>();

        // PKG4 is the only discounted package, so it goes first on #1 (back at ≈1.71 h).
        // Then by weight: PKG3 on #2 (back at ≈2.86 h), PKG5 on #1, PKG2 on #2, PKG1 on #1.
        assert_eq!(
            rows,
            [
                ("PKG1", 0.0, 750.0, Some(4.85)),
                ("PKG2", 0.0, 1475.0, Some(4.64)),
                ("PKG3", 0.0, 2350.0, Some(1.42)),
                ("PKG4", 105.0, 1395.0, Some(0.85)),
                ("PKG5", 0.0, 2125.0, Some(3.07)),
            ],
        );
        assert_eq!(estimates[3].assignment.unwrap().vehicle_id, VehicleId(1));
        assert_eq!(estimates[2].assignment.unwrap().vehicle_id, VehicleId(2));
    }

    #[test]
    fn test_unreachable_package_is_still_priced() {
        let estimates = run("100 1\nBIG 150 10 NA\n1 50 100\n");
        assert_eq!(estimates[0].total, Cost(1650.0));
        assert_eq!(estimates[0].eta(), None);
    }

    #[test]
    fn test_empty_batch() {
        assert!(run("100 0").is_empty());
    }
}
