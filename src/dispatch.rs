//! Greedy dispatching of packages to the fleet.
//!
//! Packages are taken in the priority order: discount-eligible first, then the heaviest first.
//! Each package is offered to the vehicle that becomes available first. If that vehicle
//! cannot carry the package, the package stays undelivered and **no other vehicle is tried**.
//! After a delivery, the vehicle has to return before taking the next package,
//! so it becomes available again after the round trip.

mod queue;

use itertools::Itertools;

pub use self::queue::{HeapQueue, QueueStrategy, ScanQueue, VehicleQueue};
use crate::{
    fleet::{FleetConfig, VehicleId},
    package::Package,
    prelude::*,
    quantity::time::Hours,
};

#[must_use]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Assignment {
    pub vehicle_id: VehicleId,
    pub start: Hours,

    /// Estimated arrival time, truncated to hundredths of an hour.
    pub eta: Hours,
}

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Dispatch {
    pub package_id: String,

    /// `None` when the package is unreachable.
    pub assignment: Option<Assignment>,
}

/// Estimate the delivery times.
///
/// Results follow the order of `packages`.
pub fn estimate_times(
    packages: &[Package],
    fleet: &FleetConfig,
    strategy: QueueStrategy,
) -> Vec<Dispatch> {
    match strategy {
        QueueStrategy::Heap => Dispatcher::<HeapQueue>::new(fleet, packages.len()).run(packages),
        QueueStrategy::Scan => Dispatcher::<ScanQueue>::new(fleet, packages.len()).run(packages),
    }
}

/// Owns the fleet for the duration of a single run.
struct Dispatcher<Q> {
    queue: Q,
}

impl<Q: VehicleQueue> Dispatcher<Q> {
    /// Each package takes at most one vehicle, and the vehicles are identical,
    /// so the vehicles beyond the first `n_packages` would never leave the depot.
    fn new(fleet: &FleetConfig, n_packages: usize) -> Self {
        Self { queue: fleet.vehicles().take(n_packages).collect() }
    }

    #[instrument(skip_all, name = "Dispatching…", fields(n_packages = packages.len()))]
    fn run(mut self, packages: &[Package]) -> Vec<Dispatch> {
        let mut assignments = vec![None; packages.len()];
        for index in priority_order(packages) {
            assignments[index] = self.assign(&packages[index]);
        }
        packages
            .iter()
            .zip(assignments)
            .map(|(package, assignment)| Dispatch { package_id: package.id.clone(), assignment })
            .collect()
    }

    fn assign(&mut self, package: &Package) -> Option<Assignment> {
        let mut vehicle = self.queue.pop()?;
        let assignment = if vehicle.can_carry(package.weight) {
            let trip = vehicle.dispatch(package.distance);
            debug!(
                package_id = %package.id,
                vehicle_id = %vehicle.id,
                start = %trip.start,
                arrival = %trip.arrival,
                "dispatched",
            );
            Some(Assignment {
                vehicle_id: vehicle.id,
                start: trip.start,
                eta: trip.arrival.truncate_to_hundredths(),
            })
        } else {
            warn!(
                package_id = %package.id,
                weight = %package.weight,
                vehicle_id = %vehicle.id,
                capacity = %vehicle.capacity,
                "the package is too heavy, leaving it undelivered",
            );
            None
        };
        self.queue.push(vehicle);
        assignment
    }
}

/// Package indices, highest priority first.
///
/// The sort is stable, so equal packages keep their input order.
fn priority_order(packages: &[Package]) -> Vec<usize> {
    packages
        .iter()
        .enumerate()
        .sorted_by(|(_, lhs), (_, rhs)| {
            rhs.is_discount_eligible
                .cmp(&lhs.is_discount_eligible)
                .then_with(|| rhs.weight.cmp(&lhs.weight))
        })
        .map(|(index, _)| index)
        .collect()
}
