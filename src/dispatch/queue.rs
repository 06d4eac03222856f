use std::{cmp::Ordering, collections::BinaryHeap};

use itertools::Itertools;

use crate::fleet::Vehicle;

/// Vehicles ordered by their availability.
///
/// [`VehicleQueue::pop`] returns the vehicle which becomes available first,
/// the lowest identifier wins a tie.
pub trait VehicleQueue: FromIterator<Vehicle> {
    fn pop(&mut self) -> Option<Vehicle>;

    fn push(&mut self, vehicle: Vehicle);
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum QueueStrategy {
    /// Binary heap, logarithmic in the fleet size.
    #[default]
    Heap,

    /// Linear scan, fine for small fleets.
    Scan,
}

/// Heap entry.
#[derive(Debug)]
struct Queued(Vehicle);

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flipped to make the max-heap a min-heap:
        other
            .0
            .available_at
            .cmp(&self.0.available_at)
            .then_with(|| other.0.id.cmp(&self.0.id))
    }
}

#[derive(Debug, Default)]
pub struct HeapQueue(BinaryHeap<Queued>);

impl FromIterator<Vehicle> for HeapQueue {
    fn from_iter<T: IntoIterator<Item = Vehicle>>(iterator: T) -> Self {
        Self(iterator.into_iter().map(Queued).collect())
    }
}

impl VehicleQueue for HeapQueue {
    fn pop(&mut self) -> Option<Vehicle> {
        self.0.pop().map(|Queued(vehicle)| vehicle)
    }

    fn push(&mut self, vehicle: Vehicle) {
        self.0.push(Queued(vehicle));
    }
}

#[derive(Debug, Default)]
pub struct ScanQueue(Vec<Vehicle>);

impl FromIterator<Vehicle> for ScanQueue {
    fn from_iter<T: IntoIterator<Item = Vehicle>>(iterator: T) -> Self {
        Self(iterator.into_iter().collect())
    }
}

impl VehicleQueue for ScanQueue {
    fn pop(&mut self) -> Option<Vehicle> {
        let index =
            self.0.iter().position_min_by_key(|vehicle| (vehicle.available_at, vehicle.id))?;
        Some(self.0.swap_remove(index))
    }

    fn push(&mut self, vehicle: Vehicle) {
        self.0.push(vehicle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fleet::{FleetConfig, VehicleId},
        quantity::time::Hours,
    };

    fn drain<Q: VehicleQueue>(mut queue: Q) -> Vec<(VehicleId, Hours)> {
        let mut drained = Vec::new();
        while let Some(vehicle) = queue.pop() {
            drained.push((vehicle.id, vehicle.available_at));
        }
        drained
    }

    fn vehicles() -> Vec<Vehicle> {
        let config = FleetConfig { n_vehicles: 4, ..FleetConfig::default() };
        let mut vehicles = config.vehicles().collect::<Vec<_>>();
        vehicles[0].available_at = Hours(3.0);
        vehicles[1].available_at = Hours(1.0);
        vehicles[2].available_at = Hours(3.0);
        vehicles[3].available_at = Hours(1.0);
        vehicles
    }

    #[test]
    fn test_heap_order() {
        assert_eq!(
            drain(vehicles().into_iter().collect::<HeapQueue>()),
            [
                (VehicleId(2), Hours(1.0)),
                (VehicleId(4), Hours(1.0)),
                (VehicleId(1), Hours(3.0)),
                (VehicleId(3), Hours(3.0)),
            ],
        );
    }

    #[test]
    fn test_scan_matches_heap() {
        assert_eq!(
            drain(vehicles().into_iter().collect::<ScanQueue>()),
            drain(vehicles().into_iter().collect::<HeapQueue>()),
        );
    }

    #[test]
    fn test_push_back() {
        let mut queue = vehicles().into_iter().collect::<HeapQueue>();
        let mut vehicle = queue.pop().unwrap();
        assert_eq!(vehicle.id, VehicleId(2));
        vehicle.available_at = Hours(2.0);
        queue.push(vehicle);
        assert_eq!(queue.pop().unwrap().id, VehicleId(4));
        assert_eq!(queue.pop().unwrap().id, VehicleId(2));
    }

    #[test]
    fn test_empty() {
        assert!(HeapQueue::default().pop().is_none());
        assert!(ScanQueue::default().pop().is_none());
    }
}
