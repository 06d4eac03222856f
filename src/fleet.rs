use crate::quantity::{distance::Kilometers, mass::Kilograms, speed::KilometersPerHour, time::Hours};

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    derive_more::Display,
    derive_more::From,
)]
pub struct VehicleId(pub u32);

/// Fleet description: identical vehicles, numbered from 1.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FleetConfig {
    pub n_vehicles: u32,
    pub max_speed: KilometersPerHour,
    pub capacity: Kilograms,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self { n_vehicles: 1, max_speed: KilometersPerHour(70.0), capacity: Kilograms(200.0) }
    }
}

impl FleetConfig {
    pub fn vehicles(&self) -> impl Iterator<Item = Vehicle> {
        (1..=self.n_vehicles).map(|id| Vehicle::new(VehicleId(id), self.max_speed, self.capacity))
    }
}

#[must_use]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub speed: KilometersPerHour,
    pub capacity: Kilograms,

    /// Earliest time the vehicle may start its next trip.
    pub available_at: Hours,
}

/// One-way trip of a vehicle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trip {
    pub start: Hours,
    pub arrival: Hours,
}

impl Vehicle {
    pub const fn new(id: VehicleId, speed: KilometersPerHour, capacity: Kilograms) -> Self {
        Self { id, speed, capacity, available_at: Hours::ZERO }
    }

    pub fn can_carry(&self, weight: Kilograms) -> bool {
        weight <= self.capacity
    }

    /// Send the vehicle to the destination.
    ///
    /// The vehicle has to come back before it can take the next package,
    /// so it becomes available again after the round trip.
    pub fn dispatch(&mut self, distance: Kilometers) -> Trip {
        let travel_time = distance / self.speed;
        let start = self.available_at;
        self.available_at = start + travel_time * 2.0;
        Trip { start, arrival: start + travel_time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fleet() {
        let vehicles = FleetConfig::default().vehicles().collect::<Vec<_>>();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].id, VehicleId(1));
        assert_eq!(vehicles[0].speed, KilometersPerHour(70.0));
        assert_eq!(vehicles[0].capacity, Kilograms(200.0));
        assert_eq!(vehicles[0].available_at, Hours::ZERO);
    }

    #[test]
    fn test_vehicle_ids_start_at_one() {
        let config = FleetConfig { n_vehicles: 3, ..FleetConfig::default() };
        let ids = config.vehicles().map(|vehicle| vehicle.id).collect::<Vec<_>>();
        assert_eq!(ids, [VehicleId(1), VehicleId(2), VehicleId(3)]);
    }

    #[test]
    fn test_dispatch_round_trip() {
        let mut vehicle = Vehicle::new(VehicleId(1), KilometersPerHour(50.0), Kilograms(200.0));
        let trip = vehicle.dispatch(Kilometers(100.0));
        assert_eq!(trip, Trip { start: Hours(0.0), arrival: Hours(2.0) });
        assert_eq!(vehicle.available_at, Hours(4.0));

        let trip = vehicle.dispatch(Kilometers(50.0));
        assert_eq!(trip, Trip { start: Hours(4.0), arrival: Hours(5.0) });
        assert_eq!(vehicle.available_at, Hours(6.0));
    }

    #[test]
    fn test_can_carry_is_inclusive() {
        let vehicle = Vehicle::new(VehicleId(1), KilometersPerHour(70.0), Kilograms(200.0));
        assert!(vehicle.can_carry(Kilograms(200.0)));
        assert!(!vehicle.can_carry(Kilograms(200.5)));
    }
}
