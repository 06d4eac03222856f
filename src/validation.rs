use std::collections::HashSet;

use crate::{fleet::FleetConfig, input::Manifest, package::Package, prelude::*};

/// Reject the batch unless every package and the fleet make sense.
pub fn validate_manifest(manifest: &Manifest) -> Result {
    ensure!(
        manifest.base_cost.0.is_finite() && manifest.base_cost.0 >= 0.0,
        "base delivery cost must be a non-negative number, got {}",
        manifest.base_cost,
    );
    let mut ids = HashSet::with_capacity(manifest.packages.len());
    for package in &manifest.packages {
        validate_package(package)?;
        ensure!(ids.insert(package.id.as_str()), "duplicate package ID `{}`", package.id);
    }
    if let Some(fleet) = &manifest.fleet {
        validate_fleet(fleet)?;
    }
    Ok(())
}

pub fn validate_package(package: &Package) -> Result {
    ensure!(!package.id.is_empty(), "package ID must not be empty");
    ensure!(
        is_positive(package.weight.0),
        "weight of package `{}` must be positive, got {}",
        package.id,
        package.weight,
    );
    ensure!(
        is_positive(package.distance.0),
        "distance of package `{}` must be positive, got {}",
        package.id,
        package.distance,
    );
    Ok(())
}

pub fn validate_fleet(fleet: &FleetConfig) -> Result {
    ensure!(fleet.n_vehicles != 0, "number of vehicles must be positive");
    ensure!(is_positive(fleet.max_speed.0), "max speed must be positive, got {}", fleet.max_speed);
    ensure!(is_positive(fleet.capacity.0), "capacity must be positive, got {}", fleet.capacity);
    Ok(())
}

/// Also rejects `NaN` and infinities.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::{cost::Cost, mass::Kilograms, speed::KilometersPerHour};

    fn package(id: &str, weight: f64, distance: f64) -> Package {
        Package::builder().id(id).weight(weight).distance(distance).build()
    }

    fn manifest(packages: Vec<Package>) -> Manifest {
        Manifest { base_cost: Cost(100.0), packages, fleet: Some(FleetConfig::default()) }
    }

    #[test]
    fn test_valid() {
        validate_manifest(&manifest(vec![package("PKG1", 5.0, 5.0), package("PKG2", 1.0, 1.0)]))
            .unwrap();
    }

    #[test]
    fn test_non_positive_weight() {
        assert!(validate_package(&package("PKG1", 0.0, 5.0)).is_err());
        assert!(validate_package(&package("PKG1", -1.0, 5.0)).is_err());
        assert!(validate_package(&package("PKG1", f64::NAN, 5.0)).is_err());
    }

    #[test]
    fn test_non_positive_distance() {
        assert!(validate_package(&package("PKG1", 5.0, 0.0)).is_err());
        assert!(validate_package(&package("PKG1", 5.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_empty_id() {
        assert!(validate_package(&package("", 5.0, 5.0)).is_err());
    }

    #[test]
    fn test_duplicate_ids() {
        let error =
            validate_manifest(&manifest(vec![package("PKG1", 5.0, 5.0), package("PKG1", 1.0, 1.0)]))
                .unwrap_err();
        assert!(error.to_string().contains("duplicate"));
    }

    #[test]
    fn test_negative_base_cost() {
        let manifest = Manifest { base_cost: Cost(-1.0), ..manifest(Vec::new()) };
        assert!(validate_manifest(&manifest).is_err());
    }

    #[test]
    fn test_invalid_fleet() {
        let fleet = FleetConfig::default();
        assert!(validate_fleet(&fleet).is_ok());
        assert!(validate_fleet(&FleetConfig { n_vehicles: 0, ..fleet }).is_err());
        assert!(
            validate_fleet(&FleetConfig { max_speed: KilometersPerHour(0.0), ..fleet }).is_err()
        );
        assert!(validate_fleet(&FleetConfig { capacity: Kilograms(-200.0), ..fleet }).is_err());
    }
}
