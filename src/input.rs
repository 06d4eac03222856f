use std::str::FromStr;

use crate::{fleet::FleetConfig, package::Package, prelude::*, quantity::cost::Cost};

/// Expected input layout, shown to the user when parsing fails.
pub const EXPECTED_FORMAT: &str = "\
base_delivery_cost no_of_packages
pkg_id weight_kg distance_km [offer_code]
…
[no_of_vehicles max_speed max_carriable_weight]";

/// Parsed input batch.
#[must_use]
#[derive(Debug)]
pub struct Manifest {
    pub base_cost: Cost,
    pub packages: Vec<Package>,

    /// `None` when the input has no complete vehicle line.
    pub fleet: Option<FleetConfig>,
}

impl FromStr for Manifest {
    type Err = Error;

    /// Parse the whitespace-separated input, blank lines are ignored.
    fn from_str(text: &str) -> Result<Self> {
        let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

        let header = lines.next().context("the input is empty")?;
        let mut fields = header.split_whitespace();
        let base_cost = parse_field(&mut fields, "base delivery cost")?;
        let n_packages: usize = parse_field(&mut fields, "number of packages")?;

        let packages = (1..=n_packages)
            .map(|number| {
                let line = lines.next().with_context(|| {
                    format!("expected {n_packages} packages, found only {}", number - 1)
                })?;
                parse_package(line).with_context(|| format!("invalid package line `{line}`"))
            })
            .collect::<Result<Vec<_>>>()?;

        let fleet = match lines.next() {
            Some(line) => {
                parse_fleet(line).with_context(|| format!("invalid vehicle line `{line}`"))?
            }
            None => None,
        };

        let n_ignored = lines.count();
        if n_ignored != 0 {
            warn!(n_ignored, "ignoring the trailing lines");
        }

        Ok(Self { base_cost, packages, fleet })
    }
}

fn parse_package(line: &str) -> Result<Package> {
    let mut fields = line.split_whitespace();
    let id = fields.next().context("missing package ID")?;
    Ok(Package::builder()
        .id(id)
        .weight(parse_field::<f64>(&mut fields, "weight")?)
        .distance(parse_field::<f64>(&mut fields, "distance")?)
        .offer_code(fields.next())
        .build())
}

/// Parse the vehicle line, unless it is incomplete.
fn parse_fleet(line: &str) -> Result<Option<FleetConfig>> {
    let fields = line.split_whitespace().collect::<Vec<_>>();
    let [n_vehicles, max_speed, capacity, ..] = fields.as_slice() else {
        warn!(line, "incomplete vehicle line, using the default fleet");
        return Ok(None);
    };
    Ok(Some(FleetConfig {
        n_vehicles: n_vehicles
            .parse()
            .with_context(|| format!("`{n_vehicles}` is not a valid number of vehicles"))?,
        max_speed: max_speed
            .parse()
            .with_context(|| format!("`{max_speed}` is not a valid speed"))?,
        capacity: capacity
            .parse()
            .with_context(|| format!("`{capacity}` is not a valid capacity"))?,
    }))
}

fn parse_field<'a, T>(fields: &mut impl Iterator<Item = &'a str>, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let field = fields.next().with_context(|| format!("missing {name}"))?;
    field.parse().with_context(|| format!("`{field}` is not a valid {name}"))
}
