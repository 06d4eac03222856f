mod rule;

use std::{collections::BTreeMap, fmt::Debug, fs, path::Path};

use serde::Deserialize;

pub use self::rule::{OfferRecord, OfferRule};
use crate::{
    package::{OfferCode, Package},
    prelude::*,
    quantity::percent::Percent,
};

/// Offer table bundled into the binary.
const BUILTIN_OFFERS: &str = include_str!("../offers.toml");

/// TOML layout: an array of `[[offers]]` tables.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct OfferFile {
    #[serde(default)]
    offers: Vec<OfferRecord>,
}

/// Discount rules by offer code.
///
/// An empty table is a valid table: it grants no discounts.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct OfferTable {
    rules: BTreeMap<OfferCode, OfferRule>,
}

impl OfferTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The default offers, see `offers.toml`.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_OFFERS).unwrap_or_else(|error| {
            warn!("the built-in offer table is broken, no discounts will apply: {error:#}");
            Self::empty()
        })
    }

    /// Build the table, failing on duplicate codes.
    pub fn try_from_rules(rules: impl IntoIterator<Item = OfferRule>) -> Result<Self> {
        let mut table = Self::empty();
        for rule in rules {
            let code = rule.code.clone();
            ensure!(table.rules.insert(code.clone(), rule).is_none(), "duplicate offer `{code}`");
        }
        Ok(table)
    }

    pub fn try_from_records(records: impl IntoIterator<Item = OfferRecord>) -> Result<Self> {
        let rules = records.into_iter().map(OfferRule::try_from).collect::<Result<Vec<_>>>()?;
        Self::try_from_rules(rules)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::try_from_records(toml::from_str::<OfferFile>(text)?.offers)
    }

    /// Parse a JSON array of offer records.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::try_from_records(serde_json::from_str::<Vec<OfferRecord>>(text)?)
    }

    /// Read the table from a `.toml` or `.json` file.
    #[instrument(name = "Reading the offer table…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let table = match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::from_json_str(&text),
            Some("toml") => Self::from_toml_str(&text),
            _ => bail!("`{}` is neither a `.toml` nor a `.json` file", path.display()),
        }
        .with_context(|| format!("malformed offer table `{}`", path.display()))?;
        if table.is_empty() {
            warn!("the offer table has no offers, no discounts will apply");
        } else {
            info!(n_offers = table.len(), "loaded");
        }
        Ok(table)
    }

    /// Same as [`Self::read_from`], but degrades to the empty table on any failure.
    pub fn read_or_empty<P: AsRef<Path> + Debug>(path: P) -> Self {
        Self::read_from(path).unwrap_or_else(|error| {
            warn!("no discounts will apply: {error:#}");
            Self::empty()
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Discount percent for the package, zero when no rule applies.
    pub fn lookup(&self, package: &Package) -> Percent {
        self.rules
            .get(&package.offer_code)
            .map_or(Percent::ZERO, |rule| rule.percent_for(package))
    }

    /// Derive the discount eligibility flag for every package.
    pub fn mark_eligibility(&self, packages: &mut [Package]) {
        for package in packages {
            package.is_discount_eligible = !self.lookup(package).is_zero();
        }
    }
}
