use std::fmt::{Display, Formatter};

use bon::Builder;

use crate::quantity::{distance::Kilometers, mass::Kilograms};

/// Upper-cased offer code.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OfferCode(String);

impl OfferCode {
    /// Code of packages that come without an offer.
    pub const NONE: &'static str = "NA";

    pub fn new(code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() { Self::default() } else { Self(code.to_uppercase()) }
    }
}

impl Default for OfferCode {
    fn default() -> Self {
        Self(Self::NONE.to_owned())
    }
}

impl From<&str> for OfferCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<Option<&str>> for OfferCode {
    fn from(code: Option<&str>) -> Self {
        code.map_or_else(Self::default, Self::new)
    }
}

impl Display for OfferCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Builder)]
pub struct Package {
    #[builder(into)]
    pub id: String,

    #[builder(into)]
    pub weight: Kilograms,

    #[builder(into)]
    pub distance: Kilometers,

    #[builder(default, into)]
    pub offer_code: OfferCode,

    /// Whether the offer table grants a nonzero discount to this package.
    ///
    /// Set once before dispatching, see [`crate::offer::OfferTable::mark_eligibility`].
    #[builder(default)]
    pub is_discount_eligible: bool,
}
