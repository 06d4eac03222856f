use crate::quantity::{cost::Cost, distance::Kilometers, mass::Kilograms};

quantity!(
    /// Cost per kilogram.
    KilogramRate, via: f64, suffix: "/kg", precision: 2
);

quantity!(
    /// Cost per kilometre.
    KilometerRate, via: f64, suffix: "/km", precision: 2
);

implement_mul!(Kilograms, KilogramRate, Cost);
implement_mul!(Kilometers, KilometerRate, Cost);
