use crate::quantity::{distance::Kilometers, time::Hours};

quantity!(KilometersPerHour, via: f64, suffix: "km/h", precision: 0);

implement_div!(Kilometers, KilometersPerHour, Hours);
