quantity!(Hours, via: f64, suffix: "h", precision: 2);

impl Hours {
    /// Absorbs the representation error of values that are exact in hundredths,
    /// like `29 km ÷ 100 km/h`.
    const EPSILON: f64 = 1e-9;

    /// Truncate toward zero to two decimal places.
    ///
    /// This is not rounding: `1.239` becomes `1.23`.
    pub fn truncate_to_hundredths(self) -> Self {
        Self((self.0 * 100.0 + Self::EPSILON).trunc() / 100.0)
    }
}
