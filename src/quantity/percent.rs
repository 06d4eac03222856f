quantity!(Percent, via: u16, suffix: "%", precision: 0);

impl Percent {
    pub const HUNDRED: Self = Self(100);

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}
