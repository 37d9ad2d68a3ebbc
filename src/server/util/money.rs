/// Round a money amount to two decimals.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
