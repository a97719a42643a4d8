//! Arithmetic helpers.

#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}
