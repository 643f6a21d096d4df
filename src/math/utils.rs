// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-9;
    pub const TAU: f64 = std::f64::consts::TAU;
    pub const PI: f64 = std::f64::consts::PI;
    pub const PI_OVER_2: f64 = std::f64::consts::FRAC_PI_2;
    pub const PI_OVER_4: f64 = std::f64::consts::FRAC_PI_4;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }
}

/// Grad nach Radiant
pub fn radians(degrees: f64) -> f64 {
    constants::PI * degrees / 180.0
}

/// Radiant nach ganzen Grad (gerundet)
pub fn degrees(radians: f64) -> f64 {
    (180.0 * radians / constants::PI).round()
}
