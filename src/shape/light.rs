// src/shape/light.rs
use crate::math::types::Point3;
use serde::{Deserialize, Serialize};

/// Punktlichtquelle. `intensity` skaliert den inversen quadratischen
/// Abfall, `shadow` skaliert den resultierenden Schattenwert; der ist
/// dimensionslos und nach oben nicht beschränkt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub center: Point3,
    pub intensity: f64,
    pub shadow: f64,
}

impl Light {
    pub fn new(center: Point3, intensity: f64, shadow: f64) -> Self {
        Self {
            center,
            intensity,
            shadow,
        }
    }
}

/// Schwellwerte, die den Schattenwert eines Abtastpunkts in die Regime
/// "voll / gestrichelt / leer" einteilen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// ab hier zeichnen wir voll (eigentlich gefüllte Bänder)
    pub line: f64,

    /// ab hier zeichnen wir gestrichelt
    pub dash: f64,
}

impl Threshold {
    /// Invariante: `dash <= line`
    pub fn new(line: f64, dash: f64) -> Self {
        debug_assert!(dash <= line, "dash threshold must not exceed line threshold");
        Self { line, dash }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            line: 0.45,
            dash: 0.325,
        }
    }
}
