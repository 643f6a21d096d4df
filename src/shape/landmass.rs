// src/shape/landmass.rs
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Geographische Koordinate in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub long: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(long: f64, lat: f64) -> Self {
        Self { long, lat }
    }
}

/// Externer Landmassen-Datensatz. Wird beim Aufbau einmal übergeben und
/// vom Kern nur gelesen, nie verändert.
pub trait LandmassSource: Debug {
    /// Umrisse, jeweils als geordnete Folge von (Länge, Breite) in Grad.
    fn outlines(&self) -> &[Vec<GeoPoint>];

    /// Längen-Abdeckung als Liste von `[start, ende]`-Ausdehnungen in
    /// Radiant. `lat` ist der Polarwinkel des Bandes in Grad (0..180),
    /// dieselbe Konvention wie in den Umrissen.
    fn coverage(&self, lat: f64) -> Vec<[f64; 2]>;
}
