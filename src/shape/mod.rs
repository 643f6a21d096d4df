// src/shape/mod.rs
pub mod globe;
pub mod landmass;
pub mod light;
pub mod sphere;

pub use globe::{Globe, GlobeConfig};
pub use landmass::{GeoPoint, LandmassSource};
pub use light::{Light, Threshold};
pub use sphere::{Sphere, SphereConfig};

use crate::path::PathComponent;

/// Eine renderbare Form: reine Funktion aus aktuellem Zustand und Licht
/// zu einer versiegelten Pfad-Gruppe. Der Aufrufer besitzt die
/// Animationsschleife und ruft pro Frame neu auf.
pub trait Shape {
    fn render(&self, light: &Light) -> PathComponent;
}
