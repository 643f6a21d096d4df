// src/math/types/mod.rs
pub mod arc;

pub use arc::*;

// Einheitliche Typen für das gesamte Modul; wir rechnen durchgehend
// mit f64, die Pfad-Ausgabe ist ja für Vektor-Backends gedacht.
pub type Point2 = nalgebra::Point2<f64>;
pub type Point3 = nalgebra::Point3<f64>;
pub type Vector2 = nalgebra::Vector2<f64>;
