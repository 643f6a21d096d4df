// src/lib.rs

//! Berechnet eine 2D-Vektorpfad-Darstellung einer beleuchteten Kugel,
//! optional als Globus mit Landmassen. Ergebnis ist ein Baum aus
//! Pfad-Primitiven (`Move`/`Line`/`Bezier3`/`Circle`/`Group`), den ein
//! beliebiges Zeichen-Backend abläuft; das Backend selbst gehört nicht
//! zu dieser Crate.
//!
//! Kernstücke: die Bezier-Näherung elliptischer Bögen, das Versetzen
//! von Kurven mit variabler Breite (Tiller-Hanson), die Schattierung
//! pro Bogen und die Längengrad-Projektion des Globus.

pub mod math;
pub mod path;
pub mod shape;

// Öffentliche API
pub mod prelude {
    pub use crate::math::{
        error::{MathError, MathResult},
        geometry::{
            ArcRibbon, CubicCurve, construct_arc_segment, ellipse_angle_to_t, elliptical_arc,
            line_intersection, offset_bezier, offset_bezier2, translate_curve,
        },
        types::*,
        utils,
    };
    pub use crate::path::{PathBuilder, PathComponent};
    pub use crate::shape::{
        GeoPoint, Globe, GlobeConfig, LandmassSource, Light, Shape, Sphere, SphereConfig,
        Threshold,
    };
}
