// src/math/geometry/mod.rs

// Deklaration der Geometrie-Kernmodule
pub mod ellipse;
pub mod offset;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen
pub use self::ellipse::{CubicCurve, ellipse_angle_to_t, elliptical_arc};
pub use self::offset::{
    ArcRibbon, construct_arc_segment, line_intersection, offset_bezier, offset_bezier2,
    translate_curve,
};
