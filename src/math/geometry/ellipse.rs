// src/math/geometry/ellipse.rs
use crate::math::types::{Point2, Vector2};
use crate::math::utils::constants::PI_OVER_4;

/// Kubische Bezier-Kurve als vier Kontrollpunkte.
pub type CubicCurve = [Point2; 4];

/// Wechselt vom parametrischen Winkel in die t-Domäne der Ellipse
/// (siehe `elliptical_arc`; dort wird die Teilung in dieser Domäne
/// vorgenommen und pro Segment wieder zurückgerechnet).
pub fn ellipse_angle_to_t(angle: f64, a: f64, b: f64) -> f64 {
    (angle.sin() * b).atan2(angle.cos() * a)
}

/// Nähert den elliptischen Bogen `[lambda1, lambda2]` einer achsenparallelen,
/// im Ursprung zentrierten Ellipse mit Halbachsen `a`, `b` durch kubische
/// Bezier-Segmente an. Segmente breiter als π/4 werden unterteilt, darüber
/// wird die Ein-Segment-Näherung sichtbar schlecht.
///
/// Degenerierte Halbachsen sind eine Vorbedingungsverletzung, kein
/// behandelbarer Fehler.
pub fn elliptical_arc(a: f64, b: f64, lambda1: f64, lambda2: f64) -> Vec<CubicCurve> {
    debug_assert!(a.is_finite() && b.is_finite() && a > 0.0 && b > 0.0);

    let lambda1 = ellipse_angle_to_t(lambda1, a, b);
    let lambda2 = ellipse_angle_to_t(lambda2, a, b);

    // einfacher Fall
    if lambda2 - lambda1 < PI_OVER_4 {
        return vec![elliptical_arc_segment(a, b, lambda1, lambda2)];
    }

    let count = ((lambda2 - lambda1) / PI_OVER_4).ceil();
    let step = (lambda2 - lambda1) / count;
    let count = count as usize;

    let mut arcs = Vec::with_capacity(count);
    let mut start = lambda1;
    for i in 1..=count {
        let end = lambda1 + i as f64 * step;
        arcs.push(elliptical_arc_segment(a, b, start, end));
        start = end;
    }

    arcs
}

/// Ein einzelnes Bezier-Segment für einen Bogen mit Öffnung < π/4.
/// Geschlossene Formel nach
/// http://www.spaceroots.org/documents/ellipse/elliptical-arc.pdf
/// (Zentrum im Ursprung, Ellipse nicht rotiert).
fn elliptical_arc_segment(a: f64, b: f64, lambda1: f64, lambda2: f64) -> CubicCurve {
    let eta1 = (lambda1.sin() / b).atan2(lambda1.cos() / a);
    let eta2 = (lambda2.sin() / b).atan2(lambda2.cos() / a);

    let p1 = Point2::new(a * eta1.cos(), b * eta1.sin());
    let p2 = Point2::new(a * eta2.cos(), b * eta2.sin());

    let d_eta = eta2 - eta1;
    let alpha = d_eta.sin() * ((4.0 + 3.0 * (d_eta / 2.0).tan().powi(2)).sqrt() - 1.0) / 3.0;

    // Tangentenrichtungen an den Endpunkten
    let e1 = Vector2::new(-a * eta1.sin(), b * eta1.cos());
    let e2 = Vector2::new(-a * eta2.sin(), b * eta2.cos());

    [p1, p1 + alpha * e1, p2 - alpha * e2, p2]
}
