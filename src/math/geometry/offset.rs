// src/math/geometry/offset.rs
use super::ellipse::{CubicCurve, elliptical_arc};
use crate::math::types::Point2;

/// Schnittpunkt zweier (unendlicher) Geraden über die 2x2-Determinante.
// FIXME: det == 0 (parallele Geraden) wird nicht abgefangen
pub fn line_intersection(a1: Point2, a2: Point2, b1: Point2, b2: Point2) -> Point2 {
    let t = ((a1.x - b1.x) * (b1.y - b2.y) - (a1.y - b1.y) * (b1.x - b2.x))
        / ((a1.x - a2.x) * (b1.y - b2.y) - (a1.y - a2.y) * (b1.x - b2.x));

    Point2::new(a1.x + t * (a2.x - a1.x), a1.y + t * (a2.y - a1.y))
}

/// Verschobene Kontroll-Sehnen: für jedes aufeinanderfolgende Punktpaar
/// der Kurve werden beide Endpunkte senkrecht zur Sehne um den jeweiligen
/// Betrag versetzt.
fn displace_chords(curve: &CubicCurve, offsets: &[f64; 4]) -> [Point2; 6] {
    let mut points = [Point2::origin(); 6];

    for i in 0..3 {
        let angle = (curve[i + 1].x - curve[i].x).atan2(curve[i + 1].y - curve[i].y);

        points[2 * i] = Point2::new(
            curve[i].x + angle.cos() * offsets[i],
            curve[i].y - angle.sin() * offsets[i],
        );
        points[2 * i + 1] = Point2::new(
            curve[i + 1].x + angle.cos() * offsets[i + 1],
            curve[i + 1].y - angle.sin() * offsets[i + 1],
        );
    }

    points
}

/// Die inneren Kontrollpunkte der versetzten Kurve ergeben sich als
/// Schnittpunkte der verschobenen Sehnen.
fn intersect_chords(points: &[Point2; 6], reverse: bool) -> CubicCurve {
    let mut result = [
        points[0],
        line_intersection(points[0], points[1], points[2], points[3]),
        line_intersection(points[2], points[3], points[4], points[5]),
        points[5],
    ];

    if reverse {
        result.reverse();
    }

    result
}

/// Versetzt eine kubische Bezier-Kurve um `offset`, nach Tiller und Hanson.
/// Das ist eine Näherung; echte Offset-Kurven von Beziers sind keine
/// Beziers mehr, auf der gerenderten Skala fällt das aber nicht auf.
/// https://math.stackexchange.com/questions/465782/control-points-of-offset-bezier-curve/467038#467038
pub fn offset_bezier(curve: &CubicCurve, offset: f64, reverse: bool) -> CubicCurve {
    let points = displace_chords(curve, &[offset; 4]);
    intersect_chords(&points, reverse)
}

/// Variante mit Start- und End-Versatz; die Beträge werden anteilig der
/// Sehnenlängen auf die Kontrollpunkte verteilt. Wer mehr als einen
/// Breitenwechsel will, muss die Kurve vorher in Segmente teilen.
pub fn offset_bezier2(
    curve: &CubicCurve,
    offset_start: f64,
    offset_end: f64,
    reverse: bool,
) -> CubicCurve {
    let mut total_length = 0.0;
    let mut lengths = [0.0; 3];
    for i in 0..3 {
        let length = (curve[i + 1] - curve[i]).norm();
        total_length += length;
        lengths[i] = length;
    }

    let offset_delta = offset_end - offset_start;
    let mut offsets = [offset_start; 4];

    let mut aggregate = 0.0;
    for i in 0..3 {
        aggregate += lengths[i];
        offsets[i + 1] = offset_start + aggregate / total_length * offset_delta;
    }

    let points = displace_chords(curve, &offsets);
    intersect_chords(&points, reverse)
}

/// Verschiebt eine im Ursprung zentrierte Kurve zum Bogen-Zentrum.
pub fn translate_curve(curve: &CubicCurve, center: &Point2) -> CubicCurve {
    curve.map(|p| p + center.coords)
}

/// Vorwärts- und Rückseite eines Bandes; die Kurven der Rückseite sind
/// einzeln umgekehrt, stehen aber noch in Parameter-Reihenfolge. Der
/// Aufrufer dreht die Liste vor dem Zusammensetzen um.
#[derive(Debug, Clone)]
pub struct ArcRibbon {
    pub forward: Vec<CubicCurve>,
    pub back: Vec<CubicCurve>,
}

/// Baut aus dem Bogen `[a1, a2]` ein Band mit variabler Breite: der Bogen
/// wird uniform unterteilt (wie in `elliptical_arc`), die halbe Breite
/// linear von `w1/2` nach `w2/2` interpoliert und jedes Teilstück nach
/// beiden Seiten versetzt.
pub fn construct_arc_segment(
    center: Point2,
    rx: f64,
    ry: f64,
    a1: f64,
    a2: f64,
    w1: f64,
    w2: f64,
) -> ArcRibbon {
    let arc = elliptical_arc(rx, ry, a1, a2);

    // die Unterteilung ist immer uniform, daher reicht ein fester Schritt
    let width_step = (w2 - w1) / arc.len() as f64;

    let mut forward = Vec::with_capacity(arc.len());
    let mut back = Vec::with_capacity(arc.len());

    for (i, segment) in arc.iter().enumerate() {
        let start_offset = (w1 + i as f64 * width_step) / 2.0;
        let end_offset = (w1 + (i + 1) as f64 * width_step) / 2.0;

        let segment = translate_curve(segment, &center);

        forward.push(offset_bezier2(&segment, start_offset, end_offset, false));
        back.push(offset_bezier2(&segment, -start_offset, -end_offset, true));
    }

    ArcRibbon { forward, back }
}
