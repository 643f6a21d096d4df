// src/shape/sphere.rs
use super::Shape;
use super::light::{Light, Threshold};
use crate::math::error::{MathError, MathResult};
use crate::math::geometry::{CubicCurve, construct_arc_segment, elliptical_arc, translate_curve};
use crate::math::types::{Arc, Point2, Point3};
use crate::math::utils::constants::TAU;
use crate::path::{PathBuilder, PathComponent};
use log::debug;
use serde::{Deserialize, Serialize};

/// Konfiguration mit optionalen Feldern; wird in `Sphere::new` einmalig
/// über die Defaults gelegt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SphereConfig {
    /// Kugelzentrum, Default `(0, 0, 0)`
    pub center: Option<Point3>,
    /// Radius, Default `50`
    pub r: Option<f64>,
    /// Schwellwerte, Default `line 0.45 / dash 0.325`
    pub threshold: Option<Threshold>,
    /// radialer Abstand der Schattierungsringe, Default `4`
    pub shading_step: Option<f64>,
}

impl SphereConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center(mut self, center: Point3) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_r(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_shading_step(mut self, step: f64) -> Self {
        self.shading_step = Some(step);
        self
    }
}

/// Beleuchtete Kugel in orthographischer Projektion. Der Zustand darf
/// zwischen den Renderaufrufen frei verändert werden (Animation);
/// `render` selbst ist eine reine Funktion aus Zustand und Licht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Point3,
    pub r: f64,
    pub threshold: Threshold,
    pub shading_step: f64,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            r: 50.0,
            threshold: Threshold::default(),
            shading_step: 4.0,
        }
    }
}

/// Abtastpunkt auf einem Bogen
struct ArcSample {
    angle: f64,
    shade: f64,
}

impl Sphere {
    pub fn new(config: SphereConfig) -> MathResult<Self> {
        let defaults = Self::default();

        let sphere = Self {
            center: config.center.unwrap_or(defaults.center),
            r: config.r.unwrap_or(defaults.r),
            threshold: config.threshold.unwrap_or(defaults.threshold),
            shading_step: config.shading_step.unwrap_or(defaults.shading_step),
        };

        if !(sphere.r > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("sphere radius must be positive, got {}", sphere.r),
            });
        }
        if !(sphere.shading_step > 0.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!("shading step must be positive, got {}", sphere.shading_step),
            });
        }

        Ok(sphere)
    }

    /// z-Koordinate der Kugeloberfläche über dem 2D-Punkt. Für Punkte
    /// außerhalb der projizierten Scheibe undefiniert (NaN); Aufrufer
    /// fragen nur Punkte ab, die auf einem gerenderten Bogen liegen.
    pub fn height_at_point(&self, point: &Point2) -> f64 {
        let adjacent = ((self.center.x - point.x).powi(2) + (self.center.y - point.y).powi(2)).sqrt();
        let angle = (adjacent / self.r).acos();
        let z = self.r * angle.sin();

        z + self.center.z
    }

    /// Schattenwert am 2D-Punkt: inverser quadratischer Abfall zur
    /// Lichtquelle, durch `intensity` und `shadow` bewusst überzeichnet.
    pub fn light_at_point(&self, point: &Point2, light: &Light) -> f64 {
        let z = self.height_at_point(point);

        let distance = ((light.center.x - point.x).powi(2)
            + (light.center.y - point.y).powi(2)
            + (light.center.z - z).powi(2))
        .sqrt();

        let intensity = light.intensity / (distance * distance);

        light.shadow * (1.0 - intensity).max(0.0)
    }

    /// Schattiert einen elliptischen Bogen: der Bogen wird abgetastet, pro
    /// Punkt der Schattenwert berechnet und daraus eine zusammengesetzte
    /// Kurve gebaut. In dunklen Bereichen wird die Linie zu einem
    /// gefüllten Band verbreitert, in helleren "gestrichelt" (die Striche
    /// sind gemogelt: einfach unterschiedlich lange Teilbögen), darunter
    /// bleibt die Fläche leer.
    pub fn shade_arc(&self, light: &Light, arc: &Arc) -> Vec<PathComponent> {
        let mut components = Vec::new();

        // Artefakt des Kreis-Ursprungs; die Abtastdichte hängt am
        // großen Halbmesser, damit Striche nicht mitskalieren
        let count = (arc.rx * 2.0).ceil() as i64;
        if count < 1 {
            return components;
        }

        let angle_step = TAU / count as f64;
        let mut samples: Vec<ArcSample> = Vec::with_capacity(count as usize + 1);

        for i in 0..=count {
            let angle = arc.lambda1 + angle_step * i as f64;
            if angle > arc.lambda2 {
                break;
            }

            let point = arc.point_at(angle);
            let shade = self.light_at_point(&point, light);

            samples.push(ArcSample { angle, shade });
        }

        let mut dashes = PathBuilder::new();
        let mut path = PathBuilder::new();

        // Paare von Abtastpunkten werden in Läufe gruppiert: entweder gar
        // nicht gezeichnet, als Strich, oder in ein Band eingebaut. Bänder
        // wachsen über zusammenhängende Paare und werden beim ersten
        // nicht-vollen Paar (und am Schluss) als Umriss ausgespült.
        let mut forward: Vec<CubicCurve> = Vec::new();
        let mut back: Vec<CubicCurve> = Vec::new();

        for pair in samples.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);

            if a.shade >= self.threshold.line || b.shade >= self.threshold.line {
                // Band verlängern
                let ribbon = construct_arc_segment(
                    arc.center, arc.rx, arc.ry, a.angle, b.angle, a.shade, b.shade,
                );
                forward.extend(ribbon.forward);
                back.extend(ribbon.back);
            } else {
                // offenes Band ausspülen
                if !forward.is_empty() {
                    Self::flush_ribbon(&mut path, &forward, &mut back);
                    forward.clear();
                    back.clear();
                }

                // dann eventuell einen Strich setzen
                if a.shade >= self.threshold.dash && b.shade >= self.threshold.dash {
                    let average = (a.shade + b.shade) / 2.0;
                    let span = a.angle + (b.angle - a.angle) * average;
                    for curve in elliptical_arc(arc.rx, arc.ry, a.angle, span) {
                        dashes.curve(&translate_curve(&curve, &arc.center));
                    }
                }
            }
        }

        // offenes Band am Ende
        if !forward.is_empty() {
            Self::flush_ribbon(&mut path, &forward, &mut back);
        }

        if !path.is_empty() {
            components.push(path.to_group(Some("shading-fill")));
        }

        if !dashes.is_empty() {
            components.push(dashes.to_group(Some("shading-stroke")));
        }

        components
    }

    /// Setzt Vorder- und Rückseite eines Bandes zu einem geschlossenen
    /// Umriss zusammen. Jede Folgekurve trägt nur ihre letzten drei Punkte
    /// bei, sonst gäbe es doppelte Stift-Bewegungen.
    fn flush_ribbon(path: &mut PathBuilder, forward: &[CubicCurve], back: &mut Vec<CubicCurve>) {
        back.reverse();

        let first = &forward[0];
        path.curve(first); // vier Punkte, inklusive Move
        let first_point = first[0];

        for curve in &forward[1..] {
            path.curve(&curve[1..]);
        }

        let curve = &back[0];
        path.line_to(curve[0]); // eigentlich ein kleiner Bogen
        path.curve(&curve[1..]);

        for curve in &back[1..] {
            path.curve(&curve[1..]);
        }

        path.line_to(first_point);
    }
}

impl Shape for Sphere {
    /// Rendert die Kugel als Folge konzentrischer, geschatteter Ringe mit
    /// abschließendem Umrisskreis (der liegt zuoberst).
    fn render(&self, light: &Light) -> PathComponent {
        let mut group = PathBuilder::new();
        let mut shading = PathBuilder::new();

        let mut rings = 0usize;
        let mut r = self.r - self.shading_step;
        while r >= self.shading_step {
            shading.append(self.shade_arc(
                light,
                &Arc::new(self.center.xy(), r, r, 0.0, TAU),
            ));
            rings += 1;
            r -= self.shading_step;
        }

        debug!("sphere: {} ringe schattiert, {} komponenten", rings, shading.len());

        if !shading.is_empty() {
            group.append([shading.to_group(Some("shading"))]);
        }

        // Umriss zuletzt, damit er über der Schattierung liegt
        group.append([PathComponent::Circle {
            center: self.center.xy(),
            r: self.r,
            class_name: Some("outline".into()),
        }]);

        group.to_group(Some("shape sphere"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_sphere() -> Sphere {
        Sphere::new(SphereConfig::new().with_r(50.0)).unwrap()
    }

    fn overhead_light(intensity: f64, shadow: f64) -> Light {
        Light::new(Point3::new(0.0, 0.0, 450.0), intensity, shadow)
    }

    #[test]
    fn test_config_merges_over_defaults() {
        let sphere = Sphere::new(SphereConfig::new().with_r(100.0)).unwrap();
        assert_eq!(sphere.r, 100.0);
        assert_eq!(sphere.shading_step, 4.0);
        assert_eq!(sphere.threshold, Threshold::default());
        assert_eq!(sphere.center, Point3::origin());
    }

    #[test]
    fn test_config_rejects_nonpositive_radius() {
        assert!(Sphere::new(SphereConfig::new().with_r(-1.0)).is_err());
        assert!(Sphere::new(SphereConfig::new().with_r(0.0)).is_err());
        assert!(Sphere::new(SphereConfig::new().with_shading_step(0.0)).is_err());
    }

    #[test]
    fn test_height_at_point() {
        let sphere = unit_sphere();

        // Scheitel in der Mitte
        assert_relative_eq!(sphere.height_at_point(&Point2::new(0.0, 0.0)), 50.0);

        // am Rand flach
        assert_relative_eq!(
            sphere.height_at_point(&Point2::new(50.0, 0.0)),
            0.0,
            epsilon = 1e-6
        );

        // 3-4-5-Dreieck
        assert_relative_eq!(
            sphere.height_at_point(&Point2::new(30.0, 0.0)),
            40.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_height_respects_center_z() {
        let sphere = Sphere::new(
            SphereConfig::new()
                .with_r(50.0)
                .with_center(Point3::new(0.0, 0.0, 10.0)),
        )
        .unwrap();

        assert_relative_eq!(sphere.height_at_point(&Point2::new(0.0, 0.0)), 60.0);
    }

    #[test]
    fn test_light_at_point() {
        let sphere = unit_sphere();
        let light = overhead_light(80_000.0, 3.0);

        // Scheitel: z = 50, Abstand zum Licht 400
        let shade = sphere.light_at_point(&Point2::new(0.0, 0.0), &light);
        assert_relative_eq!(shade, 3.0 * (1.0 - 80_000.0 / 160_000.0), epsilon = 1e-9);
    }

    #[test]
    fn test_light_clamps_negative_values() {
        let sphere = unit_sphere();
        // extrem helles Licht: Intensität > 1 wird auf 0 Schatten gekappt
        let light = overhead_light(1.0e12, 3.0);

        let shade = sphere.light_at_point(&Point2::new(0.0, 0.0), &light);
        assert_eq!(shade, 0.0);
    }

    fn ring() -> Arc {
        Arc::new(Point2::new(0.0, 0.0), 30.0, 30.0, 0.0, TAU)
    }

    #[test]
    fn test_shade_arc_all_solid() {
        let sphere = unit_sphere();
        // Intensität 0: shade == shadow == 3, überall über threshold.line
        let light = overhead_light(0.0, 3.0);

        let groups = sphere.shade_arc(&light, &ring());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].class_name(), Some("shading-fill"));
        match &groups[0] {
            PathComponent::Group { components, .. } => assert!(components.len() > 50),
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_shade_arc_all_blank() {
        let sphere = unit_sphere();
        // shadow 0: shade überall 0, unter threshold.dash
        let light = overhead_light(0.0, 0.0);

        let groups = sphere.shade_arc(&light, &ring());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_shade_arc_all_dashed() {
        let sphere = unit_sphere();

        // Ring r=30 um das Zentrum: alle Abtastpunkte haben z = 40 und
        // denselben Abstand d² = 30² + (450-40)² zur Lichtquelle; die
        // Intensität ist so gewählt, dass shade ≈ 0.4 im Strich-Regime liegt
        let d2 = 900.0 + 410.0 * 410.0;
        let intensity = d2 * (1.0 - 0.4 / 3.0);
        let light = overhead_light(intensity, 3.0);

        let groups = sphere.shade_arc(&light, &ring());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].class_name(), Some("shading-stroke"));
    }

    #[test]
    fn test_shade_arc_degenerate_radius_is_empty() {
        let sphere = unit_sphere();
        let light = overhead_light(0.0, 3.0);

        let arc = Arc::new(Point2::new(0.0, 0.0), 0.2, 0.2, 0.0, TAU);
        assert!(sphere.shade_arc(&light, &arc).is_empty());
    }

    #[test]
    fn test_render_scenario() {
        // Sphere{center:(200,200,0), r:100}, step 4, Licht (50,50,400)
        let sphere = Sphere::new(
            SphereConfig::new()
                .with_center(Point3::new(200.0, 200.0, 0.0))
                .with_r(100.0)
                .with_shading_step(4.0),
        )
        .unwrap();
        let light = Light::new(Point3::new(50.0, 50.0, 400.0), 7.5e4, 3.0);

        let group = sphere.render(&light);
        assert_eq!(group.class_name(), Some("shape sphere"));

        match &group {
            PathComponent::Group { components, .. } => {
                let last = components.last().expect("non-empty group");
                assert_eq!(
                    *last,
                    PathComponent::Circle {
                        center: Point2::new(200.0, 200.0),
                        r: 100.0,
                        class_name: Some("outline".into()),
                    }
                );
            }
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let sphere = Sphere::new(
            SphereConfig::new()
                .with_center(Point3::new(200.0, 200.0, 0.0))
                .with_r(100.0),
        )
        .unwrap();
        let light = Light::new(Point3::new(50.0, 50.0, 400.0), 7.5e4, 3.0);

        assert_eq!(sphere.render(&light), sphere.render(&light));
    }
}
