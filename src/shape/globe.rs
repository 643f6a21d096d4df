// src/shape/globe.rs
use super::Shape;
use super::landmass::LandmassSource;
use super::light::Light;
use super::sphere::{Sphere, SphereConfig};
use crate::math::error::{MathError, MathResult};
use crate::math::geometry::{CubicCurve, elliptical_arc, translate_curve};
use crate::math::types::{Arc, Point2};
use crate::math::utils::constants::{PI, PI_OVER_2, TAU};
use crate::math::utils::radians;
use crate::path::{PathBuilder, PathComponent};
use log::debug;
use serde::{Deserialize, Serialize};

/// Konfiguration mit optionalen Feldern; wird in `Globe::new` einmalig
/// über die Defaults gelegt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobeConfig {
    /// Kugel-Parameter
    pub sphere: SphereConfig,
    /// Achsneigung in Radiant, Default 130°
    pub theta: Option<f64>,
    /// Rotation um die Achse, Default -14°
    pub alpha: Option<f64>,
    /// Anzahl der Längenbänder, Default 64
    pub longitudinal_steps: Option<usize>,
    /// Landmassen-Umrisse zeichnen, Default an
    pub earth_outline: Option<bool>,
    /// Landmassen füllen, Default an
    pub earth_fill: Option<bool>,
}

impl GlobeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sphere(mut self, sphere: SphereConfig) -> Self {
        self.sphere = sphere;
        self
    }

    pub fn with_theta(mut self, theta: f64) -> Self {
        self.theta = Some(theta);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn with_longitudinal_steps(mut self, steps: usize) -> Self {
        self.longitudinal_steps = Some(steps);
        self
    }

    pub fn with_earth_outline(mut self, enabled: bool) -> Self {
        self.earth_outline = Some(enabled);
        self
    }

    pub fn with_earth_fill(mut self, enabled: bool) -> Self {
        self.earth_fill = Some(enabled);
        self
    }
}

/// Sichtbarkeit einer (verschobenen) Landmassen-Ausdehnung relativ zum
/// Sichtfenster eines Bandes.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ExtentVisibility {
    /// komplett im Fenster
    Inside,
    /// Anfang sichtbar, Ende ragt hinaus
    ClippedAtEnd,
    /// Ende sichtbar, Anfang ragt hinaus
    ClippedAtStart,
}

/// Globus: Kugel mit Achsneigung, Rotation und Längengrad-Schattierung;
/// optional mit Landmassen-Umrissen und -Füllung aus einem externen
/// Datensatz.
#[derive(Debug)]
pub struct Globe {
    pub sphere: Sphere,

    /// Achsneigung in Radiant; wird beim Rendern auf `[0, π]` geklemmt
    pub theta: f64,

    /// Rotation um die Achse
    pub alpha: f64,

    /// Anzahl der Längenbänder
    pub longitudinal_steps: usize,

    /// Landmassen-Umrisse zeichnen
    pub earth_outline: bool,

    /// Landmassen füllen
    pub earth_fill: bool,

    landmass: Option<Box<dyn LandmassSource>>,
}

impl Default for Globe {
    fn default() -> Self {
        Self {
            sphere: Sphere::default(),
            theta: radians(130.0),
            alpha: radians(-14.0),
            longitudinal_steps: 64,
            earth_outline: true,
            earth_fill: true,
            landmass: None,
        }
    }
}

/// prüft λ gegen das Fenster, mit Umlauf bei ±2π
fn in_bounds(lambda: f64, lambda1: f64, lambda2: f64) -> bool {
    (lambda >= lambda1 && lambda <= lambda2)
        || (lambda + TAU >= lambda1 && lambda + TAU <= lambda2)
        || (lambda - TAU >= lambda1 && lambda - TAU <= lambda2)
}

/// Ordnet eine um alpha verschobene Ausdehnung (plus ihre um -2π
/// verschobene Kopie) in das Sichtfenster `[λ1, λ2]` ein; `None` heißt
/// für dieses Band unsichtbar. Die Fälle sind in beiden Kipp-Zweigen
/// identisch, nur die Winkelabbildung unterscheidet sich.
fn classify_extent(shifted: &[f64; 4], c: f64, lambda1: f64, lambda2: f64) -> Option<ExtentVisibility> {
    if c == 1.0
        || (shifted[0] >= lambda1 && shifted[1] <= lambda2)
        || (shifted[2] >= lambda1 && shifted[3] <= lambda2)
    {
        Some(ExtentVisibility::Inside)
    } else if (shifted[0] >= lambda1 && shifted[0] <= lambda2)
        || (shifted[2] >= lambda1 && shifted[2] <= lambda2)
    {
        Some(ExtentVisibility::ClippedAtEnd)
    } else if (shifted[1] >= lambda1 && shifted[1] <= lambda2)
        || (shifted[3] >= lambda1 && shifted[3] <= lambda2)
    {
        Some(ExtentVisibility::ClippedAtStart)
    } else {
        None
    }
}

impl Globe {
    pub fn new(config: GlobeConfig) -> MathResult<Self> {
        let defaults = Self::default();

        let globe = Self {
            sphere: Sphere::new(config.sphere)?,
            theta: config.theta.unwrap_or(defaults.theta),
            alpha: config.alpha.unwrap_or(defaults.alpha),
            longitudinal_steps: config.longitudinal_steps.unwrap_or(defaults.longitudinal_steps),
            earth_outline: config.earth_outline.unwrap_or(defaults.earth_outline),
            earth_fill: config.earth_fill.unwrap_or(defaults.earth_fill),
            landmass: None,
        };

        if globe.longitudinal_steps == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "longitudinal_steps must be at least 1".into(),
            });
        }

        Ok(globe)
    }

    /// Hinterlegt den Landmassen-Datensatz (einmalig beim Aufbau).
    pub fn with_landmass(mut self, landmass: Box<dyn LandmassSource>) -> Self {
        self.landmass = Some(landmass);
        self
    }

    /// Projiziert eine geographische Koordinate (Grad) auf den sichtbaren
    /// Teil der Kugel; `None` wenn der Punkt bei der aktuellen Neigung
    /// verdeckt ist. Verdeckung ist ein normales "kein Ergebnis", kein
    /// Fehler.
    pub fn point_to_sphere(&self, long: f64, lat: f64) -> Option<Point2> {
        // die Schattierung arbeitet um 180° versetzt, also hier auch
        let long = long - 180.0;

        let p = lat / 180.0 * PI;
        let theta = self.theta;

        let c = if theta > PI_OVER_2 {
            if theta - p > PI_OVER_2 {
                return None; // hinter dem fernen Rand
            }
            if PI - p < theta - PI_OVER_2 {
                1.0
            } else {
                p.cos() * theta.cos()
            }
        } else if theta >= 0.0 {
            if p > PI_OVER_2 + theta {
                return None;
            }
            if p < PI_OVER_2 - theta {
                1.0
            } else {
                p.cos() * theta.cos()
            }
        } else {
            // negative Neigung rendern wir nicht mehr
            return None;
        };

        let lambda1 = -c * PI_OVER_2; //   0 ± 90 => (-90,  90)
        let lambda2 = PI + c * PI_OVER_2; // 180 ± 90 => ( 90, 270)

        let lambda = TAU - (self.alpha + long / 180.0 * PI);

        // c == 1: Band voll sichtbar, kein Fenster-Test nötig
        if c != 1.0 && !in_bounds(lambda, lambda1, lambda2) {
            return None;
        }

        let center = Point2::new(
            self.sphere.center.x,
            self.sphere.center.y - p.cos() * self.sphere.r * theta.sin(),
        );

        let rx = self.sphere.r * p.sin();
        let ry = theta.cos() * rx;

        Some(Point2::new(
            rx * lambda.cos() + center.x,
            ry * lambda.sin() + center.y,
        ))
    }

    /// Sichtbare Landmassen-Umrisse: zusammenhängende sichtbare Läufe
    /// werden zu Linienzügen, bei jedem Sichtbarkeitsverlust beginnt ein
    /// neuer Zug. Das ergibt korrekt am Horizont beschnittene Küsten,
    /// ganz ohne Polygon-Clipping.
    pub fn render_earth_outlines(&self) -> PathComponent {
        let mut path = PathBuilder::new();

        if let Some(landmass) = &self.landmass {
            for outline in landmass.outlines() {
                let mut drawing = false;

                for geo in outline {
                    match self.point_to_sphere(geo.long, geo.lat) {
                        Some(point) => {
                            if drawing {
                                path.line_to(point);
                            } else {
                                path.move_to(point);
                                drawing = true;
                            }
                        }
                        None => drawing = false,
                    }
                }
            }
        }

        path.to_group(Some("landmass-outline"))
    }

    /// Füllbögen für die Landmassen-Ausdehnungen eines Bandes. `map` bildet
    /// das klassifizierte Fenster auf das Winkelpaar des jeweiligen
    /// Kipp-Zweigs ab.
    fn fill_band_extents(
        &self,
        landmass_path: &mut PathBuilder,
        p: f64,
        center: &Point2,
        rx: f64,
        ry: f64,
        c: f64,
        lambda1: f64,
        lambda2: f64,
        map: impl Fn(ExtentVisibility, &[f64; 4]) -> (f64, f64),
    ) {
        let Some(landmass) = &self.landmass else {
            return;
        };

        // Bänder ohne Ausdehnung können nichts füllen
        if rx <= 0.0 {
            return;
        }

        for extent in landmass.coverage(p / PI * 180.0) {
            // die Ausdehnungen liegen in (0, 2π); nach der alpha-Verschiebung
            // in (-180, 540), aber die Erde läuft ja rum -- deshalb wird die
            // um -2π verschobene Kopie mitgeprüft
            let shifted = [
                extent[0] + self.alpha,
                extent[1] + self.alpha,
                extent[0] + self.alpha - TAU,
                extent[1] + self.alpha - TAU,
            ];

            let Some(visibility) = classify_extent(&shifted, c, lambda1, lambda2) else {
                continue;
            };

            let (a1, a2) = map(visibility, &shifted);
            let arc: Vec<CubicCurve> = elliptical_arc(rx, ry, a1, a2);

            for curve in &arc {
                landmass_path.curve(&translate_curve(curve, center));
            }
        }
    }
}

impl Shape for Globe {
    /// Längengrad-Rendering: pro Band ein elliptischer Bogen, geschattet
    /// über `shade_arc`, plus Landmassen-Füllung gegen das Sichtfenster
    /// des Bandes. Gruppenreihenfolge: Umrisse, Füllung, Schattierung,
    /// zuletzt der Umrisskreis.
    fn render(&self, light: &Light) -> PathComponent {
        let mut group = PathBuilder::new();

        if self.earth_outline {
            group.append([self.render_earth_outlines()]);
        }

        // Neigung klemmen; exakte 0/90/180 Grad ergäben entartete, flache
        // Ellipsen, deshalb minimal verstimmen
        let mut rotation = self.theta.clamp(0.0, PI);

        if rotation == PI_OVER_2 {
            rotation *= 0.999;
        }
        if rotation == PI {
            rotation *= 0.999;
        }
        if rotation == 0.0 {
            rotation = PI * 0.001;
        }

        let cx = self.sphere.center.x;
        let cy = self.sphere.center.y;
        let r = self.sphere.r;

        let mut landmass_path = PathBuilder::new();

        // die variabel breiten Schattierungsbögen der Bänder
        let mut shading = PathBuilder::new();

        let step = PI / self.longitudinal_steps as f64;
        let mut visible = 0usize;

        if rotation > PI_OVER_2 {
            for i in 0..self.longitudinal_steps {
                let p = i as f64 * step;

                let center = Point2::new(cx, cy - p.cos() * r * rotation.sin());

                // Bögen mit ry < 0 kann das Backend nicht, also stellen wir
                // das Band auf den Kopf und drehen um 180°; ab hier gibt es
                // den logischen und den gerenderten Bogen
                let rx = r * p.sin();
                let ry = rotation.cos() * rx;

                if rotation - p > PI_OVER_2 {
                    continue; // nicht sichtbar
                }
                visible += 1;

                let c = if PI - p < rotation - PI_OVER_2 {
                    1.0
                } else {
                    p.cos() * rotation.cos()
                };

                // das logische Fenster; gerendert wird um π gedreht
                let lambda1 = -c * PI_OVER_2;
                let lambda2 = PI + c * PI_OVER_2;

                shading.append(self.sphere.shade_arc(
                    light,
                    &Arc::new(center, rx, -ry, lambda1 + PI, lambda2 + PI),
                ));

                if self.earth_fill {
                    self.fill_band_extents(
                        &mut landmass_path,
                        p,
                        &center,
                        rx,
                        -ry,
                        c,
                        lambda1,
                        lambda2,
                        |visibility, shifted| match visibility {
                            ExtentVisibility::Inside => (PI + shifted[0], PI + shifted[1]),
                            ExtentVisibility::ClippedAtEnd => (PI + shifted[0], PI + lambda2),
                            ExtentVisibility::ClippedAtStart => (PI + lambda1, PI + shifted[1]),
                        },
                    );
                }
            }
        } else {
            for i in 0..self.longitudinal_steps {
                let p = i as f64 * step;

                let center = Point2::new(cx, cy - p.cos() * r * rotation.sin());

                let rx = r * p.sin();
                let ry = rotation.cos() * rx;

                if p > PI_OVER_2 + rotation {
                    continue; // nicht sichtbar
                }
                visible += 1;

                let c = if p < PI_OVER_2 - rotation {
                    1.0
                } else {
                    p.cos() * rotation.cos()
                };

                let lambda1 = -c * PI_OVER_2; // (-90, 90)
                let lambda2 = PI + c * PI_OVER_2; // (90, 270)

                shading.append(self.sphere.shade_arc(
                    light,
                    &Arc::new(center, rx, ry, lambda1, lambda2),
                ));

                if self.earth_fill {
                    // gegenüber dem Zweig oben sind die Winkel gespiegelt
                    // (dort wird um 180° gedreht)
                    self.fill_band_extents(
                        &mut landmass_path,
                        p,
                        &center,
                        rx,
                        ry,
                        c,
                        lambda1,
                        lambda2,
                        |visibility, shifted| match visibility {
                            ExtentVisibility::Inside => (PI - shifted[1], PI - shifted[0]),
                            ExtentVisibility::ClippedAtEnd => (PI - lambda2, PI - shifted[0]),
                            ExtentVisibility::ClippedAtStart => (PI - shifted[1], PI - lambda1),
                        },
                    );
                }
            }
        }

        debug!(
            "globe: {} von {} bändern sichtbar",
            visible, self.longitudinal_steps
        );

        if !landmass_path.is_empty() {
            group.append([landmass_path.to_group(Some("landmass-shading"))]);
        }

        if !shading.is_empty() {
            group.append([shading.to_group(Some("shading"))]);
        }

        // Umriss zuletzt, damit er zuoberst liegt
        group.append([PathComponent::Circle {
            center: self.sphere.center.xy(),
            r: self.sphere.r,
            class_name: Some("outline".into()),
        }]);

        group.to_group(Some("shape sphere globe"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Point3;
    use crate::shape::landmass::GeoPoint;
    use approx::assert_relative_eq;

    /// kleiner Datensatz mit einem Umriss und einer Abdeckungszeile
    #[derive(Debug)]
    struct TestLandmass {
        outlines: Vec<Vec<GeoPoint>>,
    }

    impl TestLandmass {
        fn new() -> Self {
            // Ring auf Kolatitude 90°, einmal um den Globus
            let outline = (0..12)
                .map(|i| GeoPoint::new(i as f64 * 30.0, 90.0))
                .collect();
            Self {
                outlines: vec![outline],
            }
        }
    }

    impl LandmassSource for TestLandmass {
        fn outlines(&self) -> &[Vec<GeoPoint>] {
            &self.outlines
        }

        fn coverage(&self, lat: f64) -> Vec<[f64; 2]> {
            // ein Streifen zwischen 60° und 120° Kolatitude
            if (60.0..=120.0).contains(&lat) {
                vec![[0.5, 1.2]]
            } else {
                Vec::new()
            }
        }
    }

    fn test_globe(theta: f64, alpha: f64) -> Globe {
        Globe::new(
            GlobeConfig::new()
                .with_sphere(
                    SphereConfig::new()
                        .with_center(Point3::new(200.0, 200.0, 0.0))
                        .with_r(100.0),
                )
                .with_theta(theta)
                .with_alpha(alpha),
        )
        .unwrap()
    }

    #[test]
    fn test_config_merges_over_defaults() {
        let globe = Globe::new(GlobeConfig::new()).unwrap();
        assert_relative_eq!(globe.theta, radians(130.0));
        assert_relative_eq!(globe.alpha, radians(-14.0));
        assert_eq!(globe.longitudinal_steps, 64);
        assert!(globe.earth_outline);
        assert!(globe.earth_fill);
    }

    #[test]
    fn test_config_rejects_zero_steps() {
        assert!(Globe::new(GlobeConfig::new().with_longitudinal_steps(0)).is_err());
    }

    #[test]
    fn test_point_to_sphere_near_top_down() {
        // fast senkrecht von oben: jeder Punkt mit |lat| < 90 liegt in der
        // projizierten Scheibe
        let globe = test_globe(0.001, 0.0);
        let center = Point2::new(200.0, 200.0);

        for lat in [-89.0, -45.0, 0.0, 30.0, 89.0] {
            for long in [0.0, 90.0, 180.0, 270.0] {
                let point = globe
                    .point_to_sphere(long, lat)
                    .expect("sichtbar bei Draufsicht");
                assert!((point - center).norm() <= globe.sphere.r + 1e-6);
            }
        }
    }

    #[test]
    fn test_point_to_sphere_equator_column() {
        // lat 0 => rx == 0, der Punkt liegt in der Mittelspalte
        let globe = test_globe(1.0, 0.0);

        let point = globe.point_to_sphere(45.0, 0.0).expect("sichtbar");
        assert_relative_eq!(point.x, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_to_sphere_occluded_by_tilt() {
        // theta = 100°: alles mit Kolatitude < theta - 90° ist hinter dem
        // fernen Rand
        let globe = test_globe(radians(100.0), 0.0);
        assert!(globe.point_to_sphere(0.0, 0.0).is_none());
        assert!(globe.point_to_sphere(120.0, 5.0).is_none());
    }

    #[test]
    fn test_point_to_sphere_window_shrinks_with_tilt() {
        // lat 45°, long 165°: am Rand des Sichtfensters; bei stärkerer
        // Neigung schrumpft das Fenster und der Punkt verschwindet
        let near = test_globe(1.8, 0.0);
        let far = test_globe(1.9, 0.0);

        assert!(near.point_to_sphere(165.0, 45.0).is_some());
        assert!(far.point_to_sphere(165.0, 45.0).is_none());
    }

    #[test]
    fn test_point_to_sphere_negative_tilt() {
        let globe = test_globe(-0.5, 0.0);
        assert!(globe.point_to_sphere(0.0, 0.0).is_none());
    }

    #[test]
    fn test_classify_extent_branches() {
        // Fenster für c = 0.5: [-π/4, π + π/4]
        let c = 0.5;
        let l1 = -c * PI_OVER_2;
        let l2 = PI + c * PI_OVER_2;

        // komplett sichtbar
        let inside = [0.2, 1.0, 0.2 - TAU, 1.0 - TAU];
        assert_eq!(
            classify_extent(&inside, c, l1, l2),
            Some(ExtentVisibility::Inside)
        );

        // c == 1 schlägt jede Fensterprüfung
        assert_eq!(
            classify_extent(&[9.0, 9.5, 9.0 - TAU, 9.5 - TAU], 1.0, l1, l2),
            Some(ExtentVisibility::Inside)
        );

        // Anfang sichtbar, Ende ragt hinaus
        let clipped_end = [3.5, 4.5, 3.5 - TAU, 4.5 - TAU];
        assert_eq!(
            classify_extent(&clipped_end, c, l1, l2),
            Some(ExtentVisibility::ClippedAtEnd)
        );

        // Anfang ragt hinaus, Ende sichtbar
        let clipped_start = [-1.5, 0.3, -1.5 - TAU, 0.3 - TAU];
        assert_eq!(
            classify_extent(&clipped_start, c, l1, l2),
            Some(ExtentVisibility::ClippedAtStart)
        );

        // ganz außerhalb
        let outside = [4.1, 4.5, 4.1 - TAU, 4.5 - TAU];
        assert_eq!(classify_extent(&outside, c, l1, l2), None);
    }

    #[test]
    fn test_in_bounds_wraparound() {
        assert!(in_bounds(0.5, 0.0, 1.0));
        assert!(in_bounds(0.5 + TAU, 0.0, 1.0));
        assert!(in_bounds(0.5 - TAU, 0.0, 1.0));
        assert!(!in_bounds(2.0, 0.0, 1.0));
    }

    #[test]
    fn test_render_outlines_break_at_horizon() {
        let globe = test_globe(radians(130.0), 0.0)
            .with_landmass(Box::new(TestLandmass::new()));

        let group = globe.render_earth_outlines();
        match group {
            PathComponent::Group {
                class_name,
                components,
            } => {
                assert_eq!(class_name.as_deref(), Some("landmass-outline"));
                // der Umriss läuft einmal um den Globus, ein Teil liegt auf
                // der abgewandten Seite: mindestens ein Move und Linien
                assert!(
                    components
                        .iter()
                        .any(|c| matches!(c, PathComponent::Move { .. }))
                );
                assert!(
                    components
                        .iter()
                        .any(|c| matches!(c, PathComponent::Line { .. }))
                );
                // nicht alle 12 Punkte sichtbar => weniger Komponenten
                assert!(components.len() < 12);
            }
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_render_scenario_globe() {
        let globe = test_globe(radians(130.0), radians(-14.0))
            .with_landmass(Box::new(TestLandmass::new()));
        let light = Light::new(Point3::new(50.0, 50.0, 400.0), 7.5e4, 3.0);

        let group = globe.render(&light);
        assert_eq!(group.class_name(), Some("shape sphere globe"));

        match &group {
            PathComponent::Group { components, .. } => {
                // Umrisse zuerst, Kreis zuletzt
                assert_eq!(components[0].class_name(), Some("landmass-outline"));
                assert_eq!(
                    *components.last().unwrap(),
                    PathComponent::Circle {
                        center: Point2::new(200.0, 200.0),
                        r: 100.0,
                        class_name: Some("outline".into()),
                    }
                );
                // Füllung und Schattierung sind bei diesem Licht nicht leer
                assert!(
                    components
                        .iter()
                        .any(|c| c.class_name() == Some("landmass-shading"))
                );
                assert!(components.iter().any(|c| c.class_name() == Some("shading")));
            }
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_render_upright_branch() {
        // theta < 90°: der zweite Zweig, ohne die 180°-Drehung
        let globe = test_globe(1.0, 0.0).with_landmass(Box::new(TestLandmass::new()));
        let light = Light::new(Point3::new(50.0, 50.0, 400.0), 7.5e4, 3.0);

        let group = globe.render(&light);
        assert_eq!(group.class_name(), Some("shape sphere globe"));

        match &group {
            PathComponent::Group { components, .. } => {
                assert!(matches!(
                    components.last().unwrap(),
                    PathComponent::Circle { .. }
                ));
            }
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_render_is_deterministic_and_pure() {
        let globe = test_globe(radians(130.0), radians(-14.0))
            .with_landmass(Box::new(TestLandmass::new()));
        let light = Light::new(Point3::new(50.0, 50.0, 400.0), 7.5e4, 3.0);

        let theta_before = globe.theta;
        let first = globe.render(&light);
        let second = globe.render(&light);

        assert_eq!(first, second);
        // render klemmt theta nur lokal
        assert_eq!(globe.theta, theta_before);
    }

    #[test]
    fn test_render_exact_quarter_tilt_is_nudged() {
        // exakt 90° wird vor der Trigonometrie verstimmt, sonst gäbe es
        // Ellipsen ohne Höhe
        let globe = test_globe(PI_OVER_2, 0.0);
        let light = Light::new(Point3::new(50.0, 50.0, 400.0), 7.5e4, 3.0);

        let group = globe.render(&light);
        assert_eq!(group.class_name(), Some("shape sphere globe"));
    }
}
