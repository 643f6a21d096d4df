// src/path/builder.rs
use super::component::PathComponent;
use crate::math::types::Point2;

/// Akkumulator für Pfad-Komponenten; fluent Interface.
///
/// `to_group` konsumiert den Builder und verschiebt die gesammelte
/// Sequenz ohne Kopie in die Gruppe; danach kann niemand mehr in die
/// versiegelte Gruppe hineinschreiben.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    components: Vec<PathComponent>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[PathComponent] {
        &self.components
    }

    /// Stift bewegen
    pub fn move_to(&mut self, point: Point2) -> &mut Self {
        self.components.push(PathComponent::Move { point });
        self
    }

    /// Linie zur Zielposition
    pub fn line_to(&mut self, point: Point2) -> &mut Self {
        self.components.push(PathComponent::Line { point });
        self
    }

    /// Kubische Bezier-Kurve. Bei vier Punkten wird ein implizites `Move`
    /// zum ersten Punkt eingefügt, bei drei Punkten startet die Kurve an
    /// der aktuellen Stiftposition. Jede andere Anzahl ist ein
    /// Programmierfehler.
    pub fn curve(&mut self, points: &[Point2]) -> &mut Self {
        let points = match points.len() {
            3 => points,
            4 => {
                self.components.push(PathComponent::Move { point: points[0] });
                &points[1..]
            }
            n => panic!("cubic curve expects 3 or 4 points, got {n}"),
        };

        self.components.push(PathComponent::Bezier3 {
            q1: points[0],
            q2: points[1],
            p2: points[2],
        });

        self
    }

    /// Fügt fertige Komponenten (auch verschachtelte Gruppen) unverändert an.
    pub fn append(&mut self, components: impl IntoIterator<Item = PathComponent>) -> &mut Self {
        self.components.extend(components);
        self
    }

    /// Versiegelt die Sequenz zu einer Gruppe.
    pub fn to_group(self, class_name: Option<&str>) -> PathComponent {
        PathComponent::Group {
            class_name: class_name.map(str::to_owned),
            components: self.components,
        }
    }
}
